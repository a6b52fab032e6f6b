use super::letters::{Word, ALPHABET, WORD_LENGTH};

/// How a single position of a committed guess relates to the target.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Classification {
    /// Same letter in the same position.
    Exact,
    /// The letter appears in an unmatched position of the target.
    Present,
    Absent,
}

/// Classifies every position of `guess` against `target`.
///
/// Exact matches are resolved first and consume their target letter. The
/// remaining target letters are then handed out left to right, so a letter
/// is never reported more times than it occurs in the target.
pub fn evaluate(guess: &Word, target: &Word) -> [Classification; WORD_LENGTH] {
    let guess = guess.letters();
    let target = target.letters();

    let mut result = [Classification::Absent; WORD_LENGTH];
    let mut remaining = [0u8; ALPHABET.len()];

    for (pos, (g, t)) in guess.iter().zip(target.iter()).enumerate() {
        if g == t {
            result[pos] = Classification::Exact;
        } else {
            remaining[t.index()] += 1;
        }
    }

    for (pos, g) in guess.iter().enumerate() {
        if result[pos] == Classification::Exact {
            continue;
        }
        let count = &mut remaining[g.index()];
        if *count > 0 {
            *count -= 1;
            result[pos] = Classification::Present;
        }
    }

    result
}
