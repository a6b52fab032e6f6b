use std::fmt;
use std::str::FromStr;

pub const WORD_LENGTH: usize = 5;
pub const MAX_GUESSES: usize = 6;

/// Every letter a player may type: the Latin alphabet plus Ñ.
pub const ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// A single uppercase letter from [`ALPHABET`].
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Letter(char);

impl Letter {
    /// Normalizes `c` to uppercase, returning `None` if it is not part of the alphabet.
    pub fn new(c: char) -> Option<Letter> {
        let mut upper = c.to_uppercase();
        let c = upper.next()?;
        if upper.next().is_some() {
            return None;
        }
        Letter::index_of(c).map(|_| Letter(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Position of the letter in [`ALPHABET`].
    pub fn index(self) -> usize {
        // Only constructed through `new`, so the lookup always succeeds.
        Letter::index_of(self.0).unwrap_or_default()
    }

    fn index_of(c: char) -> Option<usize> {
        ALPHABET.iter().position(|&a| a == c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exactly [`WORD_LENGTH`] letters, compared code point by code point.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Word([Letter; WORD_LENGTH]);

impl Word {
    /// Builds a word from a slice, which must hold exactly [`WORD_LENGTH`] letters.
    pub fn from_letters(letters: &[Letter]) -> Option<Word> {
        letters.try_into().ok().map(Word)
    }

    pub fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.0
    }

    pub fn to_lowercase(&self) -> String {
        self.0
            .iter()
            .flat_map(|l| l.as_char().to_lowercase())
            .collect()
    }
}

impl FromStr for Word {
    type Err = ();

    /// Parses a word in any case. Fails on wrong length or letters outside the alphabet.
    fn from_str(s: &str) -> Result<Word, ()> {
        let letters = s.chars().map(Letter::new).collect::<Option<Vec<Letter>>>().ok_or(())?;
        Word::from_letters(&letters).ok_or(())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|l| write!(f, "{}", l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_uppercase() {
        assert_eq!(Some('A'), Letter::new('a').map(Letter::as_char));
        assert_eq!(Some('Ñ'), Letter::new('ñ').map(Letter::as_char));
        assert_eq!(Some('Z'), Letter::new('Z').map(Letter::as_char));
    }

    #[test]
    fn rejects_letters_outside_alphabet() {
        assert_eq!(None, Letter::new('á'));
        assert_eq!(None, Letter::new('1'));
        assert_eq!(None, Letter::new(';'));
        assert_eq!(None, Letter::new('ß'));
    }

    #[test]
    fn letter_index_follows_alphabet() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(i, Letter::new(c).unwrap().index());
        }
    }

    #[test]
    fn parses_words_by_code_point() {
        let word: Word = "señor".parse().unwrap();
        assert_eq!("SEÑOR", word.to_string());
        assert_eq!("señor", word.to_lowercase());
        assert_eq!('Ñ', word.letters()[2].as_char());
    }

    #[test]
    fn rejects_accented_words() {
        assert!("ñandú".parse::<Word>().is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!("mess".parse::<Word>().is_err());
        assert!("messis".parse::<Word>().is_err());
        assert!("".parse::<Word>().is_err());
    }
}
