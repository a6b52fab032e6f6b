use super::evaluator::{evaluate, Classification};
use super::letters::{Letter, Word, MAX_GUESSES, WORD_LENGTH};

use std::fmt;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum MatchState {
    Playing,
    Won,
    Lost,
}

/// The letters typed for one attempt, never more than [`WORD_LENGTH`].
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct GuessRow {
    letters: Vec<Letter>,
}

impl GuessRow {
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_full(&self) -> bool {
        self.len() == WORD_LENGTH
    }

    /// The row as a word, once it is full.
    pub fn to_word(&self) -> Option<Word> {
        Word::from_letters(&self.letters)
    }

    fn push(&mut self, letter: Letter) -> bool {
        if self.is_full() {
            return false;
        }
        self.letters.push(letter);
        true
    }

    fn pop(&mut self) -> Option<Letter> {
        self.letters.pop()
    }
}

impl fmt::Display for GuessRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|l| write!(f, "{}", l))
    }
}

/// State of a single match.
///
/// Rows before `current` are committed misses, the row at `current` is the
/// one being typed, and every later row is empty. Once the match is won or
/// lost none of the mutators change anything.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Board {
    target: Word,
    rows: [GuessRow; MAX_GUESSES],
    current: usize,
    won: bool,
}

impl Board {
    pub fn new(target: Word) -> Board {
        Board {
            target,
            rows: Default::default(),
            current: 0,
            won: false,
        }
    }

    pub fn target(&self) -> &Word {
        &self.target
    }

    pub fn rows(&self) -> &[GuessRow; MAX_GUESSES] {
        &self.rows
    }

    /// Index of the active row, `MAX_GUESSES` once every attempt is spent.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn state(&self) -> MatchState {
        if self.won {
            MatchState::Won
        } else if self.current == MAX_GUESSES {
            MatchState::Lost
        } else {
            MatchState::Playing
        }
    }

    /// The row the player is typing into, if the match is still running.
    pub fn active_row(&self) -> Option<&GuessRow> {
        match self.state() {
            MatchState::Playing => self.rows.get(self.current),
            _ => None,
        }
    }

    /// Classification of a row that has been committed, including the
    /// winning row. Rows still being typed have none.
    pub fn classification(&self, row: usize) -> Option<[Classification; WORD_LENGTH]> {
        let committed = row < self.current || (self.won && row == self.current);
        if !committed {
            return None;
        }
        self.rows[row]
            .to_word()
            .map(|guess| evaluate(&guess, &self.target))
    }

    pub fn append_letter(&mut self, row: usize, letter: Letter) -> bool {
        if !self.is_active(row) {
            return false;
        }
        self.rows[row].push(letter)
    }

    pub fn pop_letter(&mut self, row: usize) -> Option<Letter> {
        if !self.is_active(row) {
            return None;
        }
        self.rows[row].pop()
    }

    /// Seals the active row as a miss and moves on to the next one.
    ///
    /// The row must be full and differ from the target; checking it against
    /// the dictionary is up to the caller.
    pub fn commit_row(&mut self) -> bool {
        match self.active_word() {
            Some(word) if word != self.target => {
                self.current += 1;
                true
            }
            _ => false,
        }
    }

    /// Ends the match as a win. The active row must spell the target.
    pub fn mark_won(&mut self) -> bool {
        match self.active_word() {
            Some(word) if word == self.target => {
                self.won = true;
                true
            }
            _ => false,
        }
    }

    fn is_active(&self, row: usize) -> bool {
        self.state() == MatchState::Playing && row == self.current
    }

    fn active_word(&self) -> Option<Word> {
        self.active_row().and_then(GuessRow::to_word)
    }
}
