use super::dictionary::Dictionary;
use super::game::{Board, MatchState};
use super::letters::{Letter, Word};

use log::{debug, info, warn};

/// A key press captured during one frame.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum KeyEvent {
    Letter(char),
    Backspace,
    Commit,
}

/// What a tick did to the board.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum InputOutcome {
    /// Nothing happened: no events, a terminal match, or an event whose
    /// precondition did not hold.
    Ignored,
    LetterAdded(Letter),
    LetterRemoved(Letter),
    /// A full row was submitted that is not in the dictionary. The board is
    /// left as it was.
    NotInDictionary(Word),
    /// A valid miss; the next row is now active.
    Missed(Word),
    Won(Word),
    /// The last attempt was a miss. Carries the target.
    Lost(Word),
}

/// Turns the key presses of each frame into board transitions.
pub struct InputProcessor<'a> {
    dictionary: &'a dyn Dictionary,
}

impl<'a> InputProcessor<'a> {
    pub fn new(dictionary: &'a dyn Dictionary) -> InputProcessor<'a> {
        InputProcessor { dictionary }
    }

    /// Applies at most one of `events` to `board`.
    ///
    /// A commit beats a backspace, which beats letters; among letters the
    /// first one pressed is taken.
    pub fn process(&self, board: &mut Board, events: &[KeyEvent]) -> InputOutcome {
        if board.state() != MatchState::Playing {
            return InputOutcome::Ignored;
        }

        let outcome = if events.contains(&KeyEvent::Commit) {
            self.handle_commit(board)
        } else if events.contains(&KeyEvent::Backspace) {
            Self::handle_backspace(board)
        } else {
            match events.iter().find_map(|event| match *event {
                KeyEvent::Letter(c) => Some(c),
                _ => None,
            }) {
                Some(c) => Self::handle_letter(board, c),
                None => InputOutcome::Ignored,
            }
        };

        if outcome != InputOutcome::Ignored {
            debug!("{:?} -> {:?}", events, outcome);
        }
        outcome
    }

    fn handle_letter(board: &mut Board, c: char) -> InputOutcome {
        let letter = match Letter::new(c) {
            Some(letter) => letter,
            None => return InputOutcome::Ignored,
        };
        if board.append_letter(board.current(), letter) {
            InputOutcome::LetterAdded(letter)
        } else {
            InputOutcome::Ignored
        }
    }

    fn handle_backspace(board: &mut Board) -> InputOutcome {
        match board.pop_letter(board.current()) {
            Some(letter) => InputOutcome::LetterRemoved(letter),
            None => InputOutcome::Ignored,
        }
    }

    fn handle_commit(&self, board: &mut Board) -> InputOutcome {
        let word = match board.active_row().and_then(|row| row.to_word()) {
            Some(word) => word,
            None => return InputOutcome::Ignored,
        };

        if !self.dictionary.contains_word(&word.to_lowercase()) {
            warn!("{} is not a valid word", word);
            return InputOutcome::NotInDictionary(word);
        }

        if board.mark_won() {
            info!("Won in {} attempts", board.current() + 1);
            return InputOutcome::Won(word);
        }

        board.commit_row();
        if board.state() == MatchState::Lost {
            info!("Lost, the word was {}", board.target());
            InputOutcome::Lost(*board.target())
        } else {
            InputOutcome::Missed(word)
        }
    }
}
