mod dictionary;
mod evaluator;
mod game;
mod input;
mod letters;
mod notice;

pub mod errors {
    error_chain! {
        foreign_links {
            Io(::std::io::Error);
            Json(::serde_json::Error);
        }

        errors {
            ResourceUnavailable(resource: String) {
                description("resource unavailable")
                display("could not load resource '{}'", resource)
            }
            EmptyDictionary {
                description("empty dictionary")
                display("the dictionary has no five-letter words to choose from")
            }
        }
    }
}

pub use dictionary::{Dictionary, JsonDictionary};
pub use errors::{Error, ErrorKind, Result};
pub use evaluator::Classification;
pub use game::{Board, MatchState};
pub use input::{InputOutcome, InputProcessor, KeyEvent};
pub use letters::{Letter, MAX_GUESSES, WORD_LENGTH};
pub use notice::Notice;
