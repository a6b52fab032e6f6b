use log::{debug, info};
use rand::RngCore;

use crate::console;
use crate::wordle::{
    Board, Dictionary, InputOutcome, InputProcessor, JsonDictionary, KeyEvent, MatchState, Notice,
    Result,
};

/// Seconds an invalid-word notice stays on screen.
pub const NOTICE_SECONDS: f32 = 2.0;

/// Everything the frame loop needs: the dictionary, the match and the
/// message currently shown to the player.
pub struct App {
    dictionary: JsonDictionary,
    board: Board,
    notice: Option<Notice>,
}

impl App {
    pub fn new(dictionary: JsonDictionary, rng: &mut dyn RngCore) -> Result<App> {
        let target = dictionary.sample(rng)?;
        info!("New match started");
        debug!("Target word is {}", target);
        Ok(App {
            dictionary,
            board: Board::new(target),
            notice: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Runs one frame of game logic.
    pub fn update(&mut self, events: &[KeyEvent], elapsed: f32) -> InputOutcome {
        if self.notice.as_mut().map_or(false, |n| !n.tick(elapsed)) {
            self.notice = None;
        }

        let outcome = InputProcessor::new(&self.dictionary).process(&mut self.board, events);
        match &outcome {
            InputOutcome::NotInDictionary(word) => {
                let text = format!("\"{}\" no es una palabra válida", word);
                console::print_notice(&text);
                self.notice = Some(Notice::new(text, NOTICE_SECONDS));
            }
            InputOutcome::Won(_) | InputOutcome::Missed(_) | InputOutcome::Lost(_) => {
                let row = if self.board.is_won() {
                    self.board.current()
                } else {
                    self.board.current() - 1
                };
                console::print_row(&self.board, row);
            }
            _ => {}
        }
        outcome
    }

    /// The closing line of a finished match.
    pub fn end_message(&self) -> Option<String> {
        match self.board.state() {
            MatchState::Playing => None,
            MatchState::Won => Some("¡Ganaste!".to_string()),
            MatchState::Lost => Some(format!(
                "Perdiste... La palabra era: {}",
                self.board.target()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app(words: &[&str]) -> App {
        let mut rng = StdRng::seed_from_u64(1);
        App::new(JsonDictionary::from_words(words), &mut rng).unwrap()
    }

    fn type_word(app: &mut App, word: &str) -> InputOutcome {
        for c in word.chars() {
            app.update(&[KeyEvent::Letter(c)], 0.016);
        }
        app.update(&[KeyEvent::Commit], 0.016)
    }

    #[test]
    fn empty_dictionary_cannot_start_a_match() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(App::new(JsonDictionary::from_words(Vec::<&str>::new()), &mut rng).is_err());
    }

    #[test]
    fn invalid_word_shows_a_notice_for_a_while() {
        let mut app = app(&["messi"]);
        assert!(matches!(
            type_word(&mut app, "zzzzz"),
            InputOutcome::NotInDictionary(_)
        ));
        assert_eq!(
            Some("\"ZZZZZ\" no es una palabra válida"),
            app.notice().map(Notice::text)
        );
        assert_eq!(0, app.board().current());

        app.update(&[], NOTICE_SECONDS / 2.0);
        assert!(app.notice().is_some());
        app.update(&[], NOTICE_SECONDS);
        assert!(app.notice().is_none());
    }

    #[test]
    fn winning_ends_with_message() {
        let mut app = app(&["messi"]);
        assert_eq!(None, app.end_message());
        assert!(matches!(type_word(&mut app, "messi"), InputOutcome::Won(_)));
        assert_eq!(Some("¡Ganaste!".to_string()), app.end_message());

        let before = app.board().clone();
        assert_eq!(InputOutcome::Ignored, type_word(&mut app, "messi"));
        assert_eq!(&before, app.board());
    }

    #[test]
    fn losing_reveals_the_target() {
        let mut words: Vec<&str> = vec!["messi"];
        let mut app = app(&words);
        assert_eq!("MESSI", app.board().target().to_string());

        words.push("perro");
        app.dictionary = JsonDictionary::from_words(&words);
        for _ in 0..crate::wordle::MAX_GUESSES {
            type_word(&mut app, "perro");
        }
        assert_eq!(MatchState::Lost, app.board().state());
        assert_eq!(
            Some("Perdiste... La palabra era: MESSI".to_string()),
            app.end_message()
        );
    }
}
