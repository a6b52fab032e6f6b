use macroquad::prelude::{is_key_pressed, KeyCode};

use crate::wordle::KeyEvent;

/// Ñ sits where the semicolon is on a US layout.
const LETTER_KEYS: [(KeyCode, char); 27] = [
    (KeyCode::Semicolon, 'Ñ'),
    (KeyCode::A, 'A'),
    (KeyCode::B, 'B'),
    (KeyCode::C, 'C'),
    (KeyCode::D, 'D'),
    (KeyCode::E, 'E'),
    (KeyCode::F, 'F'),
    (KeyCode::G, 'G'),
    (KeyCode::H, 'H'),
    (KeyCode::I, 'I'),
    (KeyCode::J, 'J'),
    (KeyCode::K, 'K'),
    (KeyCode::L, 'L'),
    (KeyCode::M, 'M'),
    (KeyCode::N, 'N'),
    (KeyCode::O, 'O'),
    (KeyCode::P, 'P'),
    (KeyCode::Q, 'Q'),
    (KeyCode::R, 'R'),
    (KeyCode::S, 'S'),
    (KeyCode::T, 'T'),
    (KeyCode::U, 'U'),
    (KeyCode::V, 'V'),
    (KeyCode::W, 'W'),
    (KeyCode::X, 'X'),
    (KeyCode::Y, 'Y'),
    (KeyCode::Z, 'Z'),
];

/// Keys that went down during the current frame.
pub fn pressed_keys() -> Vec<KeyEvent> {
    let mut events = Vec::new();
    if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
        events.push(KeyEvent::Commit);
    }
    if is_key_pressed(KeyCode::Backspace) {
        events.push(KeyEvent::Backspace);
    }
    events.extend(
        LETTER_KEYS
            .iter()
            .filter(|(key, _)| is_key_pressed(*key))
            .map(|&(_, c)| KeyEvent::Letter(c)),
    );
    events
}
