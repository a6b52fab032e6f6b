use colored::*;

use crate::wordle::{Board, Classification, Letter};

fn colored_letter(letter: Letter, status: Classification) -> ColoredString {
    let c = letter.to_string();
    match status {
        Classification::Exact => c.black().on_green(),
        Classification::Present => c.black().on_yellow(),
        Classification::Absent => c.white().on_bright_black(),
    }
}

fn format_row(board: &Board, row: usize) -> Option<String> {
    let statuses = board.classification(row)?;
    let colored_string = board.rows()[row]
        .letters()
        .iter()
        .zip(statuses.iter())
        .map(|(&letter, &status)| colored_letter(letter, status).to_string())
        .collect::<Vec<String>>()
        .join(" ");
    Some(colored_string)
}

/// Echoes a committed row to the terminal.
pub fn print_row(board: &Board, row: usize) {
    if let Some(line) = format_row(board, row) {
        println!("{}", line);
    }
}

pub fn print_notice(text: &str) {
    eprintln!("{}", text.red());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::{Dictionary, InputProcessor, JsonDictionary, KeyEvent};

    #[test]
    fn formats_committed_rows_only() {
        colored::control::set_override(false);

        let dict = JsonDictionary::from_words(["messi", "mesas"]);
        let mut board = Board::new("messi".parse().unwrap());
        let processor = InputProcessor::new(&dict);
        for c in "mesas".chars() {
            processor.process(&mut board, &[KeyEvent::Letter(c)]);
        }
        assert_eq!(None, format_row(&board, 0));

        processor.process(&mut board, &[KeyEvent::Commit]);
        assert!(dict.contains_word("mesas"));
        assert_eq!(Some("M E S A S".to_string()), format_row(&board, 0));
        assert_eq!(None, format_row(&board, 1));
    }
}
