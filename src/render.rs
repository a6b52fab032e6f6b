use macroquad::prelude::*;

use crate::app::App;
use crate::wordle::{Board, Classification, MAX_GUESSES, WORD_LENGTH};

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const TILE_SIZE: f32 = 50.0;
pub const TILE_SPACING: f32 = 10.0;
pub const NORMAL_FONT_SIZE: u16 = 24;

const EXACT_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const PRESENT_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);
const ABSENT_COLOR: Color = Color::new(0.5, 0.5, 0.5, 1.0);
const EMPTY_COLOR: Color = WHITE;

/// Top-left corner of a tile. Tiles are separated, and kept off the window
/// edges, by `TILE_SPACING`.
pub fn tile_origin(row: usize, col: usize) -> (f32, f32) {
    let x = col as f32 * TILE_SIZE + (col + 1) as f32 * TILE_SPACING;
    let y = row as f32 * TILE_SIZE + (row + 1) as f32 * TILE_SPACING;
    (x, y)
}

pub fn tile_color(status: Option<Classification>) -> Color {
    match status {
        Some(Classification::Exact) => EXACT_COLOR,
        Some(Classification::Present) => PRESENT_COLOR,
        Some(Classification::Absent) => ABSENT_COLOR,
        None => EMPTY_COLOR,
    }
}

/// First baseline below the grid, used for messages.
fn message_y(line: usize) -> f32 {
    let (_, grid_bottom) = tile_origin(MAX_GUESSES, 0);
    grid_bottom + NORMAL_FONT_SIZE as f32 + line as f32 * (NORMAL_FONT_SIZE as f32 + TILE_SPACING)
}

fn draw_message(text: &str, line: usize, color: Color, font: &Font) {
    draw_text_ex(
        text,
        TILE_SPACING,
        message_y(line),
        TextParams {
            font: Some(font),
            font_size: NORMAL_FONT_SIZE,
            color,
            ..Default::default()
        },
    );
}

fn draw_grid(board: &Board, font: &Font) {
    for (row, guess) in board.rows().iter().enumerate() {
        let statuses = board.classification(row);
        for col in 0..WORD_LENGTH {
            let (x, y) = tile_origin(row, col);
            let status = statuses.map(|s| s[col]);
            draw_rectangle(x, y, TILE_SIZE, TILE_SIZE, tile_color(status));

            let letter = match guess.letters().get(col) {
                Some(letter) => letter.to_string(),
                None => continue,
            };
            let size = measure_text(&letter, Some(font), NORMAL_FONT_SIZE, 1.0);
            let text_x = x + (TILE_SIZE - size.width) / 2.0;
            let text_y = y + (TILE_SIZE - size.height) / 2.0 + size.offset_y;
            draw_text_ex(
                &letter,
                text_x,
                text_y,
                TextParams {
                    font: Some(font),
                    font_size: NORMAL_FONT_SIZE,
                    color: BLACK,
                    ..Default::default()
                },
            );
        }
    }
}

/// Draws one frame. Reads the app, never changes it.
pub fn draw(app: &App, font: &Font) {
    clear_background(BLACK);
    draw_grid(app.board(), font);

    let mut line = 0;
    if let Some(message) = app.end_message() {
        draw_message(&message, line, WHITE, font);
        line += 1;
    }
    if let Some(notice) = app.notice() {
        draw_message(notice.text(), line, RED, font);
    }
}
