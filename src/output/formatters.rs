//! Formatting utilities for terminal output

use crate::core::{
    Cell, Feedback, Key, KeyboardLayout, KeyboardState, LetterState, Row, Word, upper,
};
use crate::game::{Game, GameStatus};
use colored::{ColoredString, Colorize};

/// Colour a single letter tile by its feedback state
#[must_use]
pub fn colored_tile(letter: char, state: LetterState) -> ColoredString {
    let tile = format!(" {letter} ");
    match state {
        LetterState::Correct => tile.black().on_green().bold(),
        LetterState::Present => tile.black().on_yellow().bold(),
        LetterState::Absent => tile.white().on_bright_black(),
        LetterState::Default => tile.normal(),
    }
}

/// Render one grid row as coloured tiles, empty cells as `_`
#[must_use]
pub fn row_line(row: &Row) -> String {
    row.iter()
        .map(|cell: &Cell| colored_tile(cell.letter.unwrap_or('_'), cell.state).to_string())
        .collect()
}

/// Render a scored guess that is not part of a grid
#[must_use]
pub fn feedback_line(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.states())
        .map(|(&letter, &state)| colored_tile(upper(letter), state).to_string())
        .collect()
}

/// Render the keyboard, one string per layout row, control keys omitted
#[must_use]
pub fn keyboard_lines(layout: &KeyboardLayout, keyboard: &KeyboardState) -> Vec<String> {
    layout
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .filter_map(|key| match key {
                    Key::Letter(letter) => {
                        Some(colored_tile(*letter, keyboard.get(*letter)).to_string())
                    }
                    _ => None,
                })
                .collect()
        })
        .collect()
}

/// Banner lines for a finished game; empty while still playing
#[must_use]
pub fn end_of_game_lines(game: &Game, meaning: Option<&str>) -> Vec<String> {
    let word = game.target().text().to_uppercase();
    match game.status() {
        GameStatus::Playing => Vec::new(),
        GameStatus::Won => {
            let mut lines = vec!["Congratulations 🎉! You won!".to_string()];
            if let Some(meaning) = meaning {
                lines.push(format!("The word {word} means: {meaning} 😎"));
            }
            lines
        }
        GameStatus::Lost => {
            let mut lines = vec![format!("Game Over 😜! The word was: {word}")];
            if let Some(meaning) = meaning {
                lines.push(format!("which means: {meaning} 😎"));
            }
            lines
        }
    }
}

/// User-facing alert for a rejected guess
#[must_use]
pub fn invalid_word_message(word: &str) -> String {
    format!("❎ {} is not in the word list! 😜", word.to_uppercase())
}
