//! Core domain types for the word game
//!
//! Pure data types with no I/O: words, feedback scoring, the guess grid,
//! keyboard layouts and the accepted-word dictionary.

mod dictionary;
mod feedback;
mod grid;
mod keyboard;
mod word;

pub use dictionary::Dictionary;
pub use feedback::{Feedback, LetterState};
pub use grid::{Cell, Cursor, Grid, Row};
pub use keyboard::{Key, KeyboardLayout, KeyboardState};
pub use word::{WORD_LENGTH, Word, WordError, lower, upper};
