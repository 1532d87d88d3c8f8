//! Wordle Game
//!
//! A two-language (English and Irish) Wordle-style word game. The core is an
//! explicit state machine that scores guesses with Wordle's duplicate-aware
//! two-pass rules and tracks keyboard colours, cursor and win/loss status.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//!
//! let guess = Word::new("grape").unwrap();
//! let answer = Word::new("apple").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &answer);
//! assert_eq!(feedback.to_emoji(), "⬜⬜🟨🟨🟩");
//! ```

// Core domain types
pub mod core;

// Guess evaluation state machine
pub mod game;

// Languages and their word lists
pub mod language;
pub mod wordlists;

// Round management and statistics
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup for the binary
pub mod logging;
