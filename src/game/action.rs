//! Key-token routing
//!
//! Every input source (TUI key events, line mode, on-screen keys) is reduced
//! to a string token before reaching the game. Tokens are case-insensitive:
//! `"ENTER"` submits, `"BACKSPACE"` deletes, and a single letter of the active
//! layout is typed. Anything else is ignored.

use crate::core::{KeyboardLayout, upper};

/// What a key token asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Delete,
    Submit,
}

impl Action {
    /// Parse a raw key token against the active layout
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::KeyboardLayout;
    /// use wordle_game::game::Action;
    ///
    /// let layout = KeyboardLayout::ENGLISH;
    /// assert_eq!(Action::parse("enter", &layout), Some(Action::Submit));
    /// assert_eq!(Action::parse("q", &layout), Some(Action::Insert('Q')));
    /// assert_eq!(Action::parse("Shift", &layout), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str, layout: &KeyboardLayout) -> Option<Self> {
        let normalized = token.to_uppercase();
        match normalized.as_str() {
            "BACKSPACE" => Some(Self::Delete),
            "ENTER" => Some(Self::Submit),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) if layout.contains(letter) => {
                        Some(Self::Insert(upper(letter)))
                    }
                    _ => None,
                }
            }
        }
    }
}
