//! Game languages
//!
//! Each language bundles a keyboard layout, a word list and an optional
//! table of word meanings shown when a round ends.

use crate::core::KeyboardLayout;
use crate::wordlists::{ENGLISH, IRISH, IRISH_MEANINGS, meaning_in};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Irish,
}

impl Language {
    /// Parse a language name
    ///
    /// Supported names: "en", "english", "ga", "ir", "irish", "gaeilge"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "ga" | "ir" | "irish" | "gaeilge" => Some(Self::Irish),
            _ => None,
        }
    }

    /// The other language
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::English => Self::Irish,
            Self::Irish => Self::English,
        }
    }

    /// Game title shown in the header
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::English => "Wordle",
            Self::Irish => "Focail",
        }
    }

    #[must_use]
    pub const fn layout(self) -> KeyboardLayout {
        match self {
            Self::English => KeyboardLayout::ENGLISH,
            Self::Irish => KeyboardLayout::IRISH,
        }
    }

    /// Embedded word list used for both targets and accepted guesses
    #[must_use]
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::English => ENGLISH,
            Self::Irish => IRISH,
        }
    }

    /// Meaning of a word, for languages that ship a meaning table
    #[must_use]
    pub fn meaning_of(self, word: &str) -> Option<&'static str> {
        match self {
            Self::English => None,
            Self::Irish => meaning_in(IRISH_MEANINGS, word),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => f.write_str("English"),
            Self::Irish => f.write_str("Irish"),
        }
    }
}
