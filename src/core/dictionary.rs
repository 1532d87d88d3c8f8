//! Accepted-word dictionary
//!
//! Membership set for guess validation. An empty dictionary accepts every
//! well-formed word.

use super::word::{Word, lower};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build from validated words
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        Self {
            words: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let lowered: String = word.chars().map(lower).collect();
        self.words.contains(&lowered)
    }

    /// Whether `word` may be submitted: always true for an empty dictionary
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        self.is_empty() || self.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
