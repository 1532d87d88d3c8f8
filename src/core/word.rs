//! Word representation
//!
//! A Word stores a five-letter lowercase word as characters so that Irish
//! letters with a fada (á, é, í, ó, ú) are first-class letters.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A five-letter word, normalized to lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only letters")]
    InvalidCharacters,
}

/// Lowercase a single letter, keeping it as-is when the mapping is not one character
#[must_use]
pub fn lower(letter: char) -> char {
    let mut mapped = letter.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

/// Uppercase a single letter, keeping it as-is when the mapping is not one character
#[must_use]
pub fn upper(letter: char) -> char {
    let mut mapped = letter.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The character count is not exactly 5
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// let irish = Word::new("Bláth").unwrap();
    /// assert_eq!(irish.text(), "bláth");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let lowered: Vec<char> = text.as_ref().chars().map(lower).collect();

        let chars: [char; WORD_LENGTH] = lowered
            .as_slice()
            .try_into()
            .map_err(|_| WordError::InvalidLength(lowered.len()))?;

        if !chars.iter().all(|c| c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: chars.iter().collect(),
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used as the remaining-letter pool when scoring duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
