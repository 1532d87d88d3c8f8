//! Per-letter feedback for a scored guess
//!
//! Each letter of a guess receives one of three states once scored:
//! - Correct: right letter, right position
//! - Present: letter in the word, wrong position
//! - Absent: letter not in the word (after duplicates already matched)
//!
//! `Default` is the state of a letter that has not been scored yet.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback state of a grid cell or keyboard key
///
/// Variants are ordered by priority, so `max` gives the state a keyboard key
/// should display after several guesses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    #[default]
    Default,
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Combine two states, keeping the higher-priority one
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Emoji square used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Default => '⬛',
        }
    }
}

/// Scored feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and remove them from the
    ///    pool of remaining answer letters
    /// 2. If every letter is correct, stop
    /// 3. Second pass: left to right, a letter still in the pool is present
    ///    and consumes one instance; anything else is absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterState, Word};
    ///
    /// let guess = Word::new("eerie").unwrap();
    /// let answer = Word::new("speed").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// // SPEED has two E's, so only the first two E's of EERIE are present
    /// assert_eq!(feedback.states()[0], LetterState::Present);
    /// assert_eq!(feedback.states()[1], LetterState::Present);
    /// assert_eq!(feedback.states()[4], LetterState::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterState::Default; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for (i, state) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *state = LetterState::Correct;
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        if result.iter().all(|&s| s == LetterState::Correct) {
            return Self(result);
        }

        // Second pass: present or absent from the remaining pool
        for (i, state) in result.iter_mut().enumerate() {
            if *state != LetterState::Default {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                *state = LetterState::Present;
                *count -= 1;
            } else {
                *state = LetterState::Absent;
            }
        }

        Self(result)
    }

    /// Per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a winning row
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut states = [LetterState::Default; WORD_LENGTH];
        for (state, ch) in states.iter_mut().zip(chars) {
            *state = match ch {
                'G' | 'g' | '🟩' => LetterState::Correct,
                'Y' | 'y' | '🟨' => LetterState::Present,
                '-' | '_' | '⬜' => LetterState::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self(states))
    }
}
