//! Keyboard layouts and aggregated key colours
//!
//! Layouts are static tables; each language supplies one. `KeyboardState`
//! tracks the best feedback seen for every letter of the layout.

use super::feedback::LetterState;
use super::word::upper;
use rustc_hash::FxHashMap;
use Key::{Backspace, Enter, Letter};

/// A key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Token sent to the game dispatcher when this key is pressed
    #[must_use]
    pub fn token(self) -> String {
        match self {
            Self::Letter(letter) => letter.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "BACKSPACE".to_string(),
        }
    }

    /// Text shown on the key cap
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => letter.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}

/// Rows of keys for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardLayout {
    rows: &'static [&'static [Key]],
}

#[rustfmt::skip]
const ENGLISH_ROWS: &[&[Key]] = &[
    &[
        Letter('Q'), Letter('W'), Letter('E'), Letter('R'), Letter('T'),
        Letter('Y'), Letter('U'), Letter('I'), Letter('O'), Letter('P'),
    ],
    &[
        Letter('A'), Letter('S'), Letter('D'), Letter('F'), Letter('G'),
        Letter('H'), Letter('J'), Letter('K'), Letter('L'),
    ],
    &[
        Enter, Letter('Z'), Letter('X'), Letter('C'), Letter('V'),
        Letter('B'), Letter('N'), Letter('M'), Backspace,
    ],
];

#[rustfmt::skip]
const IRISH_ROWS: &[&[Key]] = &[
    &[
        Letter('A'), Letter('Á'), Letter('E'), Letter('É'), Letter('I'),
        Letter('Í'), Letter('O'), Letter('Ó'), Letter('U'), Letter('Ú'),
    ],
    &[
        Letter('B'), Letter('C'), Letter('D'), Letter('F'), Letter('G'),
        Letter('H'), Letter('K'), Letter('L'), Letter('M'), Letter('N'),
    ],
    &[
        Enter, Letter('P'), Letter('R'), Letter('S'), Letter('T'),
        Letter('V'), Backspace,
    ],
];

impl KeyboardLayout {
    /// QWERTY layout with the 26 English letters
    pub const ENGLISH: Self = Self { rows: ENGLISH_ROWS };

    /// Irish alphabet: vowels with and without fada, then consonants
    pub const IRISH: Self = Self { rows: IRISH_ROWS };

    #[must_use]
    pub const fn rows(&self) -> &'static [&'static [Key]] {
        self.rows
    }

    /// Every letter key in layout order (control keys excluded)
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flat_map(|row| row.iter()).filter_map(|key| match key {
            Letter(letter) => Some(*letter),
            Enter | Backspace => None,
        })
    }

    /// Check whether a letter (any case) has a key on this layout
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        let letter = upper(letter);
        self.letters().any(|l| l == letter)
    }
}

/// Best feedback seen so far for each letter of the layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    states: FxHashMap<char, LetterState>,
}

impl KeyboardState {
    /// All letters of `layout` in the default state
    #[must_use]
    pub fn new(layout: &KeyboardLayout) -> Self {
        Self {
            states: layout
                .letters()
                .map(|letter| (letter, LetterState::Default))
                .collect(),
        }
    }

    /// State of a letter (any case); unknown letters report `Default`
    #[must_use]
    pub fn get(&self, letter: char) -> LetterState {
        self.states
            .get(&upper(letter))
            .copied()
            .unwrap_or_default()
    }

    /// Raise a letter's state; lower-priority results never overwrite higher ones
    pub fn upgrade(&mut self, letter: char, state: LetterState) {
        let entry = self.states.entry(upper(letter)).or_default();
        *entry = entry.merge(state);
    }

    /// Number of tracked letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
