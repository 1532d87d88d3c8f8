//! Guess grid and cursor
//!
//! The grid holds one row per allowed guess. Rows before the cursor are
//! scored, the cursor row is being typed, and later rows are empty.

use super::feedback::{Feedback, LetterState};
use super::word::WORD_LENGTH;

/// A single letter slot in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub state: LetterState,
}

impl Cell {
    /// An unscored cell holding `letter`
    #[must_use]
    pub const fn typed(letter: char) -> Self {
        Self {
            letter: Some(letter),
            state: LetterState::Default,
        }
    }
}

/// Position of the next letter to be typed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// One row of the grid
pub type Row = [Cell; WORD_LENGTH];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// An empty grid with `row_count` rows
    #[must_use]
    pub fn new(row_count: usize) -> Self {
        Self {
            rows: vec![[Cell::default(); WORD_LENGTH]; row_count],
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Letters of a row concatenated, skipping empty cells
    #[must_use]
    pub fn row_text(&self, index: usize) -> String {
        self.rows
            .get(index)
            .map(|row| row.iter().filter_map(|cell| cell.letter).collect())
            .unwrap_or_default()
    }

    pub(crate) fn set(&mut self, cursor: Cursor, cell: Cell) {
        if let Some(slot) = self
            .rows
            .get_mut(cursor.row)
            .and_then(|row| row.get_mut(cursor.col))
        {
            *slot = cell;
        }
    }

    pub(crate) fn apply_feedback(&mut self, index: usize, feedback: &Feedback) {
        if let Some(row) = self.rows.get_mut(index) {
            for (cell, &state) in row.iter_mut().zip(feedback.states()) {
                cell.state = state;
            }
        }
    }
}
