//! Game state machine
//!
//! A `Game` owns the grid, cursor, keyboard colours and status for one round.
//! State changes only through [`Game::insert_letter`], [`Game::delete_letter`],
//! [`Game::submit_guess`] and the token dispatcher [`Game::press`]. Guard
//! conditions (full row, empty row, incomplete row, finished game, unknown key)
//! are silent no-ops reported as [`Outcome::Ignored`].
//!
//! A new round is a new `Game`; a finished game is never reset in place.

mod action;

pub use action::Action;

use crate::core::{
    Cell, Cursor, Dictionary, Feedback, Grid, KeyboardLayout, KeyboardState, WORD_LENGTH, Word,
    upper,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default number of guesses per round
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Per-round configuration, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The submitted word is not in the accepted dictionary
    #[error("{} is not in the word list", .0.to_uppercase())]
    InvalidWord(String),
    #[error("max guesses must be at least 1")]
    InvalidConfig,
}

/// Result of a single operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guard condition hit; nothing changed
    Ignored,
    Inserted(char),
    Deleted,
    Scored {
        row: usize,
        feedback: Feedback,
        status: GameStatus,
    },
}

/// Owned copy of everything a presentation layer renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub cursor: Cursor,
    pub keyboard: KeyboardState,
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    max_guesses: usize,
    layout: KeyboardLayout,
    dictionary: Arc<Dictionary>,
    grid: Grid,
    cursor: Cursor,
    keyboard: KeyboardState,
    status: GameStatus,
}

impl Game {
    /// Start a round against `target`
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if `max_guesses` is zero.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use wordle_game::core::{Dictionary, KeyboardLayout, Word};
    /// use wordle_game::game::{Game, GameConfig, GameStatus};
    ///
    /// let mut game = Game::new(
    ///     Word::new("apple").unwrap(),
    ///     GameConfig::default(),
    ///     KeyboardLayout::ENGLISH,
    ///     Arc::new(Dictionary::default()),
    /// )
    /// .unwrap();
    ///
    /// for token in ["A", "P", "P", "L", "E", "ENTER"] {
    ///     game.press(token).unwrap();
    /// }
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn new(
        target: Word,
        config: GameConfig,
        layout: KeyboardLayout,
        dictionary: Arc<Dictionary>,
    ) -> Result<Self, GameError> {
        if config.max_guesses == 0 {
            return Err(GameError::InvalidConfig);
        }

        debug!(max_guesses = config.max_guesses, "new game");

        Ok(Self {
            target,
            max_guesses: config.max_guesses,
            keyboard: KeyboardState::new(&layout),
            layout,
            dictionary,
            grid: Grid::new(config.max_guesses),
            cursor: Cursor::default(),
            status: GameStatus::Playing,
        })
    }

    /// Route a raw key token (a letter, `"ENTER"` or `"BACKSPACE"`)
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidWord` when `"ENTER"` submits a word that is
    /// not in the dictionary.
    pub fn press(&mut self, token: &str) -> Result<Outcome, GameError> {
        match Action::parse(token, &self.layout) {
            Some(action) => self.apply(action),
            None => Ok(Outcome::Ignored),
        }
    }

    /// Apply a parsed action
    ///
    /// # Errors
    ///
    /// Same as [`Game::submit_guess`].
    pub fn apply(&mut self, action: Action) -> Result<Outcome, GameError> {
        match action {
            Action::Insert(letter) => Ok(self.insert_letter(letter)),
            Action::Delete => Ok(self.delete_letter()),
            Action::Submit => self.submit_guess(),
        }
    }

    /// Type a letter into the next free cell of the current row
    pub fn insert_letter(&mut self, letter: char) -> Outcome {
        if self.status.is_over()
            || self.cursor.col >= WORD_LENGTH
            || !self.layout.contains(letter)
        {
            return Outcome::Ignored;
        }

        let letter = upper(letter);
        self.grid.set(self.cursor, Cell::typed(letter));
        self.cursor.col += 1;
        debug!(%letter, row = self.cursor.row, col = self.cursor.col, "letter inserted");
        Outcome::Inserted(letter)
    }

    /// Clear the last typed cell of the current row
    pub fn delete_letter(&mut self) -> Outcome {
        if self.status.is_over() || self.cursor.col == 0 {
            return Outcome::Ignored;
        }

        self.cursor.col -= 1;
        self.grid.set(self.cursor, Cell::default());
        debug!(row = self.cursor.row, col = self.cursor.col, "letter deleted");
        Outcome::Deleted
    }

    /// Score the current row against the target
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidWord` if the dictionary is non-empty and
    /// does not contain the row's word. Grid, cursor and status are unchanged.
    pub fn submit_guess(&mut self) -> Result<Outcome, GameError> {
        if self.status.is_over() || self.cursor.col != WORD_LENGTH {
            return Ok(Outcome::Ignored);
        }

        let row = self.cursor.row;
        let text = self.grid.row_text(row);
        let guess = Word::new(&text).map_err(|_| GameError::InvalidWord(text.to_lowercase()))?;

        if !self.dictionary.accepts(guess.text()) {
            warn!(guess = guess.text(), "rejected word not in dictionary");
            return Err(GameError::InvalidWord(guess.text().to_string()));
        }

        let feedback = Feedback::calculate(&guess, &self.target);
        self.grid.apply_feedback(row, &feedback);
        for (&letter, &state) in guess.chars().iter().zip(feedback.states()) {
            self.keyboard.upgrade(letter, state);
        }

        if feedback.is_win() {
            self.status = GameStatus::Won;
        } else if row + 1 == self.max_guesses {
            self.status = GameStatus::Lost;
        }

        // Advance even on the final row
        self.cursor = Cursor {
            row: row + 1,
            col: 0,
        };

        debug!(guess = guess.text(), feedback = %feedback, row, "guess scored");
        if self.status.is_over() {
            info!(status = ?self.status, guesses = row + 1, "game over");
        }

        Ok(Outcome::Scored {
            row,
            feedback,
            status: self.status,
        })
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    /// The word being guessed; presentation layers reveal it once the game ends
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Number of rows scored so far
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.cursor.row.min(self.max_guesses)
    }

    /// Owned copy of the renderable state
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.clone(),
            cursor: self.cursor,
            keyboard: self.keyboard.clone(),
            status: self.status,
        }
    }

    /// Score line and one emoji row per scored guess, e.g. `"3/6\n\n🟨⬜..."`
    #[must_use]
    pub fn share_text(&self) -> String {
        let score = match self.status {
            GameStatus::Won => self.guesses_used().to_string(),
            GameStatus::Lost | GameStatus::Playing => "X".to_string(),
        };

        let rows: Vec<String> = self.grid.rows()[..self.guesses_used()]
            .iter()
            .map(|row| row.iter().map(|cell| cell.state.emoji()).collect())
            .collect();

        format!("{score}/{}\n\n{}", self.max_guesses, rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::wordlists::loader::words_from_slice;

    fn game_with(target: &str, words: &[&str], max_guesses: usize) -> Game {
        Game::new(
            Word::new(target).unwrap(),
            GameConfig { max_guesses },
            KeyboardLayout::ENGLISH,
            Arc::new(Dictionary::from_words(&words_from_slice(words))),
        )
        .unwrap()
    }

    fn type_word(game: &mut Game, word: &str) {
        for letter in word.chars() {
            game.press(&letter.to_string()).unwrap();
        }
    }

    fn guess(game: &mut Game, word: &str) -> Result<Outcome, GameError> {
        type_word(game, word);
        game.press("ENTER")
    }

    fn row_states(game: &Game, row: usize) -> Vec<LetterState> {
        game.grid().rows()[row].iter().map(|c| c.state).collect()
    }

    fn states(s: &str) -> Vec<LetterState> {
        s.parse::<Feedback>().unwrap().states().to_vec()
    }

    #[test]
    fn initial_state() {
        let game = game_with("apple", &[], 6);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.cursor(), Cursor::default());
        assert_eq!(game.grid().rows().len(), 6);
        assert_eq!(game.keyboard().len(), 26);
        assert_eq!(game.guesses_used(), 0);
        assert_eq!(game.target().text(), "apple");
    }

    #[test]
    fn zero_max_guesses_rejected() {
        let result = Game::new(
            Word::new("apple").unwrap(),
            GameConfig { max_guesses: 0 },
            KeyboardLayout::ENGLISH,
            Arc::new(Dictionary::default()),
        );
        assert!(matches!(result, Err(GameError::InvalidConfig)));
    }

    #[test]
    fn insert_uppercases_and_advances() {
        let mut game = game_with("apple", &[], 6);
        assert_eq!(game.insert_letter('a'), Outcome::Inserted('A'));
        assert_eq!(game.cursor(), Cursor { row: 0, col: 1 });
        assert_eq!(game.grid().rows()[0][0], Cell::typed('A'));
        assert_eq!(game.grid().rows()[0][0].state, LetterState::Default);
        // No keyboard side effect
        assert_eq!(game.keyboard().get('A'), LetterState::Default);
    }

    #[test]
    fn insert_beyond_row_is_ignored() {
        let mut game = game_with("apple", &[], 6);
        type_word(&mut game, "abcde");
        let before = game.snapshot();
        assert_eq!(game.insert_letter('f'), Outcome::Ignored);
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.cursor().col, WORD_LENGTH);
    }

    #[test]
    fn insert_letter_off_layout_is_ignored() {
        let mut game = game_with("apple", &[], 6);
        assert_eq!(game.insert_letter('é'), Outcome::Ignored);
        assert_eq!(game.insert_letter('1'), Outcome::Ignored);
        assert_eq!(game.cursor(), Cursor::default());
    }

    #[test]
    fn delete_at_column_zero_is_ignored() {
        let mut game = game_with("apple", &[], 6);
        assert_eq!(game.delete_letter(), Outcome::Ignored);
        assert_eq!(game.cursor(), Cursor::default());
    }

    #[test]
    fn delete_clears_last_cell() {
        let mut game = game_with("apple", &[], 6);
        type_word(&mut game, "ab");
        assert_eq!(game.press("Backspace").unwrap(), Outcome::Deleted);
        assert_eq!(game.cursor(), Cursor { row: 0, col: 1 });
        assert_eq!(game.grid().rows()[0][1], Cell::default());
        assert_eq!(game.grid().row_text(0), "A");
    }

    #[test]
    fn submit_incomplete_row_is_ignored() {
        let mut game = game_with("apple", &[], 6);
        type_word(&mut game, "app");
        let before = game.snapshot();
        assert_eq!(game.submit_guess().unwrap(), Outcome::Ignored);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn invalid_word_leaves_state_unchanged() {
        let mut game = game_with("apple", &["apple", "grape"], 6);
        type_word(&mut game, "zzzzz");
        let before = game.snapshot();

        let err = game.press("enter").unwrap_err();
        assert_eq!(err, GameError::InvalidWord("zzzzz".to_string()));
        assert_eq!(err.to_string(), "ZZZZZ is not in the word list");
        assert_eq!(game.snapshot(), before);

        // The player can correct the row and resubmit
        for _ in 0..WORD_LENGTH {
            game.press("BACKSPACE").unwrap();
        }
        assert!(matches!(
            guess(&mut game, "grape").unwrap(),
            Outcome::Scored { row: 0, .. }
        ));
    }

    #[test]
    fn empty_dictionary_accepts_any_word() {
        let mut game = game_with("apple", &[], 6);
        assert!(matches!(
            guess(&mut game, "qwxyz").unwrap(),
            Outcome::Scored { row: 0, .. }
        ));
    }

    #[test]
    fn exact_guess_wins_with_all_correct() {
        let mut game = game_with("crane", &[], 6);
        let outcome = guess(&mut game, "crane").unwrap();
        assert_eq!(
            outcome,
            Outcome::Scored {
                row: 0,
                feedback: Feedback::PERFECT,
                status: GameStatus::Won
            }
        );
        assert_eq!(row_states(&game, 0), states("GGGGG"));
        assert_eq!(game.cursor(), Cursor { row: 1, col: 0 });
        for letter in "CRANE".chars() {
            assert_eq!(game.keyboard().get(letter), LetterState::Correct);
        }
    }

    #[test]
    fn apple_end_to_end() {
        let mut game = game_with("apple", &["grape", "apply", "apple"], 6);

        guess(&mut game, "grape").unwrap();
        assert_eq!(row_states(&game, 0), states("--YYG"));
        assert_eq!(game.status(), GameStatus::Playing);

        guess(&mut game, "apply").unwrap();
        assert_eq!(row_states(&game, 1), states("GGGG-"));
        assert_eq!(game.status(), GameStatus::Playing);

        guess(&mut game, "apple").unwrap();
        assert_eq!(row_states(&game, 2), states("GGGGG"));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.guesses_used(), 3);

        assert_eq!(game.keyboard().get('g'), LetterState::Absent);
        assert_eq!(game.keyboard().get('y'), LetterState::Absent);
        assert_eq!(game.keyboard().get('a'), LetterState::Correct);
        assert_eq!(game.keyboard().get('q'), LetterState::Default);
    }

    #[test]
    fn duplicate_letters_use_pool() {
        let mut game = game_with("speed", &[], 6);
        guess(&mut game, "eerie").unwrap();
        assert_eq!(row_states(&game, 0), states("YY---"));
        // Present in one cell outranks absent in another
        assert_eq!(game.keyboard().get('e'), LetterState::Present);
        assert_eq!(game.keyboard().get('r'), LetterState::Absent);
    }

    #[test]
    fn keyboard_correct_never_regresses() {
        let mut game = game_with("apple", &[], 6);
        // A is correct at index 0
        guess(&mut game, "about").unwrap();
        assert_eq!(game.keyboard().get('a'), LetterState::Correct);
        // A is present here, then absent-by-pool
        guess(&mut game, "llama").unwrap();
        assert_eq!(game.keyboard().get('a'), LetterState::Correct);
        assert_eq!(game.keyboard().get('l'), LetterState::Present);
    }

    #[test]
    fn losing_after_max_guesses() {
        let mut game = game_with("apple", &[], 3);
        for word in ["crane", "slate", "house"] {
            guess(&mut game, word).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.cursor(), Cursor { row: 3, col: 0 });
        assert_eq!(game.guesses_used(), 3);
        assert_eq!(game.target().text(), "apple");
    }

    #[test]
    fn winning_on_last_row_is_a_win() {
        let mut game = game_with("apple", &[], 2);
        guess(&mut game, "crane").unwrap();
        guess(&mut game, "apple").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn operations_after_a_win_are_ignored() {
        let mut game = game_with("apple", &[], 6);
        guess(&mut game, "apple").unwrap();
        assert_eq!(game.status(), GameStatus::Won);

        let before = game.snapshot();
        assert_eq!(game.insert_letter('a'), Outcome::Ignored);
        assert_eq!(game.delete_letter(), Outcome::Ignored);
        assert_eq!(game.submit_guess().unwrap(), Outcome::Ignored);
        assert_eq!(game.press("x").unwrap(), Outcome::Ignored);
        assert_eq!(game.press("BACKSPACE").unwrap(), Outcome::Ignored);
        assert_eq!(game.press("ENTER").unwrap(), Outcome::Ignored);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn operations_after_a_loss_are_ignored() {
        let mut game = game_with("apple", &[], 1);
        guess(&mut game, "crane").unwrap();
        assert_eq!(game.status(), GameStatus::Lost);

        let before = game.snapshot();
        assert_eq!(game.insert_letter('a'), Outcome::Ignored);
        assert_eq!(game.delete_letter(), Outcome::Ignored);
        assert_eq!(game.submit_guess().unwrap(), Outcome::Ignored);
        assert_eq!(game.press("x").unwrap(), Outcome::Ignored);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn delete_cannot_reach_scored_row() {
        let mut game = game_with("apple", &[], 6);
        guess(&mut game, "crane").unwrap();
        assert_eq!(game.press("BACKSPACE").unwrap(), Outcome::Ignored);
        assert_eq!(game.grid().row_text(0), "CRANE");
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let mut game = game_with("apple", &[], 6);
        for token in ["Shift", "1", "", "F1", "é"] {
            assert_eq!(game.press(token).unwrap(), Outcome::Ignored);
        }
        assert_eq!(game.cursor(), Cursor::default());
    }

    #[test]
    fn irish_layout_accepts_fadas() {
        let mut game = Game::new(
            Word::new("bláth").unwrap(),
            GameConfig::default(),
            KeyboardLayout::IRISH,
            Arc::new(Dictionary::from_words(&words_from_slice(&["bláth", "balla"]))),
        )
        .unwrap();

        guess(&mut game, "balla").unwrap();
        assert_eq!(row_states(&game, 0), states("G-Y--"));
        assert_eq!(game.keyboard().get('á'), LetterState::Default);

        guess(&mut game, "BLÁTH").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.keyboard().get('Á'), LetterState::Correct);
    }

    #[test]
    fn share_text_lists_scored_rows() {
        let mut game = game_with("apple", &[], 6);
        guess(&mut game, "grape").unwrap();
        guess(&mut game, "apple").unwrap();
        assert_eq!(game.share_text(), "2/6\n\n⬜⬜🟨🟨🟩\n🟩🟩🟩🟩🟩");

        let mut lost = game_with("apple", &[], 1);
        guess(&mut lost, "crane").unwrap();
        assert!(lost.share_text().starts_with("X/1"));
    }
}
