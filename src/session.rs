//! Game session
//!
//! A session owns the current round and everything that outlives it: the
//! active language, the random source used to pick targets, and win/loss
//! statistics. "Play again" and switching language both discard the current
//! `Game` and build a fresh one.

use crate::core::{Dictionary, Word, WordError};
use crate::game::{DEFAULT_MAX_GUESSES, Game, GameConfig, GameError, Outcome};
use crate::language::Language;
use crate::wordlists::loader::words_from_slice;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Settings that apply to every round of a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub language: Language,
    pub max_guesses: usize,
    /// Target for the first round instead of a random pick
    pub target: Option<String>,
    /// Replaces the embedded word lists for targets and accepted guesses
    pub custom_words: Option<Vec<Word>>,
    /// Seed for reproducible target selection
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            max_guesses: DEFAULT_MAX_GUESSES,
            target: None,
            custom_words: None,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no playable {0} words in the word list")]
    EmptyWordList(Language),
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
    #[error("{} is not in the {language} word list", .word.to_uppercase())]
    TargetNotInWordList { word: String, language: Language },
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Results across the rounds of one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// `guess_distribution[n - 1]` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, won: bool, guesses: usize) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
            if self.guess_distribution.len() < guesses {
                self.guess_distribution.resize(guesses, 0);
            }
            if let Some(slot) = guesses.checked_sub(1) {
                self.guess_distribution[slot] += 1;
            }
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

pub struct Session {
    language: Language,
    max_guesses: usize,
    custom_words: Option<Vec<Word>>,
    rng: StdRng,
    game: Game,
    stats: Statistics,
}

impl Session {
    /// Create a session and start its first round
    ///
    /// # Errors
    ///
    /// Returns an error if the fixed target is not a valid word or is missing
    /// from the starting language's word list, if that list is empty, or if
    /// `max_guesses` is zero.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let pool = word_pool(config.language, config.custom_words.as_deref());
        let target = match config.target {
            Some(text) => {
                let word = Word::new(text)?;
                // The target must itself be an accepted guess
                if !pool.contains(&word) {
                    return Err(SessionError::TargetNotInWordList {
                        word: word.text().to_string(),
                        language: config.language,
                    });
                }
                word
            }
            None => pick_target(config.language, &pool, &mut rng)?,
        };

        let game = build_game(config.language, config.max_guesses, &pool, target)?;

        info!(language = %config.language, "session started");

        Ok(Self {
            language: config.language,
            max_guesses: config.max_guesses,
            custom_words: config.custom_words,
            rng,
            game,
            stats: Statistics::default(),
        })
    }

    /// Discard the current round and start another in the same language
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyWordList` if no word can be picked.
    pub fn new_game(&mut self) -> Result<(), SessionError> {
        let pool = word_pool(self.language, self.custom_words.as_deref());
        let target = pick_target(self.language, &pool, &mut self.rng)?;
        self.game = build_game(self.language, self.max_guesses, &pool, target)?;
        info!(language = %self.language, "new round");
        Ok(())
    }

    /// Switch to the other language and start a new round
    ///
    /// # Errors
    ///
    /// Same as [`Session::new_game`]; the language is left unchanged on error.
    pub fn switch_language(&mut self) -> Result<(), SessionError> {
        let previous = self.language;
        self.language = previous.toggle();
        if let Err(err) = self.new_game() {
            self.language = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Forward a key token to the current round, recording the result once it ends
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidWord` for submissions outside the dictionary.
    pub fn press(&mut self, token: &str) -> Result<Outcome, GameError> {
        let outcome = self.game.press(token)?;
        if let Outcome::Scored { row, feedback, status } = outcome
            && status.is_over()
        {
            self.stats.record(feedback.is_win(), row + 1);
        }
        Ok(outcome)
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Meaning of the current target, if the language has one
    #[must_use]
    pub fn meaning(&self) -> Option<&'static str> {
        self.language.meaning_of(self.game.target().text())
    }
}

/// Words available to `language`: the custom list filtered to the layout, or the embedded list
fn word_pool(language: Language, custom_words: Option<&[Word]>) -> Vec<Word> {
    let layout = language.layout();
    match custom_words {
        Some(words) => words
            .iter()
            .filter(|w| w.chars().iter().all(|&c| layout.contains(c)))
            .cloned()
            .collect(),
        None => words_from_slice(language.words()),
    }
}

fn pick_target(
    language: Language,
    pool: &[Word],
    rng: &mut StdRng,
) -> Result<Word, SessionError> {
    pool.choose(rng)
        .cloned()
        .ok_or(SessionError::EmptyWordList(language))
}

fn build_game(
    language: Language,
    max_guesses: usize,
    pool: &[Word],
    target: Word,
) -> Result<Game, SessionError> {
    let dictionary = Arc::new(Dictionary::from_words(pool));

    Ok(Game::new(
        target,
        GameConfig { max_guesses },
        language.layout(),
        dictionary,
    )?)
}
