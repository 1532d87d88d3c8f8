//! Word lists for both languages
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{ENGLISH, ENGLISH_COUNT, IRISH, IRISH_COUNT, IRISH_MEANINGS};

/// Look up a word in a (word, meaning) table
#[must_use]
pub fn meaning_in(
    table: &'static [(&'static str, &'static str)],
    word: &str,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(entry, _)| *entry == word)
        .map(|(_, meaning)| *meaning)
}
