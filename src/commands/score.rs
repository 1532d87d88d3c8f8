//! Guess scoring command
//!
//! Scores a single guess against a target word without starting a game.

use crate::core::{Feedback, Word, WordError};

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns `WordError` if either word is not a valid five-letter word.
///
/// # Examples
/// ```
/// use wordle_game::commands::score_words;
///
/// let (_, feedback) = score_words("apple", "grape").unwrap();
/// assert_eq!(feedback.to_emoji(), "⬜⬜🟨🟨🟩");
/// ```
pub fn score_words(target: &str, guess: &str) -> Result<(Word, Feedback), WordError> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;
    let feedback = Feedback::calculate(&guess, &target);
    Ok((guess, feedback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_case_insensitively() {
        let (guess, feedback) = score_words("APPLE", "Apply").unwrap();
        assert_eq!(guess.text(), "apply");
        assert_eq!(feedback, "GGGG-".parse().unwrap());
    }

    #[test]
    fn rejects_invalid_words() {
        assert_eq!(
            score_words("apple", "app"),
            Err(WordError::InvalidLength(3))
        );
        assert_eq!(
            score_words("ap9le", "apple"),
            Err(WordError::InvalidCharacters)
        );
    }
}
