//! One-shot scoring command
//!
//! Scores a single guess against a given target without starting a game.

use crate::core::{Guess, Scoring, Word};
use crate::wordlists::Dictionary;

/// Result of checking one guess
pub struct CheckResult {
    pub target: Word,
    pub guess: Guess,
    pub in_dictionary: bool,
    pub scoring: Scoring,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not a valid word of the configured size.
pub fn check_guess<D: Dictionary>(
    target: &str,
    guess: &str,
    scoring: Scoring,
    dictionary: &D,
) -> Result<CheckResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let scored = scoring.evaluate(&Guess::new(guess_word.text()), &target);

    Ok(CheckResult {
        in_dictionary: dictionary.is_word(guess_word.text()),
        target,
        guess: scored,
        scoring,
    })
}
