//! Core domain types for the game
//!
//! Pure types with no I/O: the target word, scored letters, guesses, and the
//! letter evaluator that scores one against the other.

mod evaluator;
mod guess;
mod letter;
mod word;

pub use evaluator::{Scoring, evaluate};
pub use guess::Guess;
pub use letter::{Letter, LetterStatus};
pub use word::{Word, WordError};

/// Number of letters in every target word and every accepted guess
pub const WORD_SIZE: usize = 5;

/// Number of guesses a player gets before the game ends
pub const MAX_GUESSES: usize = 6;
