//! Game state and guess validation
//!
//! A [`GameState`] owns the target word and the accepted guesses, and is the
//! only place where a guess is checked and recorded.

mod error;
mod state;

pub use error::GameError;
pub use state::GameState;
