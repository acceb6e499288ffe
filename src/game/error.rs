//! Errors reported when a guess is rejected

use std::fmt;

/// Why a guess was not accepted
///
/// None of these consume a turn; the game is unchanged after any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended
    GameOver,
    /// The guess does not have the configured number of letters
    InvalidLength { expected: usize, actual: usize },
    /// The dictionary does not know the guessed word
    InvalidWord(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "max guesses reached"),
            Self::InvalidLength { .. } => write!(f, "invalid guess length"),
            Self::InvalidWord(_) => write!(f, "invalid guess word"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(GameError::GameOver.to_string(), "max guesses reached");
        assert_eq!(
            GameError::InvalidLength {
                expected: 5,
                actual: 3
            }
            .to_string(),
            "invalid guess length"
        );
        assert_eq!(
            GameError::InvalidWord("ABCDE".to_string()).to_string(),
            "invalid guess word"
        );
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = GameError::GameOver.into();
        assert_eq!(err.to_string(), "max guesses reached");
    }
}
