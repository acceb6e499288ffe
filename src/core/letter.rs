//! Scored letters

use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    /// Not scored yet
    #[default]
    None,
    /// Not in the target word
    Absent,
    /// In the target word, but at another position
    Present,
    /// At this position in the target word
    Correct,
}

impl LetterStatus {
    /// Whether the letter has been scored at all
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A guessed character together with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    pub char: char,
    pub status: LetterStatus,
}

impl Letter {
    /// Create an unscored letter, normalized to uppercase
    #[inline]
    #[must_use]
    pub const fn new(ch: char) -> Self {
        Self {
            char: ch.to_ascii_uppercase(),
            status: LetterStatus::None,
        }
    }

    /// Same character with a different status
    #[inline]
    #[must_use]
    pub const fn with_status(self, status: LetterStatus) -> Self {
        Self {
            char: self.char,
            status,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char)
    }
}
