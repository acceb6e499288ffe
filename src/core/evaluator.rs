//! Letter evaluation
//!
//! Scores a guess against the target word, position by position:
//! - `Correct` when the letter matches the target at that position
//! - `Present` when the letter appears elsewhere in the target
//! - `Absent` otherwise

use super::{Guess, Letter, LetterStatus, Word};
use std::fmt;
use std::str::FromStr;

/// How duplicate letters are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoring {
    /// Each position is scored on its own with a plain membership test.
    ///
    /// A guessed letter can be marked at several positions even when the
    /// target holds it once.
    #[default]
    Membership,
    /// Greens first, then yellows drawn from the unmatched target letters, so
    /// a letter is never marked more often than it occurs in the target.
    Frequency,
}

impl Scoring {
    /// Parse a scoring mode name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "membership" | "simple" => Some(Self::Membership),
            "frequency" | "strict" => Some(Self::Frequency),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Membership => "membership",
            Self::Frequency => "frequency",
        }
    }

    /// Score `guess` against `target`
    ///
    /// Returns a new guess; the input is left untouched.
    #[must_use]
    pub fn evaluate(self, guess: &Guess, target: &Word) -> Guess {
        match self {
            Self::Membership => evaluate(guess, target),
            Self::Frequency => evaluate_with_frequency(guess, target),
        }
    }
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scoring {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown scoring mode: {s}"))
    }
}

/// Score a guess with plain membership rules
///
/// # Examples
/// ```
/// use clidle::core::{Guess, LetterStatus, Word, evaluate};
///
/// let target = Word::new("crane").unwrap();
/// let scored = evaluate(&Guess::new("crash"), &target);
///
/// let statuses: Vec<_> = scored.statuses().collect();
/// assert_eq!(
///     statuses,
///     [
///         LetterStatus::Correct,
///         LetterStatus::Correct,
///         LetterStatus::Correct,
///         LetterStatus::Absent,
///         LetterStatus::Absent,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Guess, target: &Word) -> Guess {
    let letters = guess
        .letters()
        .iter()
        .enumerate()
        .map(|(i, letter)| {
            let status = if target.char_at(i) == Some(letter.char) {
                LetterStatus::Correct
            } else if target.has_letter(letter.char) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            };
            letter.with_status(status)
        })
        .collect();

    Guess::from_letters(letters)
}

fn evaluate_with_frequency(guess: &Guess, target: &Word) -> Guess {
    let mut letters: Vec<Letter> = guess
        .letters()
        .iter()
        .map(|l| l.with_status(LetterStatus::Absent))
        .collect();
    let mut available = target.char_counts();

    // First pass: greens, removed from the pool
    for (i, letter) in letters.iter_mut().enumerate() {
        if target.char_at(i) == Some(letter.char) {
            letter.status = LetterStatus::Correct;
            if let Some(count) = available.get_mut(&letter.char) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from what is left
    for letter in &mut letters {
        if letter.status == LetterStatus::Absent
            && let Some(count) = available.get_mut(&letter.char)
            && *count > 0
        {
            letter.status = LetterStatus::Present;
            *count -= 1;
        }
    }

    Guess::from_letters(letters)
}
