//! A submitted guess as an ordered row of letters

use super::{Letter, LetterStatus};
use std::fmt;

/// One attempt at the target word
///
/// Built from raw input with every character uppercased. A guess of any length
/// can be built; the game rejects the wrong length when it is appended.
///
/// # Examples
/// ```
/// use clidle::core::{Guess, LetterStatus};
///
/// let guess = Guess::new("crash");
/// assert_eq!(guess.to_string(), "CRASH");
/// assert!(guess.letters().iter().all(|l| l.status == LetterStatus::None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Guess {
    letters: Vec<Letter>,
}

impl Guess {
    /// Build an unscored guess from raw input
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            letters: raw.chars().map(Letter::new).collect(),
        }
    }

    pub(crate) fn from_letters(letters: Vec<Letter>) -> Self {
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters in the guess
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Statuses in position order
    pub fn statuses(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.letters.iter().map(|l| l.status)
    }

    /// True when every letter is `Correct`
    ///
    /// An empty guess is never correct.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        !self.letters.is_empty() && self.statuses().all(|s| s == LetterStatus::Correct)
    }

    /// True once every letter carries a status
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.statuses().all(LetterStatus::is_scored)
    }
}

/// Renders the characters only, ignoring status
impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_round_trip_uppercases() {
        assert_eq!(Guess::new("crane").to_string(), "CRANE");
        assert_eq!(Guess::new("CrAsH").to_string(), "CRASH");
        assert_eq!(Guess::new("").to_string(), "");
    }

    #[test]
    fn guess_keeps_any_length() {
        assert_eq!(Guess::new("cranes").len(), 6);
        assert_eq!(Guess::new("cra").len(), 3);
        assert!(Guess::new("").is_empty());
    }

    #[test]
    fn new_guess_is_unscored() {
        let guess = Guess::new("crane");
        assert!(!guess.is_scored());
        assert!(!guess.is_correct());
    }

    #[test]
    fn all_correct_letters_make_a_correct_guess() {
        let letters = "CRANE"
            .chars()
            .map(|c| Letter::new(c).with_status(LetterStatus::Correct))
            .collect();
        let guess = Guess::from_letters(letters);
        assert!(guess.is_scored());
        assert!(guess.is_correct());
    }

    #[test]
    fn one_present_letter_is_not_correct() {
        let mut letters: Vec<Letter> = "CRANE"
            .chars()
            .map(|c| Letter::new(c).with_status(LetterStatus::Correct))
            .collect();
        letters[2] = letters[2].with_status(LetterStatus::Present);
        assert!(!Guess::from_letters(letters).is_correct());
    }

    #[test]
    fn empty_guess_is_not_correct() {
        assert!(!Guess::default().is_correct());
    }
}
