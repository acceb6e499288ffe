//! Word lists and the dictionary oracle
//!
//! Provides embedded word lists compiled into the binary, a file loader, and the
//! [`Dictionary`] trait the game uses to decide whether a guess is a real word.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Decides whether a candidate string is an accepted word
///
/// The game trusts the answer as-is.
pub trait Dictionary {
    fn is_word(&self, candidate: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_word(&self, candidate: &str) -> bool {
        (**self).is_word(candidate)
    }
}

/// A set of accepted words with case-insensitive lookup
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Build a list from any iterator of words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_ascii_uppercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The embedded guess list together with every embedded answer
    ///
    /// # Examples
    /// ```
    /// use clidle::wordlists::{Dictionary, WordList};
    ///
    /// let words = WordList::embedded();
    /// assert!(words.is_word("crane"));
    /// assert!(!words.is_word("zzzzz"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(ALLOWED.iter().chain(ANSWERS))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Add every word from `other`
    pub fn extend(&mut self, other: Self) {
        self.words.extend(other.words);
    }
}

impl Dictionary for WordList {
    fn is_word(&self, candidate: &str) -> bool {
        self.words.contains(&candidate.to_ascii_uppercase())
    }
}

/// Pick a random target from `answers`
///
/// Returns `None` when the list is empty or the pick is not a valid word.
pub fn random_target<R: Rng + ?Sized>(answers: &[&str], rng: &mut R) -> Option<Word> {
    answers.choose(rng).and_then(|&word| Word::new(word).ok())
}
