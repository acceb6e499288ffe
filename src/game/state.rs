//! Per-game state: the target word and the guesses made against it

use super::GameError;
use crate::core::{Guess, MAX_GUESSES, Scoring, WORD_SIZE, Word};
use crate::wordlists::Dictionary;

/// State of a single game
///
/// Mutated only through [`GameState::append_guess`] (or [`GameState::submit`],
/// which scores raw input first). A rejected guess leaves the state untouched.
///
/// # Examples
/// ```
/// use clidle::core::Word;
/// use clidle::game::GameState;
/// use clidle::wordlists::WordList;
///
/// let words = WordList::new(["crane", "crash"]);
/// let mut game = GameState::new(Word::new("crane").unwrap(), &words);
///
/// game.submit("crash").unwrap();
/// assert_eq!(game.current_turn(), 1);
/// assert!(!game.should_end_game());
///
/// game.submit("crane").unwrap();
/// assert!(game.is_word_guessed());
/// assert!(game.should_end_game());
/// ```
#[derive(Debug, Clone)]
pub struct GameState<D: Dictionary> {
    target: Word,
    guesses: Vec<Guess>,
    dictionary: D,
    scoring: Scoring,
}

impl<D: Dictionary> GameState<D> {
    /// Start a game against `target`, validating guesses with `dictionary`
    pub fn new(target: Word, dictionary: D) -> Self {
        log::info!("New game started");
        log::debug!("Target word: {target}");

        Self {
            target,
            guesses: Vec::with_capacity(MAX_GUESSES),
            dictionary,
            scoring: Scoring::default(),
        }
    }

    /// Use a different scoring mode for [`GameState::submit`]
    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Score raw input against the target and append it
    ///
    /// # Errors
    ///
    /// See [`GameState::append_guess`].
    pub fn submit(&mut self, raw: &str) -> Result<(), GameError> {
        let guess = self.scoring.evaluate(&Guess::new(raw), &self.target);
        self.append_guess(guess)
    }

    /// Validate an already-scored guess and record it
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has ended
    /// - [`GameError::InvalidLength`] when the guess is not [`WORD_SIZE`] letters
    /// - [`GameError::InvalidWord`] when the dictionary rejects the word
    pub fn append_guess(&mut self, guess: Guess) -> Result<(), GameError> {
        if self.should_end_game() {
            log::debug!("Rejected '{guess}': game over");
            return Err(GameError::GameOver);
        }

        if guess.len() != WORD_SIZE {
            log::debug!("Rejected '{guess}': {} letters", guess.len());
            return Err(GameError::InvalidLength {
                expected: WORD_SIZE,
                actual: guess.len(),
            });
        }

        let word = guess.to_string();
        if !self.dictionary.is_word(&word) {
            log::debug!("Rejected '{word}': not in dictionary");
            return Err(GameError::InvalidWord(word));
        }

        self.guesses.push(guess);
        log::debug!(
            "Accepted '{word}' on turn {}/{MAX_GUESSES}",
            self.guesses.len()
        );
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Accepted guesses in the order they were made
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    /// Number of guesses accepted so far, also the index of the next free slot
    #[inline]
    #[must_use]
    pub fn current_turn(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn remaining_turns(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    #[inline]
    #[must_use]
    pub const fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// True when the latest guess matched the target exactly
    ///
    /// Always false before the first guess.
    #[must_use]
    pub fn is_word_guessed(&self) -> bool {
        self.last_guess().is_some_and(Guess::is_correct)
    }

    /// True once the word is guessed or every turn is used
    #[must_use]
    pub fn should_end_game(&self) -> bool {
        self.is_word_guessed() || self.current_turn() >= MAX_GUESSES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct};
    use crate::wordlists::WordList;

    const MISSES: [&str; 6] = ["slate", "audio", "moist", "built", "plush", "foggy"];

    fn words() -> WordList {
        WordList::new(["crane", "crash", "slate", "audio", "moist", "built", "plush", "foggy"])
    }

    fn new_game(words: &WordList) -> GameState<&WordList> {
        GameState::new(Word::new("crane").unwrap(), words)
    }

    #[test]
    fn new_game_is_in_progress() {
        let words = words();
        let game = new_game(&words);
        assert_eq!(game.current_turn(), 0);
        assert_eq!(game.remaining_turns(), MAX_GUESSES);
        assert!(game.guesses().is_empty());
        assert!(game.last_guess().is_none());
        assert!(!game.is_word_guessed());
        assert!(!game.should_end_game());
        assert_eq!(game.target().text(), "CRANE");
    }

    #[test]
    fn first_guess_is_scored_and_recorded() {
        let words = words();
        let mut game = new_game(&words);

        game.submit("crash").unwrap();

        assert_eq!(game.current_turn(), 1);
        assert_eq!(game.remaining_turns(), 5);
        let statuses: Vec<_> = game.last_guess().unwrap().statuses().collect();
        assert_eq!(statuses, [Correct, Correct, Correct, Absent, Absent]);
        assert!(!game.is_word_guessed());
        assert!(!game.should_end_game());
    }

    #[test]
    fn six_misses_end_the_game() {
        let words = words();
        let mut game = new_game(&words);

        for (turn, raw) in MISSES.iter().enumerate() {
            assert!(!game.should_end_game());
            game.submit(raw).unwrap();
            assert_eq!(game.current_turn(), turn + 1);
        }

        assert_eq!(game.current_turn(), MAX_GUESSES);
        assert_eq!(game.remaining_turns(), 0);
        assert!(game.should_end_game());
        assert!(!game.is_word_guessed());
    }

    #[test]
    fn guess_after_limit_is_game_over_and_changes_nothing() {
        let words = words();
        let mut game = new_game(&words);
        for raw in MISSES {
            game.submit(raw).unwrap();
        }
        let before = game.guesses().to_vec();

        assert_eq!(game.submit("crane"), Err(GameError::GameOver));
        assert_eq!(game.current_turn(), MAX_GUESSES);
        assert_eq!(game.guesses(), before.as_slice());
    }

    #[test]
    fn game_over_is_checked_before_length() {
        let words = words();
        let mut game = new_game(&words);
        for raw in MISSES {
            game.submit(raw).unwrap();
        }
        assert_eq!(game.submit("ab"), Err(GameError::GameOver));
    }

    #[test]
    fn guessing_the_target_wins_on_turn_one() {
        let words = words();
        let mut game = new_game(&words);

        game.submit("crane").unwrap();

        assert!(game.last_guess().unwrap().statuses().all(|s| s == Correct));
        assert!(game.is_word_guessed());
        assert!(game.should_end_game());
        assert_eq!(game.submit("slate"), Err(GameError::GameOver));
        assert_eq!(game.current_turn(), 1);
    }

    #[test]
    fn winning_on_the_last_turn() {
        let words = words();
        let mut game = new_game(&words);
        for raw in &MISSES[..5] {
            game.submit(raw).unwrap();
        }
        game.submit("CRANE").unwrap();
        assert!(game.should_end_game());
        assert!(game.is_word_guessed());
    }

    #[test]
    fn wrong_length_is_rejected_without_using_a_turn() {
        let words = words();
        let mut game = new_game(&words);

        for raw in ["", "cran", "cranes"] {
            let err = game.submit(raw).unwrap_err();
            assert_eq!(
                err,
                GameError::InvalidLength {
                    expected: WORD_SIZE,
                    actual: raw.len()
                }
            );
        }
        assert_eq!(game.current_turn(), 0);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected_without_using_a_turn() {
        let words = words();
        let mut game = new_game(&words);
        game.submit("crash").unwrap();

        assert_eq!(
            game.submit("abcde"),
            Err(GameError::InvalidWord("ABCDE".to_string()))
        );
        assert_eq!(game.current_turn(), 1);
        assert_eq!(game.last_guess().unwrap().to_string(), "CRASH");
    }

    #[test]
    fn append_guess_accepts_prescored_guess() {
        let words = words();
        let mut game = new_game(&words);
        let scored = crate::core::evaluate(&Guess::new("slate"), game.target());

        game.append_guess(scored.clone()).unwrap();
        assert_eq!(game.guesses(), [scored]);
    }

    #[test]
    fn dictionary_answer_is_trusted() {
        // Only the dictionary decides; even the target itself can be refused
        let words = WordList::new(["slate"]);
        let mut game = GameState::new(Word::new("crane").unwrap(), &words);
        assert!(matches!(game.submit("crane"), Err(GameError::InvalidWord(_))));
        assert!(game.submit("slate").is_ok());
    }

    #[test]
    fn frequency_scoring_is_used_by_submit() {
        let words = WordList::new(["speed"]);
        let mut game =
            GameState::new(Word::new("crane").unwrap(), &words).with_scoring(Scoring::Frequency);
        assert_eq!(game.scoring(), Scoring::Frequency);

        game.submit("speed").unwrap();
        let statuses: Vec<_> = game.last_guess().unwrap().statuses().collect();
        assert_eq!(
            statuses,
            [Absent, Absent, crate::core::LetterStatus::Present, Absent, Absent]
        );
    }

    #[test]
    fn games_sharing_a_dictionary_are_independent() {
        let words = words();
        let mut first = new_game(&words);
        let second = GameState::new(Word::new("slate").unwrap(), &words);

        first.submit("crash").unwrap();
        assert_eq!(first.current_turn(), 1);
        assert_eq!(second.current_turn(), 0);
    }
}
