//! Formatting utilities shared by the CLI and the TUI

use crate::core::{Guess, LetterStatus, MAX_GUESSES};
use crate::game::GameState;
use crate::wordlists::Dictionary;

/// Primary text colour, used for unscored letters
pub const COLOR_PRIMARY: (u8, u8, u8) = (0xd7, 0xda, 0xdc);
/// Dimmed colour for absent letters
pub const COLOR_SECONDARY: (u8, u8, u8) = (0x62, 0x62, 0x62);
pub const COLOR_YELLOW: (u8, u8, u8) = (0xb5, 0x9f, 0x3b);
pub const COLOR_GREEN: (u8, u8, u8) = (0x53, 0x8d, 0x4e);

/// RGB colour for a letter status
#[must_use]
pub const fn status_rgb(status: LetterStatus) -> (u8, u8, u8) {
    match status {
        LetterStatus::None => COLOR_PRIMARY,
        LetterStatus::Absent => COLOR_SECONDARY,
        LetterStatus::Present => COLOR_YELLOW,
        LetterStatus::Correct => COLOR_GREEN,
    }
}

#[must_use]
pub const fn status_to_emoji(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '🟩',
        LetterStatus::Present => '🟨',
        LetterStatus::Absent => '⬛',
        LetterStatus::None => '⬜',
    }
}

/// Format a guess as a row of emoji squares
#[must_use]
pub fn guess_to_emoji(guess: &Guess) -> String {
    guess.statuses().map(status_to_emoji).collect()
}

/// Shareable summary like "3/6" followed by one emoji row per guess
///
/// Lost games show "X/6".
#[must_use]
pub fn share_text<D: Dictionary>(game: &GameState<D>) -> String {
    let score = if game.is_word_guessed() {
        game.current_turn().to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!("{score}/{MAX_GUESSES}");
    for guess in game.guesses() {
        text.push('\n');
        text.push_str(&guess_to_emoji(guess));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};
    use crate::wordlists::WordList;

    #[test]
    fn emoji_for_scored_guess() {
        let target = Word::new("crane").unwrap();
        let scored = evaluate(&Guess::new("erase"), &target);
        assert_eq!(guess_to_emoji(&scored), "🟨🟩🟩⬛🟩");
    }

    #[test]
    fn emoji_for_unscored_guess() {
        assert_eq!(guess_to_emoji(&Guess::new("crane")), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn every_status_has_a_distinct_colour() {
        let colours = [
            status_rgb(LetterStatus::None),
            status_rgb(LetterStatus::Absent),
            status_rgb(LetterStatus::Present),
            status_rgb(LetterStatus::Correct),
        ];
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn share_text_for_win() {
        let words = WordList::new(["crane", "crash"]);
        let mut game = GameState::new(Word::new("crane").unwrap(), &words);
        game.submit("crash").unwrap();
        game.submit("crane").unwrap();

        assert_eq!(share_text(&game), "2/6\n🟩🟩🟩⬛⬛\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_text_for_unfinished_game() {
        let words = WordList::new(["crash"]);
        let mut game = GameState::new(Word::new("crane").unwrap(), &words);
        game.submit("crash").unwrap();

        assert_eq!(share_text(&game), "X/6\n🟩🟩🟩⬛⬛");
    }
}
