//! Simple line-based game mode
//!
//! Reads one guess per line and prints the scored row, without the TUI.

use crate::core::{MAX_GUESSES, WORD_SIZE};
use crate::game::{GameError, GameState};
use crate::output::{format_guess_row, guess_to_emoji, share_text};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// How a line-based session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    /// Input closed or the player typed `quit` before the game ended
    Quit,
}

/// Play one game reading guesses from `input` and writing to `output`
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D, R, W>(game: &mut GameState<D>, mut input: R, mut output: W) -> Result<SessionEnd>
where
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n{}", "Guess the word!".bright_cyan().bold())?;
    writeln!(
        output,
        "{WORD_SIZE} letters, {MAX_GUESSES} tries. Type 'quit' to give up.\n"
    )?;

    while !game.should_end_game() {
        write!(output, "Guess {}/{MAX_GUESSES}: ", game.current_turn() + 1)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(SessionEnd::Quit);
        }

        let raw = line.trim();
        if matches!(raw.to_lowercase().as_str(), "quit" | "exit" | "q") {
            writeln!(output, "The word was {}", game.target().text().bold())?;
            return Ok(SessionEnd::Quit);
        }

        match game.submit(raw) {
            Ok(()) => {
                if let Some(guess) = game.last_guess() {
                    writeln!(output, "  {}  {}", format_guess_row(guess), guess_to_emoji(guess))?;
                }
            }
            Err(err) => {
                writeln!(output, "  {} {}", "❌".red(), describe_error(&err).red())?;
            }
        }
    }

    let won = game.is_word_guessed();
    if won {
        writeln!(
            output,
            "\n{}",
            format!("🎉 Solved in {}/{MAX_GUESSES}!", game.current_turn())
                .green()
                .bold()
        )?;
    } else {
        writeln!(
            output,
            "\n{} {}",
            "Out of guesses. The word was".red(),
            game.target().text().bright_yellow().bold()
        )?;
    }
    writeln!(output, "\n{}\n", share_text(game))?;

    Ok(if won { SessionEnd::Won } else { SessionEnd::Lost })
}

/// User-facing description of a rejected guess
#[must_use]
pub fn describe_error(err: &GameError) -> String {
    match err {
        GameError::GameOver => "The game is over.".to_string(),
        GameError::InvalidLength { expected, actual } => {
            format!("{err}: expected {expected} letters, got {actual}")
        }
        GameError::InvalidWord(word) => format!("{err}: '{word}' is not in the word list"),
    }
}
