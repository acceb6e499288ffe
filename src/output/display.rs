//! Coloured terminal output for the line-based modes

use super::formatters::{guess_to_emoji, status_rgb};
use crate::commands::CheckResult;
use crate::core::{Guess, LetterStatus};
use colored::{ColoredString, Colorize};

fn colored_letter(ch: char, status: LetterStatus) -> ColoredString {
    let (r, g, b) = status_rgb(status);
    let text = format!(" {ch} ");

    match status {
        LetterStatus::None => text.truecolor(r, g, b),
        _ => text.black().bold().on_truecolor(r, g, b),
    }
}

/// Format a guess as a row of coloured letter tiles
#[must_use]
pub fn format_guess_row(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|l| colored_letter(l.char, l.status).to_string())
        .collect()
}

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Scoring: {}",
        result.target.text().bright_yellow().bold(),
        result.scoring
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n  {}  {}",
        format_guess_row(&result.guess),
        guess_to_emoji(&result.guess)
    );

    if !result.in_dictionary {
        println!(
            "\n{}",
            format!("⚠ {} is not in the word list", result.guess).yellow()
        );
    }
    println!();
}
