//! clidle - CLI
//!
//! Terminal word-guessing game with a TUI, a line-based mode, and a one-shot
//! scoring command.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use clidle::{
    commands::{SessionEnd, check_guess, run_simple},
    core::{Scoring, Word},
    game::GameState,
    output::print_check_result,
    wordlists::{ANSWERS, Dictionary, WordList, loader::load_from_file, random_target},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "clidle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a file of accepted guesses
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Target word (default: random pick from the embedded answers)
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Seed for the random target pick
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Scoring: membership (default) or frequency (duplicate letters limited to target count)
    #[arg(short, long, global = true, default_value = "membership")]
    scoring: Scoring,

    /// Show the target word
    #[arg(long, global = true)]
    debug: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Score one guess against a target
    Check {
        /// The target word
        answer: String,

        /// The guess to score
        guess: String,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "all": the embedded guess list plus the embedded answers
/// - "<path>": words from the file, plus the embedded answers so any target can be guessed
fn load_dictionary(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "all" => Ok(WordList::embedded()),
        path => {
            let mut words = load_from_file(path)
                .with_context(|| format!("Failed to load word list from {path}"))?;
            if words.is_empty() {
                bail!("Word list {path} contains no valid words");
            }
            words.extend(WordList::new(ANSWERS));
            Ok(words)
        }
    }
}

fn pick_target(target: Option<&str>, dictionary: &WordList, rng: &mut StdRng) -> Result<Word> {
    let word = match target {
        Some(word) => Word::new(word).with_context(|| format!("Invalid target word '{word}'"))?,
        None => random_target(ANSWERS, rng).context("No answer words available")?,
    };

    if !dictionary.is_word(word.text()) {
        log::warn!("Target {word} is not in the word list and cannot be guessed");
    }
    Ok(word)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clidle::log::init_logger(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)?;
    log::debug!("Dictionary holds {} words", dictionary.len());

    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let target = pick_target(cli.target.as_deref(), &dictionary, &mut rng)?;
            run_play_command(target, &dictionary, cli.scoring, cli.debug, rng)
        }
        Commands::Simple => {
            let target = pick_target(cli.target.as_deref(), &dictionary, &mut rng)?;
            run_simple_command(target, &dictionary, cli.scoring, cli.debug)
        }
        Commands::Check { answer, guess } => {
            let result = check_guess(&answer, &guess, cli.scoring, &dictionary)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    target: Word,
    dictionary: &WordList,
    scoring: Scoring,
    debug: bool,
    rng: StdRng,
) -> Result<()> {
    use clidle::interactive::{App, run_tui};

    let app = App::new(target, dictionary, ANSWERS, scoring, rng).with_debug(debug);
    run_tui(app)
}

fn run_simple_command(
    target: Word,
    dictionary: &WordList,
    scoring: Scoring,
    debug: bool,
) -> Result<()> {
    if debug {
        println!("[DEBUG] Correct word: {target}");
    }

    let mut game = GameState::new(target, dictionary).with_scoring(scoring);
    let stdin = io::stdin();
    let end = run_simple(&mut game, stdin.lock(), io::stdout())?;

    log::info!("Session ended: {end:?}");
    if end == SessionEnd::Quit {
        println!("👋 Thanks for playing!");
    }
    Ok(())
}
