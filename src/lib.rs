//! clidle
//!
//! A terminal word-guessing game: guess a five-letter word in six tries, with
//! each letter scored against the hidden target.
//!
//! # Quick Start
//!
//! ```rust
//! use clidle::core::{LetterStatus, Word};
//! use clidle::game::GameState;
//! use clidle::wordlists::WordList;
//!
//! let words = WordList::embedded();
//! let mut game = GameState::new(Word::new("crane").unwrap(), &words);
//!
//! game.submit("crash").unwrap();
//! let statuses: Vec<_> = game.last_guess().unwrap().statuses().collect();
//! assert_eq!(statuses[0], LetterStatus::Correct);
//! assert!(!game.should_end_game());
//! ```

// Core domain types
pub mod core;

// Game state and validation
pub mod game;

// Word lists and the dictionary oracle
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod log;
