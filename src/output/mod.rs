//! Terminal output formatting
//!
//! Colour palette, emoji rows and pretty-printing for the line-based modes.

pub mod display;
pub mod formatters;

pub use display::{format_guess_row, print_check_result};
pub use formatters::{guess_to_emoji, share_text};
