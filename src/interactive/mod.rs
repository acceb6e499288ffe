//! Interactive TUI interface

mod app;
mod rendering;
mod status;

pub use app::{App, STATUS_DURATION, Statistics, run_tui};
pub use status::{DEFAULT_STATUS, StatusLine};
