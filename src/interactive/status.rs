//! Status line with timed auto-reset
//!
//! Every timed message schedules a reset. The line only goes back to the
//! default text once all scheduled resets have fired, so a newer message is
//! not cleared by the timer of an older one.

use std::time::{Duration, Instant};

/// Text shown when nothing else is pending
pub const DEFAULT_STATUS: &str = "Guess the word!";

#[derive(Debug, Clone)]
pub struct StatusLine {
    text: String,
    pending: Vec<Instant>,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: DEFAULT_STATUS.to_string(),
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of resets still scheduled
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Show `message` and schedule a reset after `duration`
    ///
    /// A zero duration schedules nothing; the message stays until an earlier
    /// reset fires or something else replaces it.
    pub fn set(&mut self, message: impl Into<String>, duration: Duration, now: Instant) {
        self.text = message.into();
        if !duration.is_zero() {
            self.pending.push(now + duration);
        }
    }

    /// Show `message` and cancel every scheduled reset
    pub fn set_sticky(&mut self, message: impl Into<String>) {
        self.text = message.into();
        self.pending.clear();
    }

    /// Go back to the default text immediately
    pub fn reset(&mut self) {
        self.set_sticky(DEFAULT_STATUS);
    }

    /// Earliest scheduled reset
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().min().copied()
    }

    /// Fire every reset due at `now`
    ///
    /// Returns true when the text went back to the default.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.pending.len();
        self.pending.retain(|&deadline| deadline > now);

        if before != self.pending.len() && self.pending.is_empty() {
            self.text = DEFAULT_STATUS.to_string();
            return true;
        }
        false
    }
}
