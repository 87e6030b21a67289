//! Transient error messages.

use std::collections::VecDeque;

use tokio::time::{Duration, Instant};

/// An error message that clears itself after a fixed delay.
///
/// Every call to [`show`](ErrorBanner::show) schedules its own clear, and
/// nothing cancels a scheduled clear: a message shown one second after
/// another disappears when the first one's delay runs out.
#[derive(Debug, Clone)]
pub struct ErrorBanner {
    message: Option<String>,
    clears: VecDeque<Instant>,
    display: Duration,
}

impl ErrorBanner {
    /// Creates an empty banner.
    pub fn new(display: Duration) -> Self {
        Self {
            message: None,
            clears: VecDeque::new(),
            display,
        }
    }

    /// Current message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Displays `message` and schedules a clear at `now + display`.
    ///
    /// Clears already due at `now` run first, so an overdue clear never
    /// removes the new message.
    pub fn show(&mut self, message: &str, now: Instant) {
        self.expire(now);
        self.message = Some(message.to_string());
        self.clears.push_back(now + self.display);
    }

    /// Runs every clear due at or before `now`.
    ///
    /// Returns true if a clear ran.
    pub fn expire(&mut self, now: Instant) -> bool {
        let mut cleared = false;
        while self.clears.front().is_some_and(|deadline| *deadline <= now) {
            self.clears.pop_front();
            self.message = None;
            cleared = true;
        }
        cleared
    }

    /// Drops the current message. Scheduled clears still run.
    pub fn clear(&mut self) {
        self.message = None;
    }
}
