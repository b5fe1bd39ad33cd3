//! Transient confirmation message.

use std::time::{Duration, Instant};

/// A message that disappears after a fixed duration.
#[derive(Debug, Clone)]
pub struct Snackbar {
    message: Option<String>,
    shown_at: Option<Instant>,
    duration: Duration,
}

impl Snackbar {
    /// Create a hidden snackbar that stays up for `duration` once shown.
    pub fn new(duration: Duration) -> Self {
        Self {
            message: None,
            shown_at: None,
            duration,
        }
    }

    /// Show `message` starting at `now`. Showing again restarts the timer.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.shown_at = Some(now);
    }

    /// Whether the snackbar is visible at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        match (&self.message, self.shown_at) {
            (Some(_), Some(shown_at)) => now.saturating_duration_since(shown_at) < self.duration,
            _ => false,
        }
    }

    /// The message, if it is still visible at `now`.
    pub fn message(&self, now: Instant) -> Option<&str> {
        if self.is_visible(now) {
            self.message.as_deref()
        } else {
            None
        }
    }

    /// Hide the snackbar once it has expired.
    pub fn tick(&mut self, now: Instant) {
        if self.message.is_some() && !self.is_visible(now) {
            self.message = None;
            self.shown_at = None;
        }
    }

    /// How long the snackbar stays up.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
