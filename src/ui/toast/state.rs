// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle state.

use crate::config::defaults::TOAST_HIDE_DELAY_MS;
use std::time::{Duration, Instant};

/// Delay before a shown toast hides itself.
pub const HIDE_DELAY: Duration = Duration::from_millis(TOAST_HIDE_DELAY_MS);

/// A single transient notification with a text payload.
///
/// Every [`Toast::show`] records its own hide deadline; overlapping calls are
/// not deduplicated, and visibility clears only when the last pending
/// deadline fires (last-hide-wins). Time is injected via `Instant` parameters
/// so the lifecycle is testable against a hand-built clock.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: String,
    hide_deadlines: Vec<Instant>,
    visible: bool,
}

impl Toast {
    /// Creates a hidden toast with no text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message`, or `default` when `message` is empty, and records a
    /// hide deadline one delay from `now`.
    ///
    /// Earlier pending deadlines are kept, not cancelled; they only take
    /// effect once no later deadline remains.
    pub fn show(&mut self, message: &str, default: &str, now: Instant) {
        let text = if message.is_empty() { default } else { message };
        self.message = text.to_string();
        self.visible = true;
        self.hide_deadlines.push(now + HIDE_DELAY);
    }

    /// Processes elapsed time: drops fired deadlines and clears visibility
    /// once the last one has fired.
    pub fn tick(&mut self, now: Instant) {
        self.hide_deadlines.retain(|deadline| *deadline > now);
        if self.hide_deadlines.is_empty() {
            self.visible = false;
        }
    }

    /// Whether the toast is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The currently displayed text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether any hide deadline is still pending. Drives the tick
    /// subscription.
    pub fn has_pending(&self) -> bool {
        !self.hide_deadlines.is_empty()
    }
}
