// SPDX-License-Identifier: MPL-2.0
//! Deadline-based autoplay schedule for the slide deck.
//!
//! `Autoplay` holds at most one pending advance deadline, so restarting it
//! any number of times can never leave two live schedules behind. Time is
//! injected through `Instant` parameters: the Iced tick subscription supplies
//! wall-clock instants in production, and tests supply hand-built ones.

use crate::config::defaults::{MAX_ADVANCE_CATCH_UP, SLIDE_ADVANCE_INTERVAL_MS};
use std::time::{Duration, Instant};

/// Interval between automatic slide advances.
pub const ADVANCE_INTERVAL: Duration = Duration::from_millis(SLIDE_ADVANCE_INTERVAL_MS);

/// Repeating advance schedule with a single replaceable deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Autoplay {
    next_advance: Option<Instant>,
}

impl Autoplay {
    /// Creates a disarmed schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)starts the schedule: the next advance is due one interval from
    /// `now`. Any previously armed deadline is replaced, never duplicated.
    pub fn restart(&mut self, now: Instant) {
        self.next_advance = Some(now + ADVANCE_INTERVAL);
    }

    /// Disarms the schedule. Pending deadlines are dropped.
    pub fn pause(&mut self) {
        self.next_advance = None;
    }

    /// Re-arms a paused schedule one interval from `now`. Running schedules
    /// keep their existing deadline.
    pub fn resume(&mut self, now: Instant) {
        if self.next_advance.is_none() {
            self.restart(now);
        }
    }

    /// Whether an advance deadline is armed.
    pub fn is_running(&self) -> bool {
        self.next_advance.is_some()
    }

    /// Returns how many advance intervals have elapsed by `now` and re-arms
    /// the next deadline on the same cadence.
    ///
    /// Catch-up is capped at [`MAX_ADVANCE_CATCH_UP`] steps per call; beyond
    /// that the backlog is dropped and the cadence restarts from `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.next_advance else {
            return 0;
        };

        let mut steps = 0;
        while deadline <= now && steps < MAX_ADVANCE_CATCH_UP {
            steps += 1;
            deadline += ADVANCE_INTERVAL;
        }
        if deadline <= now {
            deadline = now + ADVANCE_INTERVAL;
        }
        self.next_advance = Some(deadline);
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Instant {
        Instant::now()
    }

    #[test]
    fn new_schedule_is_disarmed() {
        let mut autoplay = Autoplay::new();
        assert!(!autoplay.is_running());
        assert_eq!(autoplay.poll(base()), 0);
    }

    #[test]
    fn no_advance_before_the_interval_elapses() {
        let t0 = base();
        let mut autoplay = Autoplay::new();
        autoplay.restart(t0);
        assert_eq!(autoplay.poll(t0 + Duration::from_millis(2999)), 0);
    }

    #[test]
    fn one_advance_per_interval() {
        let t0 = base();
        let mut autoplay = Autoplay::new();
        autoplay.restart(t0);
        assert_eq!(autoplay.poll(t0 + Duration::from_millis(3000)), 1);
        assert_eq!(autoplay.poll(t0 + Duration::from_millis(5999)), 0);
        assert_eq!(autoplay.poll(t0 + Duration::from_millis(6000)), 1);
    }

    #[test]
    fn restart_twice_leaves_a_single_schedule() {
        let t0 = base();
        let mut autoplay = Autoplay::new();
        autoplay.restart(t0);
        autoplay.restart(t0);
        // Exactly one advance per interval, never two
        assert_eq!(autoplay.poll(t0 + Duration::from_millis(3000)), 1);
        assert_eq!(autoplay.poll(t0 + Duration::from_millis(3050)), 0);
    }

    #[test]
    fn three_intervals_elapse_as_three_steps() {
        let t0 = base();
        let mut autoplay = Autoplay::new();
        autoplay.restart(t0);
        assert_eq!(autoplay.poll(t0 + Duration::from_millis(9000)), 3);
    }

    #[test]
    fn pause_drops_the_deadline() {
        let t0 = base();
        let mut autoplay = Autoplay::new();
        autoplay.restart(t0);
        autoplay.pause();
        assert!(!autoplay.is_running());
        assert_eq!(autoplay.poll(t0 + Duration::from_millis(10_000)), 0);
    }

    #[test]
    fn resume_rearms_from_now() {
        let t0 = base();
        let mut autoplay = Autoplay::new();
        autoplay.restart(t0);
        autoplay.pause();

        let t1 = t0 + Duration::from_millis(5000);
        autoplay.resume(t1);
        assert!(autoplay.is_running());
        assert_eq!(autoplay.poll(t1 + Duration::from_millis(2999)), 0);
        assert_eq!(autoplay.poll(t1 + Duration::from_millis(3000)), 1);
    }

    #[test]
    fn resume_while_running_keeps_the_deadline() {
        let t0 = base();
        let mut autoplay = Autoplay::new();
        autoplay.restart(t0);
        autoplay.resume(t0 + Duration::from_millis(1000));
        // The original cadence is preserved
        assert_eq!(autoplay.poll(t0 + Duration::from_millis(3000)), 1);
    }

    #[test]
    fn long_stall_is_capped() {
        let t0 = base();
        let mut autoplay = Autoplay::new();
        autoplay.restart(t0);

        let much_later = t0 + ADVANCE_INTERVAL * (MAX_ADVANCE_CATCH_UP * 10);
        assert_eq!(autoplay.poll(much_later), MAX_ADVANCE_CATCH_UP);
        // Cadence restarted: nothing due until a full interval passes
        assert_eq!(autoplay.poll(much_later + Duration::from_millis(2999)), 0);
        assert_eq!(autoplay.poll(much_later + Duration::from_millis(3000)), 1);
    }
}
