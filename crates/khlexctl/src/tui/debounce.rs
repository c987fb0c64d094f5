//! Debounce token for search input.
//!
//! Each keystroke schedules a cancellable deadline; a newer keystroke
//! supersedes the prior one. The event loop polls [`Debouncer::fire`] on
//! every tick and applies the pending search when the quiet period passes.
//! Category changes bypass this entirely and recompute immediately.

use std::time::{Duration, Instant};

/// Quiet period before a search recomputation.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    deadline: Option<Instant>,
    token: u64,
}

impl Debouncer {
    /// Schedule (or reschedule) the pending action. Any prior pending token
    /// is invalidated; only the newest deadline can fire.
    pub fn schedule(&mut self, now: Instant, quiet: Duration) -> u64 {
        self.token = self.token.wrapping_add(1);
        self.deadline = Some(now + quiet);
        self.token
    }

    /// Drop the pending action without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True while an action is pending.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Token of the most recent schedule.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Consume the deadline if it has passed. Fires at most once per
    /// schedule.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_quiet_period() {
        let mut debouncer = Debouncer::default();
        let start = Instant::now();

        debouncer.schedule(start, Duration::from_millis(300));
        assert!(debouncer.pending());
        assert!(!debouncer.fire(start + Duration::from_millis(299)));
        assert!(debouncer.fire(start + Duration::from_millis(300)));

        // Consumed: does not fire twice
        assert!(!debouncer.fire(start + Duration::from_millis(301)));
        assert!(!debouncer.pending());
    }

    #[test]
    fn test_newer_schedule_supersedes_older() {
        let mut debouncer = Debouncer::default();
        let start = Instant::now();

        let first = debouncer.schedule(start, Duration::from_millis(300));
        let second = debouncer.schedule(start + Duration::from_millis(200), Duration::from_millis(300));
        assert_ne!(first, second);
        assert_eq!(debouncer.token(), second);

        // The first deadline has passed but was superseded
        assert!(!debouncer.fire(start + Duration::from_millis(350)));
        assert!(debouncer.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_cancel_drops_pending_action() {
        let mut debouncer = Debouncer::default();
        let start = Instant::now();

        debouncer.schedule(start, Duration::from_millis(300));
        debouncer.cancel();
        assert!(!debouncer.pending());
        assert!(!debouncer.fire(start + Duration::from_secs(1)));
    }
}
