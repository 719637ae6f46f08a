//! Deterministic one-shot timer queue
//!
//! The event loop owns a single `Scheduler` and polls it with the current
//! instant; nothing here spawns threads or sleeps, which keeps timer
//! behavior fully testable with synthetic clocks.

use crate::sched::CancelToken;
use std::time::Instant;

struct Entry<T> {
    due: Instant,
    token: CancelToken,
    event: T,
}

/// Queue of cancellable one-shot timers
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule `event` to fire at `due` unless `token` is cancelled first
    pub fn schedule(&mut self, due: Instant, token: CancelToken, event: T) {
        self.entries.push(Entry { due, token, event });
    }

    /// The earliest deadline among live entries, for event-loop timeouts
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.entries
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .map(|e| e.due)
            .min()
    }

    /// Remove and return every live entry due at or before `now`
    ///
    /// Cancelled entries are dropped silently, fired or not. Events are
    /// returned in deadline order.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        self.entries.retain(|e| !e.token.is_cancelled());

        let mut due: Vec<Entry<T>> = Vec::new();
        let mut rest: Vec<Entry<T>> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                rest.push(entry);
            }
        }
        self.entries = rest;

        due.sort_by_key(|e| e.due);
        due.into_iter().map(|e| e.event).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn poll_returns_due_events_in_deadline_order() {
        let mut sched = Scheduler::new();
        let t0 = Instant::now();
        let token = CancelToken::new();

        sched.schedule(t0 + Duration::from_secs(5), token.clone(), "late");
        sched.schedule(t0 + Duration::from_secs(1), token.clone(), "early");
        sched.schedule(t0 + Duration::from_secs(3), token, "middle");

        assert_eq!(sched.poll(t0), Vec::<&str>::new());
        assert_eq!(
            sched.poll(t0 + Duration::from_secs(3)),
            vec!["early", "middle"]
        );
        assert_eq!(sched.poll(t0 + Duration::from_secs(10)), vec!["late"]);
        assert!(sched.is_empty());
    }

    #[test]
    fn cancelled_entries_never_fire() {
        let mut sched = Scheduler::new();
        let t0 = Instant::now();
        let token = CancelToken::new();

        sched.schedule(t0, token.clone(), "never");
        token.cancel();

        assert!(sched.poll(t0).is_empty());
        assert!(sched.is_empty());
    }

    #[test]
    fn parent_cancellation_drops_child_entries() {
        let mut sched = Scheduler::new();
        let t0 = Instant::now();
        let parent = CancelToken::new();

        sched.schedule(t0, parent.child(), "outer");
        sched.schedule(t0, parent.child(), "inner");
        parent.cancel();

        assert!(sched.poll(t0).is_empty());
    }

    #[test]
    fn next_due_skips_cancelled_entries() {
        let mut sched = Scheduler::new();
        let t0 = Instant::now();
        let doomed = CancelToken::new();
        let live = CancelToken::new();

        sched.schedule(t0 + Duration::from_secs(1), doomed.clone(), "a");
        sched.schedule(t0 + Duration::from_secs(2), live, "b");
        doomed.cancel();

        assert_eq!(sched.next_due(), Some(t0 + Duration::from_secs(2)));
    }
}
