//! Debouncing for completion requests.
//!
//! [`Debouncer`] is a logical-time timer: callers pass `now` explicitly, so
//! the quiet-window rules are testable without sleeping. [`LatestGate`]
//! covers the async side, where an in-flight request may finish after a
//! newer one started and must then be dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const SUGGESTION_QUIET_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    payload: T,
}

/// Schedule / supersede / fire-once timer.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Debouncer<T> {
        Debouncer {
            quiet,
            pending: None,
        }
    }

    /// Replace any pending payload and restart the quiet window. Returns
    /// the superseded payload, if any.
    pub fn schedule(&mut self, now: Instant, payload: T) -> Option<T> {
        let prev = self.pending.take().map(|p| p.payload);
        self.pending = Some(Pending {
            deadline: now + self.quiet,
            payload,
        });
        prev
    }

    /// Hand out the pending payload once its window has elapsed.
    pub fn fire(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if due {
            self.pending.take().map(|p| p.payload)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending payload fires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Debouncer::new(SUGGESTION_QUIET_WINDOW)
    }
}

/// Ticket issued by [`LatestGate::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Latest-request-wins gate shared across tasks.
#[derive(Debug, Clone, Default)]
pub struct LatestGate {
    generation: Arc<AtomicU64>,
}

impl LatestGate {
    pub fn new() -> LatestGate {
        LatestGate::default()
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }

    /// Keep `value` only if no newer request began since `ticket`.
    pub fn admit<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        self.is_latest(ticket).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_quiet_window() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        d.schedule(t0, "a");
        assert_eq!(d.fire(t0 + Duration::from_millis(499)), None);
        assert_eq!(d.fire(t0 + Duration::from_millis(500)), Some("a"));
        assert_eq!(d.fire(t0 + Duration::from_millis(900)), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_reschedule_supersedes_and_restarts_window() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(500));
        d.schedule(t0, 1);
        let prev = d.schedule(t0 + Duration::from_millis(300), 2);
        assert_eq!(prev, Some(1));
        // original deadline passes without firing
        assert_eq!(d.fire(t0 + Duration::from_millis(600)), None);
        assert_eq!(
            d.remaining(t0 + Duration::from_millis(600)),
            Some(Duration::from_millis(200))
        );
        assert_eq!(d.fire(t0 + Duration::from_millis(800)), Some(2));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        d.schedule(t0, ());
        assert_eq!(d.cancel(), Some(()));
        assert_eq!(d.fire(t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_latest_gate_drops_stale_results() {
        let gate = LatestGate::new();
        let first = gate.begin();
        let second = gate.begin();
        assert_eq!(gate.admit(first, "old"), None);
        assert_eq!(gate.admit(second, "new"), Some("new"));
    }
}
