//! Trailing-edge debouncing as an explicit schedule/cancel task.
//!
//! Zellij timers cannot be cancelled once armed, so cancellation lives here
//! instead: every [`Debouncer::schedule`] replaces the pending call and pushes
//! its due time out, and [`Debouncer::poll`] only releases the call once that
//! due time has passed. Timers armed by superseded calls fire, poll early, and
//! get nothing.
//!
//! ```text
//! schedule("b")  schedule("br")  schedule("bra")
//!      │               │               │
//!      ▼ poll → None   ▼ poll → None   ▼ poll → Some("bra")   (after `delay`)
//! ```
//!
//! Time comes from a [`Clock`], so tests drive it with [`ManualClock`] instead
//! of sleeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monotonic time source, measured from an arbitrary origin.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> Duration;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward by `by`.
    pub fn advance(&self, by: Duration) {
        let millis = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCall<T> {
    due: Duration,
    args: T,
}

/// Outcome of polling a debouncer when a host timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll<T> {
    /// The quiet period elapsed; run the action with these arguments.
    Ready(T),
    /// A call is pending but not yet due; re-arm a timer for the remainder.
    NotYet(Duration),
    /// Nothing pending.
    Idle,
}

/// Holds at most one pending call and releases it after `delay` of quiet.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<PendingCall<T>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending call with `args`, due `delay` after `now`.
    ///
    /// Returns the delay the caller should arm a host timer for.
    pub fn schedule(&mut self, args: T, now: Duration) -> Duration {
        self.pending = Some(PendingCall {
            due: now + self.delay,
            args,
        });
        self.delay
    }

    /// Drops the pending call, returning its arguments.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|call| call.args)
    }

    /// Releases the pending call if it is due at `now`.
    pub fn poll(&mut self, now: Duration) -> Poll<T> {
        match &self.pending {
            None => Poll::Idle,
            Some(call) if call.due > now => Poll::NotYet(call.due - now),
            Some(_) => self
                .pending
                .take()
                .map_or(Poll::Idle, |call| Poll::Ready(call.args)),
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn burst_of_calls_fires_once_with_last_args() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(DELAY);

        for text in ["b", "br", "bra"] {
            debouncer.schedule(text.to_string(), clock.now());
            clock.advance(Duration::from_millis(100));
            assert!(matches!(debouncer.poll(clock.now()), Poll::NotYet(_)));
        }

        clock.advance(Duration::from_millis(200));
        assert_eq!(debouncer.poll(clock.now()), Poll::Ready("bra".to_string()));
        assert_eq!(debouncer.poll(clock.now()), Poll::Idle);
    }

    #[test]
    fn early_poll_reports_remaining_delay() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule(1, clock.now());
        clock.advance(Duration::from_millis(290));

        assert_eq!(
            debouncer.poll(clock.now()),
            Poll::NotYet(Duration::from_millis(10))
        );
        assert!(debouncer.is_pending());
    }

    #[test]
    fn fires_exactly_at_due_time() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(DELAY);

        assert_eq!(debouncer.schedule('x', clock.now()), DELAY);
        clock.advance(DELAY);
        assert_eq!(debouncer.poll(clock.now()), Poll::Ready('x'));
    }

    #[test]
    fn cancel_drops_pending_call() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule("term", clock.now());
        assert_eq!(debouncer.cancel(), Some("term"));

        clock.advance(DELAY * 2);
        assert_eq!(debouncer.poll(clock.now()), Poll::Idle);
        assert_eq!(debouncer.cancel(), None);
    }

    #[test]
    fn separate_quiet_periods_fire_separately() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule(1, clock.now());
        clock.advance(DELAY);
        assert_eq!(debouncer.poll(clock.now()), Poll::Ready(1));

        debouncer.schedule(2, clock.now());
        clock.advance(DELAY);
        assert_eq!(debouncer.poll(clock.now()), Poll::Ready(2));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance(Duration::from_secs(1));
        assert_eq!(other.now(), Duration::from_secs(1));
    }
}
