//! Monotonic wall-clock time with millisecond resolution.
//!
//! Every simulation input that depends on time goes through [`Timestamp`].
//! Differences saturate at zero, so a clock that appears to run backwards
//! produces no motion and no emissions instead of negative intervals.

use std::cell::Cell;
use std::ops::Add;
use std::rc::Rc;
use std::time::Instant;

use crate::constants::MS_PER_SEC;

/// A monotonic instant, in whole milliseconds since the clock's origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`, zero if `earlier` is in the future.
    pub fn millis_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Seconds elapsed since `earlier`, zero if `earlier` is in the future.
    pub fn secs_since(self, earlier: Timestamp) -> f32 {
        self.millis_since(earlier) as f32 / MS_PER_SEC
    }
}

impl Add<u64> for Timestamp {
    type Output = Timestamp;

    fn add(self, ms: u64) -> Timestamp {
        Timestamp(self.0.saturating_add(ms))
    }
}

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Real monotonic clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
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
    fn now(&self) -> Timestamp {
        Timestamp(self.origin.elapsed().as_millis() as u64)
    }
}

/// Hand-driven clock for deterministic runs.
///
/// Clones share the same instant, so a test can keep one handle and give
/// another to a mount.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.now.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_differences_saturate() {
        let early = Timestamp::from_millis(100);
        let late = Timestamp::from_millis(350);

        assert_eq!(late.millis_since(early), 250);
        assert_eq!(early.millis_since(late), 0);
        assert_eq!(early.secs_since(late), 0.0);
        assert!((late.secs_since(early) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_manual_clock_handles_share_time() {
        let clock = ManualClock::starting_at(10);
        let handle = clock.clone();

        clock.advance(40);
        assert_eq!(handle.now(), Timestamp::from_millis(50));

        handle.set(5);
        assert_eq!(clock.now().as_millis(), 5);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
