//! Per-frame animation driver
//!
//! A cancellable repeating task. The owner polls it once per display refresh;
//! when a tick is due the driver hands out the elapsed time since the previous
//! tick, and the owner calls [`AnimationDriver::reschedule`] once the tick's
//! work is done. Stopping drops the pending request, so no further tick fires.

use crate::clock::Timestamp;

/// What paces the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickSource {
    /// Due on every display refresh
    #[default]
    DisplayRefresh,
    /// Due at most once per `interval_ms`
    FixedRate { interval_ms: u64 },
}

/// A single driver firing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub now: Timestamp,
    /// Seconds since the previous tick (or since the driver was started)
    pub dt_secs: f32,
}

#[derive(Debug, Clone)]
pub struct AnimationDriver {
    source: TickSource,
    running: bool,
    /// Instant the next tick becomes due, `None` when nothing is requested
    pending: Option<Timestamp>,
    last_frame: Timestamp,
}

impl AnimationDriver {
    pub fn new(source: TickSource) -> Self {
        Self {
            source,
            running: false,
            pending: None,
            last_frame: Timestamp::ZERO,
        }
    }

    pub fn source(&self) -> TickSource {
        self.source
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// A tick is requested and will fire once due
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start requesting ticks. Returns `false` if already running.
    ///
    /// The frame clock is re-anchored at `now`, so the first tick after a
    /// restart only covers the time since the restart.
    pub fn start(&mut self, now: Timestamp) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_frame = now;
        self.pending = Some(self.due_after(now));
        true
    }

    /// Stop requesting ticks. Returns `false` if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.pending = None;
        true
    }

    /// Drop any pending request for good
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::trace!("Cancelled pending tick");
        }
        self.running = false;
    }

    /// Fire the pending tick if it is due at `now`
    pub fn poll(&mut self, now: Timestamp) -> Option<Tick> {
        let due = self.pending?;
        if !self.running || now < due {
            return None;
        }

        self.pending = None;
        let dt_secs = now.secs_since(self.last_frame);
        self.last_frame = now;
        Some(Tick { now, dt_secs })
    }

    /// Request the next tick after one completed at `now`
    pub fn reschedule(&mut self, now: Timestamp) {
        if self.running {
            self.pending = Some(self.due_after(now));
        }
    }

    fn due_after(&self, now: Timestamp) -> Timestamp {
        match self.source {
            TickSource::DisplayRefresh => now,
            TickSource::FixedRate { interval_ms } => now + interval_ms,
        }
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(TickSource::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn at(ms: u64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn test_idle_driver_never_ticks() {
        let mut driver = AnimationDriver::default();
        assert!(driver.poll(at(100)).is_none());
        assert!(!driver.is_pending());
    }

    #[test]
    fn test_refresh_ticks_carry_elapsed_time() {
        let mut driver = AnimationDriver::default();
        assert!(driver.start(at(1000)));

        let tick = driver.poll(at(1016)).expect("tick due on refresh");
        assert_eq!(tick.now, at(1016));
        assert_relative_eq!(tick.dt_secs, 0.016);

        // Nothing fires until the tick is rescheduled
        assert!(driver.poll(at(1032)).is_none());
        driver.reschedule(tick.now);
        let tick = driver.poll(at(1050)).expect("tick after reschedule");
        assert_relative_eq!(tick.dt_secs, 0.034);
    }

    #[test]
    fn test_start_and_stop_are_idempotent() {
        let mut driver = AnimationDriver::default();
        assert!(driver.start(at(0)));
        assert!(!driver.start(at(50)));
        assert!(driver.stop());
        assert!(!driver.stop());
        assert!(!driver.is_pending());
    }

    #[test]
    fn test_stop_prevents_next_tick() {
        let mut driver = AnimationDriver::default();
        driver.start(at(0));
        driver.stop();
        assert!(driver.poll(at(10)).is_none());

        // An in-flight tick finishing after the stop does not re-arm it
        driver.reschedule(at(10));
        assert!(driver.poll(at(20)).is_none());
    }

    #[test]
    fn test_restart_reanchors_frame_clock() {
        let mut driver = AnimationDriver::default();
        driver.start(at(0));
        driver.poll(at(16));
        driver.stop();

        driver.start(at(10_000));
        let tick = driver.poll(at(10_020)).expect("tick after restart");
        assert_relative_eq!(tick.dt_secs, 0.02);
    }

    #[test]
    fn test_fixed_rate_waits_for_interval() {
        let mut driver = AnimationDriver::new(TickSource::FixedRate { interval_ms: 100 });
        driver.start(at(0));
        assert!(driver.poll(at(99)).is_none());

        let tick = driver.poll(at(100)).expect("due at interval");
        driver.reschedule(tick.now);
        assert!(driver.poll(at(150)).is_none());
        assert!(driver.poll(at(200)).is_some());
    }

    #[test]
    fn test_cancel_clears_request() {
        let mut driver = AnimationDriver::default();
        driver.start(at(0));
        driver.cancel();
        assert!(!driver.is_running());
        assert!(driver.poll(at(5)).is_none());
    }
}
