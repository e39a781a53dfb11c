//! Discrete wavefront emission
//!
//! Emission is decided once per frame: a new wavefront leaves the source when
//! strictly more than one emission period has passed since the previous one.
//! The period shrinks as the source speeds up, so faster sources leave denser
//! wavefronts behind them:
//!
//! ```text
//! period = max(min_period, base_period - speed)
//! ```

use crate::clock::Timestamp;
use crate::wavefront::Wavefront;

/// Emission period as a function of source speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionTiming {
    /// Period at zero speed (ms)
    pub base_period_ms: f32,
    /// Floor on the period (ms)
    pub min_period_ms: f32,
}

impl EmissionTiming {
    pub fn new(base_period_ms: f32, min_period_ms: f32) -> Self {
        Self {
            base_period_ms,
            min_period_ms,
        }
    }

    /// Emission period in milliseconds for a source moving at `speed`
    pub fn period_ms(&self, speed: f32) -> f32 {
        (self.base_period_ms - speed).max(self.min_period_ms)
    }
}

impl Default for EmissionTiming {
    fn default() -> Self {
        Self::new(500.0, 50.0)
    }
}

/// When the last wavefront left the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmissionClock {
    pub last_emission: Timestamp,
}

/// Decides whether a wavefront is emitted on the current frame
#[derive(Debug, Clone)]
pub struct EmissionScheduler {
    timing: EmissionTiming,
    clock: EmissionClock,
}

impl EmissionScheduler {
    /// The first emission happens one full period after `anchor`
    pub fn new(timing: EmissionTiming, anchor: Timestamp) -> Self {
        Self {
            timing,
            clock: EmissionClock {
                last_emission: anchor,
            },
        }
    }

    pub fn timing(&self) -> EmissionTiming {
        self.timing
    }

    pub fn clock(&self) -> EmissionClock {
        self.clock
    }

    /// Emit a wavefront at `position` if more than one period has elapsed
    pub fn poll(&mut self, now: Timestamp, speed: f32, position: f32) -> Option<Wavefront> {
        let elapsed = now.millis_since(self.clock.last_emission) as f32;
        let period = self.timing.period_ms(speed);

        if elapsed > period {
            self.clock.last_emission = now;
            log::trace!("Emitted wavefront at x={:.1} (period {:.0} ms)", position, period);
            Some(Wavefront::new(position, now))
        } else {
            None
        }
    }
}
