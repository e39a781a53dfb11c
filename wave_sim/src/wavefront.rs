//! Emitted wavefronts and their lifecycle
//!
//! A [`Wavefront`] records where and when the source emitted it; its ring
//! radius is derived from the current time on every render and never stored.
//! The [`WavefrontStore`] keeps wavefronts in emission order until the next
//! boundary reset. Under the default [`RetentionPolicy::Unbounded`] it grows
//! with every emission between resets.

use std::collections::VecDeque;

use glam::Vec2;

use crate::clock::Timestamp;

/// A single emitted wavefront
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wavefront {
    emission_position: f32,
    emission_timestamp: Timestamp,
}

impl Wavefront {
    pub fn new(emission_position: f32, emission_timestamp: Timestamp) -> Self {
        Self {
            emission_position,
            emission_timestamp,
        }
    }

    pub fn emission_position(&self) -> f32 {
        self.emission_position
    }

    pub fn emission_timestamp(&self) -> Timestamp {
        self.emission_timestamp
    }

    /// Ring radius at `now`: elapsed milliseconds × `scale`, never negative
    pub fn radius_at(&self, now: Timestamp, scale: f32) -> f32 {
        now.millis_since(self.emission_timestamp) as f32 * scale
    }
}

/// A wavefront as seen at render time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavefrontRing {
    pub center: Vec2,
    pub radius: f32,
}

/// How many wavefronts survive between boundary resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetentionPolicy {
    /// Keep every wavefront until the next reset
    #[default]
    Unbounded,
    /// Keep at most this many, dropping the oldest first
    MaxCount(usize),
    /// Drop wavefronts older than this many milliseconds
    TimeToLive(u64),
}

/// Insertion-ordered wavefronts, oldest first
#[derive(Debug, Clone, Default)]
pub struct WavefrontStore {
    wavefronts: VecDeque<Wavefront>,
    retention: RetentionPolicy,
}

impl WavefrontStore {
    pub fn new(retention: RetentionPolicy) -> Self {
        Self {
            wavefronts: VecDeque::new(),
            retention,
        }
    }

    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }

    /// Append a newly emitted wavefront
    pub fn append(&mut self, wavefront: Wavefront) {
        debug_assert!(
            self.wavefronts
                .back()
                .map_or(true, |last| last.emission_timestamp <= wavefront.emission_timestamp),
            "wavefronts must be appended in emission order"
        );

        self.wavefronts.push_back(wavefront);
        self.evict(wavefront.emission_timestamp);
    }

    /// Drop every wavefront at once
    pub fn clear(&mut self) {
        self.wavefronts.clear();
    }

    pub fn len(&self) -> usize {
        self.wavefronts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavefronts.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Wavefront> + '_ {
        self.wavefronts.iter()
    }

    /// Rings for rendering at `now`, centred on the lane at `lane_y`
    pub fn rings(&self, now: Timestamp, scale: f32, lane_y: f32) -> Vec<WavefrontRing> {
        self.wavefronts
            .iter()
            .map(|wave| WavefrontRing {
                center: Vec2::new(wave.emission_position, lane_y),
                radius: wave.radius_at(now, scale),
            })
            .collect()
    }

    fn evict(&mut self, now: Timestamp) {
        let before = self.wavefronts.len();

        match self.retention {
            RetentionPolicy::Unbounded => {}
            RetentionPolicy::MaxCount(max) => {
                while self.wavefronts.len() > max {
                    self.wavefronts.pop_front();
                }
            }
            RetentionPolicy::TimeToLive(ttl_ms) => {
                while self
                    .wavefronts
                    .front()
                    .is_some_and(|wave| now.millis_since(wave.emission_timestamp) > ttl_ms)
                {
                    self.wavefronts.pop_front();
                }
            }
        }

        let evicted = before - self.wavefronts.len();
        if evicted > 0 {
            log::trace!("Evicted {} wavefront(s) under {:?}", evicted, self.retention);
        }
    }
}
