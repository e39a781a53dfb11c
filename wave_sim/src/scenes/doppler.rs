//! Doppler effect: a moving source leaving expanding wavefronts behind it
//!
//! Each tick the source moves by `speed × dt`. Reaching the far end of the
//! lane clears every wavefront and sends the source back to the start in the
//! same update; otherwise the emission scheduler may drop a new wavefront at
//! the source's new position.

use glam::Vec2;

use super::Scene;
use crate::clock::Timestamp;
use crate::config::DopplerConfig;
use crate::emission::{EmissionScheduler, EmissionTiming};
use crate::motion::{MotionIntegrator, MotionStep};
use crate::params::{self, ParameterSet};
use crate::shapes::{palette, Readout, RenderModel, Shape};
use crate::wavefront::WavefrontStore;

pub struct DopplerScene {
    config: DopplerConfig,
    motion: MotionIntegrator,
    emitter: EmissionScheduler,
    wavefronts: WavefrontStore,
}

impl DopplerScene {
    pub fn new(config: DopplerConfig) -> Self {
        let motion =
            MotionIntegrator::new(config.domain_min, config.domain_max, params::SPEED.default)
                .with_max_dt(config.max_dt);
        let timing = EmissionTiming::new(config.base_period_ms, config.min_period_ms);
        let wavefronts = WavefrontStore::new(config.retention);

        Self {
            config,
            motion,
            emitter: EmissionScheduler::new(timing, Timestamp::ZERO),
            wavefronts,
        }
    }

    pub fn config(&self) -> &DopplerConfig {
        &self.config
    }

    pub fn motion(&self) -> &MotionIntegrator {
        &self.motion
    }

    pub fn emitter(&self) -> &EmissionScheduler {
        &self.emitter
    }

    pub fn wavefronts(&self) -> &WavefrontStore {
        &self.wavefronts
    }

    fn clear_for_restart(&mut self) {
        self.motion.restart();
        self.wavefronts.clear();
    }
}

impl Default for DopplerScene {
    fn default() -> Self {
        Self::new(DopplerConfig::default())
    }
}

impl Scene for DopplerScene {
    fn name(&self) -> &'static str {
        "Doppler Effect"
    }

    fn is_animated(&self) -> bool {
        true
    }

    fn on_mount(&mut self, now: Timestamp) {
        // First wavefront leaves one full period after mounting
        self.emitter = EmissionScheduler::new(self.emitter.timing(), now);
    }

    fn apply(&mut self, params: &ParameterSet) {
        if let Some(speed) = params
            .speed
            .and_then(|speed| params::clamp_logged("speed", &params::SPEED, speed))
        {
            self.motion.set_speed(speed);
        }
    }

    fn advance(&mut self, now: Timestamp, dt_secs: f32) {
        match self.motion.step(dt_secs) {
            MotionStep::BoundaryCrossed => {
                log::debug!(
                    "Source reached x={}, cleared {} wavefront(s)",
                    self.config.domain_max,
                    self.wavefronts.len()
                );
                self.wavefronts.clear();
            }
            MotionStep::Advanced { position } => {
                if let Some(wavefront) = self.emitter.poll(now, self.motion.speed(), position) {
                    self.wavefronts.append(wavefront);
                }
            }
        }
    }

    fn reset(&mut self, _now: Timestamp) {
        log::debug!("Doppler reset with {} wavefront(s)", self.wavefronts.len());
        self.clear_for_restart();
    }

    fn render(&self, now: Timestamp) -> RenderModel {
        let config = &self.config;
        let position = self.motion.position();
        let speed = self.motion.speed();

        let shapes = vec![
            Shape::Disc {
                center: Vec2::new(position, config.lane_y),
                radius: config.marker_radius,
                color: palette::CYAN,
            },
            Shape::Disc {
                center: Vec2::new(config.observer_x, config.lane_y),
                radius: config.marker_radius,
                color: palette::YELLOW,
            },
        ];

        let readouts = vec![
            Readout::new("Source speed", speed, "px/s", 0),
            Readout::new("Emission period", self.emitter.timing().period_ms(speed), "ms", 0),
            Readout::new("Wavefronts", self.wavefronts.len() as f32, "", 0),
        ];

        RenderModel {
            extent: Vec2::new(config.scene_width(), config.scene_height),
            source_position: Some(position),
            wavefronts: self
                .wavefronts
                .rings(now, config.display_scale, config.lane_y),
            shapes,
            readouts,
        }
    }

    fn parameters(&self) -> ParameterSet {
        ParameterSet::new().speed(self.motion.speed())
    }
}
