//! Electromagnetic vs. mechanical waves
//!
//! The electromagnetic wave needs no medium and is colored by its frequency
//! across the visible band. The mechanical wave is carried by particles whose
//! count grows with the medium density.

use glam::Vec2;

use super::Scene;
use crate::clock::Timestamp;
use crate::constants::STRIP_WIDTH;
use crate::fields;
use crate::params::{self, MediumKind, ParameterSet};
use crate::shapes::{palette, Readout, RenderModel, Shape};

const EM_LINE_WIDTH: f32 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MediumScene {
    pub medium: MediumKind,
    pub em_frequency: f32,
    pub density: f32,
}

impl MediumScene {
    pub fn new() -> Self {
        Self {
            medium: MediumKind::default(),
            em_frequency: params::EM_FREQUENCY.default,
            density: params::MEDIUM_DENSITY.default,
        }
    }
}

impl Default for MediumScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for MediumScene {
    fn name(&self) -> &'static str {
        "EM vs Mechanical Waves"
    }

    fn apply(&mut self, p: &ParameterSet) {
        if let Some(medium) = p.medium {
            self.medium = medium;
        }
        if let Some(v) = p
            .em_frequency
            .and_then(|v| params::clamp_logged("em_frequency", &params::EM_FREQUENCY, v))
        {
            self.em_frequency = v;
        }
        if let Some(v) = p
            .medium_density
            .and_then(|v| params::clamp_logged("medium_density", &params::MEDIUM_DENSITY, v))
        {
            self.density = v;
        }
    }

    fn render(&self, _now: Timestamp) -> RenderModel {
        let (shapes, readouts) = match self.medium {
            MediumKind::Electromagnetic => (
                vec![Shape::Polyline {
                    points: fields::em_curve(),
                    color: fields::spectral_color(self.em_frequency),
                    width: EM_LINE_WIDTH,
                }],
                vec![Readout::new("Frequency", self.em_frequency, "THz", 0)],
            ),
            MediumKind::Mechanical => (
                fields::medium_particles(self.density)
                    .into_iter()
                    .map(|center| Shape::Disc {
                        center,
                        radius: fields::PARTICLE_RADIUS,
                        color: palette::CYAN,
                    })
                    .collect(),
                vec![
                    Readout::new("Density", self.density, "", 1),
                    Readout::new("Particles", fields::particle_count(self.density) as f32, "", 0),
                ],
            ),
        };

        RenderModel {
            extent: Vec2::new(STRIP_WIDTH, fields::MEDIUM_STRIP_HEIGHT),
            source_position: None,
            wavefronts: Vec::new(),
            shapes,
            readouts,
        }
    }

    fn parameters(&self) -> ParameterSet {
        ParameterSet::new()
            .medium(self.medium)
            .em_frequency(self.em_frequency)
            .medium_density(self.density)
    }
}
