//! Wave properties sandbox
//!
//! Amplitude and wavelength shape the drawn wave; frequency only feeds the
//! derived readouts:
//!
//! ```text
//! T = 1 / f
//! v = f · λ
//! E = A² / 1000
//! ```

use glam::Vec2;

use super::Scene;
use crate::clock::Timestamp;
use crate::constants::STRIP_WIDTH;
use crate::fields;
use crate::params::{self, ParameterSet, WaveType};
use crate::shapes::{palette, Readout, RenderModel, Shape};

pub const WAVE_LINE_WIDTH: f32 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PropertiesScene {
    pub amplitude: f32,
    pub wavelength: f32,
    pub frequency: f32,
    pub wave_type: WaveType,
}

impl PropertiesScene {
    pub fn new() -> Self {
        Self {
            amplitude: params::AMPLITUDE.default,
            wavelength: params::WAVELENGTH.default,
            frequency: params::FREQUENCY.default,
            wave_type: WaveType::default(),
        }
    }

    pub fn period(&self) -> f32 {
        1.0 / self.frequency
    }

    pub fn wave_speed(&self) -> f32 {
        self.frequency * self.wavelength
    }

    pub fn energy(&self) -> f32 {
        self.amplitude * self.amplitude / 1000.0
    }

    fn shapes(&self) -> Vec<Shape> {
        match self.wave_type {
            WaveType::Transverse => vec![Shape::Polyline {
                points: fields::transverse_curve(self.amplitude, self.wavelength),
                color: palette::CYAN,
                width: WAVE_LINE_WIDTH,
            }],
            WaveType::Longitudinal => fields::longitudinal_markers(self.amplitude, self.wavelength)
                .into_iter()
                .map(|marker| Shape::Ellipse {
                    center: marker.center,
                    radii: marker.radii,
                    color: palette::CYAN,
                })
                .collect(),
        }
    }
}

impl Default for PropertiesScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for PropertiesScene {
    fn name(&self) -> &'static str {
        "Wave Properties"
    }

    fn apply(&mut self, p: &ParameterSet) {
        if let Some(v) = p
            .amplitude
            .and_then(|v| params::clamp_logged("amplitude", &params::AMPLITUDE, v))
        {
            self.amplitude = v;
        }
        if let Some(v) = p
            .wavelength
            .and_then(|v| params::clamp_logged("wavelength", &params::WAVELENGTH, v))
        {
            self.wavelength = v;
        }
        if let Some(v) = p
            .frequency
            .and_then(|v| params::clamp_logged("frequency", &params::FREQUENCY, v))
        {
            self.frequency = v;
        }
        if let Some(wave_type) = p.wave_type {
            self.wave_type = wave_type;
        }
    }

    fn render(&self, _now: Timestamp) -> RenderModel {
        RenderModel {
            extent: Vec2::new(STRIP_WIDTH, 2.0 * self.amplitude),
            source_position: None,
            wavefronts: Vec::new(),
            shapes: self.shapes(),
            readouts: vec![
                Readout::new("Period", self.period(), "s", 2),
                Readout::new("Speed", self.wave_speed(), "px/s", 1),
                Readout::new("Energy", self.energy(), "J", 2),
            ],
        }
    }

    fn parameters(&self) -> ParameterSet {
        ParameterSet::new()
            .amplitude(self.amplitude)
            .wavelength(self.wavelength)
            .frequency(self.frequency)
            .wave_type(self.wave_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_readouts() {
        let scene = PropertiesScene::default();
        assert_relative_eq!(scene.period(), 0.2);
        assert_relative_eq!(scene.wave_speed(), 1000.0);
        assert_relative_eq!(scene.energy(), 2.5);
    }

    #[test]
    fn test_transverse_is_single_polyline() {
        let model = PropertiesScene::default().render(Timestamp::ZERO);
        assert_eq!(model.extent, Vec2::new(2000.0, 100.0));
        assert_eq!(model.shapes.len(), 1);
        match &model.shapes[0] {
            Shape::Polyline { points, width, .. } => {
                assert_eq!(points.len(), 2001);
                assert_eq!(*width, WAVE_LINE_WIDTH);
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_longitudinal_draws_markers() {
        let mut scene = PropertiesScene::default();
        scene.apply(&ParameterSet::new().wave_type(WaveType::Longitudinal).amplitude(30.0));

        let model = scene.render(Timestamp::ZERO);
        assert_eq!(model.extent.y, 60.0);
        assert_eq!(model.shapes.len(), 201);
        assert!(model.shapes.iter().all(|s| matches!(s, Shape::Ellipse { .. })));
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let mut scene = PropertiesScene::default();
        scene.apply(&ParameterSet::new().wavelength(5.0).frequency(9.0).speed(200.0));
        assert_eq!(scene.wavelength, 50.0);
        assert_eq!(scene.frequency, 5.0);
    }
}
