//! Parametric field generators
//!
//! Pure functions turning wave parameters into point sets. Identical inputs
//! always produce identical outputs, so a scene can regenerate its curves on
//! every frame.

use glam::Vec2;

use crate::constants::{STRIP_WIDTH, TAU};
use crate::shapes::{palette, Color};

/// A sinusoid `y(x) = amplitude · sin(2π·x / wavelength + phase) + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWave {
    pub amplitude: f32,
    pub wavelength: f32,
    pub phase: f32,
    pub offset: f32,
}

impl SineWave {
    pub fn new(amplitude: f32, wavelength: f32) -> Self {
        Self {
            amplitude,
            wavelength,
            phase: 0.0,
            offset: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// The oscillating part, without the offset
    pub fn displacement(&self, x: f32) -> f32 {
        self.amplitude * (TAU * x / self.wavelength + self.phase).sin()
    }

    pub fn sample(&self, x: f32) -> f32 {
        self.displacement(x) + self.offset
    }

    /// Points at every whole pixel over `0..=width`
    pub fn curve(&self, width: f32) -> Vec<Vec2> {
        let last = width.max(0.0).floor() as u32;
        (0..=last)
            .map(|x| {
                let x = x as f32;
                Vec2::new(x, self.sample(x))
            })
            .collect()
    }
}

// ============================================================================
// Transverse / electromagnetic family
// ============================================================================

/// Transverse wave of the properties sandbox, resting on `y = amplitude`
pub fn transverse_curve(amplitude: f32, wavelength: f32) -> Vec<Vec2> {
    SineWave::new(amplitude, wavelength)
        .with_offset(amplitude)
        .curve(STRIP_WIDTH)
}

pub const EM_AMPLITUDE: f32 = 50.0;
pub const EM_WAVELENGTH: f32 = 200.0;
pub const EM_STRIP_HEIGHT: f32 = 200.0;

/// Lowest and highest frequencies of the visible band (THz)
pub const EM_BAND: (f32, f32) = (400.0, 800.0);

/// Electromagnetic wave drawn across a 200 px strip
pub fn em_curve() -> Vec<Vec2> {
    SineWave::new(EM_AMPLITUDE, EM_WAVELENGTH)
        .with_offset(EM_STRIP_HEIGHT / 2.0)
        .curve(STRIP_WIDTH)
}

/// Red at the bottom of the band, blue at the top, linear in between
pub fn spectral_color(frequency_thz: f32) -> Color {
    let (low, high) = EM_BAND;
    let t = (frequency_thz - low) / (high - low);
    palette::lerp(palette::RED, palette::BLUE, t)
}

// ============================================================================
// Longitudinal / mechanical family
// ============================================================================

/// Horizontal spacing between longitudinal markers
pub const MARKER_SPACING: usize = 10;
/// Largest along-axis shift of a marker
pub const COMPRESSION_SCALE: f32 = 25.0;
pub const MARKER_HALF_WIDTH: f32 = 3.0;

/// A compression marker of a longitudinal wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: Vec2,
    pub radii: Vec2,
}

/// Compression in 0..=1 at `x`
pub fn compression(x: f32, wavelength: f32) -> f32 {
    ((TAU * x / wavelength).sin() + 1.0) / 2.0
}

/// Markers every 10 px, each shifted along the axis by its compression
pub fn longitudinal_markers(amplitude: f32, wavelength: f32) -> Vec<Marker> {
    (0..=STRIP_WIDTH as usize)
        .step_by(MARKER_SPACING)
        .map(|x| {
            let x = x as f32;
            let offset = compression(x, wavelength) * COMPRESSION_SCALE;
            Marker {
                center: Vec2::new(x + offset, amplitude),
                radii: Vec2::new(MARKER_HALF_WIDTH, amplitude / 2.0),
            }
        })
        .collect()
}

pub const PARTICLES_PER_DENSITY: f32 = 100.0;
pub const PARTICLE_RADIUS: f32 = 4.0;
pub const MEDIUM_STRIP_HEIGHT: f32 = 200.0;
const MEDIUM_WAVE: SineWave = SineWave {
    amplitude: 20.0,
    wavelength: 100.0,
    phase: 0.0,
    offset: MEDIUM_STRIP_HEIGHT / 2.0,
};

/// Number of medium particles drawn for a density
pub fn particle_count(density: f32) -> usize {
    (PARTICLES_PER_DENSITY * density.max(0.0)).floor() as usize
}

/// Particles of a mechanical medium; denser media get more particles
pub fn medium_particles(density: f32) -> Vec<Vec2> {
    let count = particle_count(density);
    (0..count)
        .map(|i| {
            let x = (i as f32 / count as f32) * STRIP_WIDTH;
            Vec2::new(x, MEDIUM_WAVE.sample(x))
        })
        .collect()
}

// ============================================================================
// Interference
// ============================================================================

/// How the resultant curve of the interference diagram is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultantMode {
    /// Flat line at the resultant baseline
    #[default]
    Illustrative,
    /// Pointwise sum of both component displacements around the baseline
    Superposed,
}

/// Layout of the two-wave interference diagram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterferenceLayout {
    pub width: f32,
    pub amplitude: f32,
    pub wavelength: f32,
    pub phase_shift: f32,
    pub first_baseline: f32,
    pub second_baseline: f32,
    pub resultant_baseline: f32,
}

impl Default for InterferenceLayout {
    fn default() -> Self {
        Self {
            width: 500.0,
            amplitude: 40.0,
            wavelength: 100.0,
            phase_shift: std::f32::consts::PI,
            first_baseline: 130.0,
            second_baseline: 220.0,
            resultant_baseline: 40.0,
        }
    }
}

/// The three curves of the interference diagram
#[derive(Debug, Clone, PartialEq)]
pub struct InterferenceCurves {
    pub first: Vec<Vec2>,
    pub second: Vec<Vec2>,
    pub resultant: Vec<Vec2>,
}

impl InterferenceLayout {
    pub fn first_wave(&self) -> SineWave {
        SineWave::new(self.amplitude, self.wavelength).with_offset(self.first_baseline)
    }

    pub fn second_wave(&self) -> SineWave {
        SineWave::new(self.amplitude, self.wavelength)
            .with_phase(self.phase_shift)
            .with_offset(self.second_baseline)
    }

    pub fn curves(&self, mode: ResultantMode) -> InterferenceCurves {
        let first = self.first_wave();
        let second = self.second_wave();

        let resultant = match mode {
            ResultantMode::Illustrative => {
                let flat = SineWave::new(0.0, self.wavelength).with_offset(self.resultant_baseline);
                flat.curve(self.width)
            }
            ResultantMode::Superposed => {
                let last = self.width.max(0.0).floor() as u32;
                (0..=last)
                    .map(|x| {
                        let x = x as f32;
                        let y = self.resultant_baseline
                            + first.displacement(x)
                            + second.displacement(x);
                        Vec2::new(x, y)
                    })
                    .collect()
            }
        };

        InterferenceCurves {
            first: first.curve(self.width),
            second: second.curve(self.width),
            resultant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_transverse_is_deterministic_to_the_byte() {
        let a = transverse_curve(50.0, 200.0);
        let b = transverse_curve(50.0, 200.0);

        let a_bytes: &[u8] = bytemuck::cast_slice(&a);
        let b_bytes: &[u8] = bytemuck::cast_slice(&b);
        assert_eq!(a_bytes, b_bytes);
    }

    #[test]
    fn test_transverse_samples_every_pixel() {
        let points = transverse_curve(50.0, 200.0);
        assert_eq!(points.len(), 2001);
        assert_eq!(points[0], Vec2::new(0.0, 50.0));
        // Quarter wavelength is the crest
        assert_abs_diff_eq!(points[50].y, 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(points[150].y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_em_curve_centred_on_strip() {
        let points = em_curve();
        assert_eq!(points.len(), 2001);
        assert_abs_diff_eq!(points[0].y, 100.0, epsilon = 1e-4);
        assert_abs_diff_eq!(points[50].y, 150.0, epsilon = 1e-3);
    }

    #[test]
    fn test_spectral_color_band() {
        assert_eq!(spectral_color(400.0), palette::RED);
        assert_eq!(spectral_color(800.0), palette::BLUE);

        let mid = spectral_color(600.0);
        assert_abs_diff_eq!(mid[0], 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(mid[2], 0.5, epsilon = 1e-6);
        assert_eq!(mid[1], 0.0);
    }

    #[test]
    fn test_longitudinal_markers() {
        let markers = longitudinal_markers(50.0, 200.0);
        assert_eq!(markers.len(), 201);

        // x = 0: sin(0) = 0, so compression 0.5
        assert_abs_diff_eq!(markers[0].center.x, 12.5, epsilon = 1e-4);
        assert_eq!(markers[0].center.y, 50.0);
        assert_eq!(markers[0].radii, Vec2::new(3.0, 25.0));

        for (i, marker) in markers.iter().enumerate() {
            let shift = marker.center.x - (i * MARKER_SPACING) as f32;
            assert!((0.0..=COMPRESSION_SCALE).contains(&shift));
        }
    }

    #[test]
    fn test_particle_count_scales_with_density() {
        assert_eq!(particle_count(1.0), 100);
        assert_eq!(particle_count(2.5), 250);
        assert_eq!(particle_count(0.5), 50);

        let particles = medium_particles(0.5);
        assert_eq!(particles.len(), 50);
        assert_abs_diff_eq!(particles[1].x, 40.0, epsilon = 1e-4);
        assert_abs_diff_eq!(particles[0].y, 100.0, epsilon = 1e-4);
    }

    #[test]
    fn test_illustrative_resultant_is_flat() {
        let curves = InterferenceLayout::default().curves(ResultantMode::Illustrative);
        assert_eq!(curves.first.len(), 501);
        assert_eq!(curves.second.len(), 501);
        assert!(curves.resultant.iter().all(|p| p.y == 40.0));
    }

    #[test]
    fn test_opposite_phase_superposition_cancels() {
        let curves = InterferenceLayout::default().curves(ResultantMode::Superposed);
        for p in &curves.resultant {
            assert_abs_diff_eq!(p.y, 40.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_in_phase_superposition_doubles() {
        let layout = InterferenceLayout {
            phase_shift: 0.0,
            ..Default::default()
        };
        let curves = layout.curves(ResultantMode::Superposed);
        assert_abs_diff_eq!(curves.resultant[25].y, 120.0, epsilon = 1e-3);
    }
}
