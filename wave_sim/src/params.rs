//! Wave parameters and their UI-declared ranges
//!
//! A [`ParameterSet`] carries optional updates for any visualization; each
//! scene applies the options it recognizes. Numeric values are clamped to
//! their [`ParamRange`] before use and non-finite values are dropped.

use std::fmt;
use std::str::FromStr;

/// Slider range of a numeric parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32, step: f32, default: f32) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Clamp into the range; `None` for NaN or infinite input
    pub fn clamp(&self, value: f32) -> Option<f32> {
        value.is_finite().then(|| value.clamp(self.min, self.max))
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Source speed of the Doppler scene (px/s)
pub const SPEED: ParamRange = ParamRange::new(25.0, 300.0, 5.0, 95.0);
/// Wave amplitude (px)
pub const AMPLITUDE: ParamRange = ParamRange::new(10.0, 100.0, 1.0, 50.0);
/// Wavelength (px)
pub const WAVELENGTH: ParamRange = ParamRange::new(50.0, 400.0, 1.0, 200.0);
/// Wave frequency (Hz)
pub const FREQUENCY: ParamRange = ParamRange::new(0.5, 5.0, 0.1, 5.0);
/// Electromagnetic frequency (THz)
pub const EM_FREQUENCY: ParamRange = ParamRange::new(400.0, 800.0, 1.0, 500.0);
/// Mechanical medium density
pub const MEDIUM_DENSITY: ParamRange = ParamRange::new(0.5, 5.0, 0.1, 1.0);

/// Clamp `value` into `range`, logging anything that had to be dropped
pub fn clamp_logged(name: &str, range: &ParamRange, value: f32) -> Option<f32> {
    let clamped = range.clamp(value);
    match clamped {
        None => log::warn!("Ignoring non-finite {} ({})", name, value),
        Some(v) if v != value => log::debug!("Clamped {} from {} to {}", name, value, v),
        Some(_) => {}
    }
    clamped
}

/// Error returned when parsing a choice option from its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    UnknownWaveType(String),
    UnknownMedium(String),
    UnknownBehavior(String),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::UnknownWaveType(s) => {
                write!(f, "Unknown wave type '{}', expected transverse or longitudinal", s)
            }
            ParameterError::UnknownMedium(s) => {
                write!(f, "Unknown medium '{}', expected electromagnetic or mechanical", s)
            }
            ParameterError::UnknownBehavior(s) => write!(
                f,
                "Unknown behavior '{}', expected reflection, refraction, interference or diffraction",
                s
            ),
        }
    }
}

impl std::error::Error for ParameterError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WaveType {
    #[default]
    Transverse,
    Longitudinal,
}

impl WaveType {
    pub const ALL: [WaveType; 2] = [WaveType::Transverse, WaveType::Longitudinal];

    pub fn name(&self) -> &'static str {
        match self {
            WaveType::Transverse => "transverse",
            WaveType::Longitudinal => "longitudinal",
        }
    }
}

impl FromStr for WaveType {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transverse" => Ok(WaveType::Transverse),
            "longitudinal" => Ok(WaveType::Longitudinal),
            _ => Err(ParameterError::UnknownWaveType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediumKind {
    #[default]
    Electromagnetic,
    Mechanical,
}

impl MediumKind {
    pub const ALL: [MediumKind; 2] = [MediumKind::Electromagnetic, MediumKind::Mechanical];

    pub fn name(&self) -> &'static str {
        match self {
            MediumKind::Electromagnetic => "electromagnetic",
            MediumKind::Mechanical => "mechanical",
        }
    }
}

impl FromStr for MediumKind {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electromagnetic" => Ok(MediumKind::Electromagnetic),
            "mechanical" => Ok(MediumKind::Mechanical),
            _ => Err(ParameterError::UnknownMedium(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Behavior {
    #[default]
    Reflection,
    Refraction,
    Interference,
    Diffraction,
}

impl Behavior {
    pub const ALL: [Behavior; 4] = [
        Behavior::Reflection,
        Behavior::Refraction,
        Behavior::Interference,
        Behavior::Diffraction,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Behavior::Reflection => "reflection",
            Behavior::Refraction => "refraction",
            Behavior::Interference => "interference",
            Behavior::Diffraction => "diffraction",
        }
    }
}

impl FromStr for Behavior {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reflection" => Ok(Behavior::Reflection),
            "refraction" => Ok(Behavior::Refraction),
            "interference" => Ok(Behavior::Interference),
            "diffraction" => Ok(Behavior::Diffraction),
            _ => Err(ParameterError::UnknownBehavior(s.to_string())),
        }
    }
}

/// Optional parameter updates for a visualization
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterSet {
    pub speed: Option<f32>,
    pub amplitude: Option<f32>,
    pub wavelength: Option<f32>,
    pub frequency: Option<f32>,
    pub wave_type: Option<WaveType>,
    pub em_frequency: Option<f32>,
    pub medium_density: Option<f32>,
    pub medium: Option<MediumKind>,
    pub behavior: Option<Behavior>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = Some(amplitude);
        self
    }

    pub fn wavelength(mut self, wavelength: f32) -> Self {
        self.wavelength = Some(wavelength);
        self
    }

    pub fn frequency(mut self, frequency: f32) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn wave_type(mut self, wave_type: WaveType) -> Self {
        self.wave_type = Some(wave_type);
        self
    }

    pub fn em_frequency(mut self, em_frequency: f32) -> Self {
        self.em_frequency = Some(em_frequency);
        self
    }

    pub fn medium_density(mut self, medium_density: f32) -> Self {
        self.medium_density = Some(medium_density);
        self
    }

    pub fn medium(mut self, medium: MediumKind) -> Self {
        self.medium = Some(medium);
        self
    }

    pub fn behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = Some(behavior);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `newer` on top of `self`; options set in `newer` win
    pub fn merge(self, newer: ParameterSet) -> ParameterSet {
        ParameterSet {
            speed: newer.speed.or(self.speed),
            amplitude: newer.amplitude.or(self.amplitude),
            wavelength: newer.wavelength.or(self.wavelength),
            frequency: newer.frequency.or(self.frequency),
            wave_type: newer.wave_type.or(self.wave_type),
            em_frequency: newer.em_frequency.or(self.em_frequency),
            medium_density: newer.medium_density.or(self.medium_density),
            medium: newer.medium.or(self.medium),
            behavior: newer.behavior.or(self.behavior),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_declared_range() {
        assert_eq!(SPEED.clamp(1000.0), Some(300.0));
        assert_eq!(SPEED.clamp(-5.0), Some(25.0));
        assert_eq!(SPEED.clamp(120.0), Some(120.0));
        assert_eq!(MEDIUM_DENSITY.clamp(0.1), Some(0.5));
    }

    #[test]
    fn test_non_finite_values_are_dropped() {
        assert_eq!(AMPLITUDE.clamp(f32::NAN), None);
        assert_eq!(clamp_logged("amplitude", &AMPLITUDE, f32::INFINITY), None);
    }

    #[test]
    fn test_defaults_lie_inside_ranges() {
        for range in [SPEED, AMPLITUDE, WAVELENGTH, FREQUENCY, EM_FREQUENCY, MEDIUM_DENSITY] {
            assert!(range.contains(range.default));
        }
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!("transverse".parse::<WaveType>(), Ok(WaveType::Transverse));
        assert_eq!(" Longitudinal ".parse::<WaveType>(), Ok(WaveType::Longitudinal));
        assert_eq!("mechanical".parse::<MediumKind>(), Ok(MediumKind::Mechanical));
        assert_eq!("diffraction".parse::<Behavior>(), Ok(Behavior::Diffraction));

        let err = "sideways".parse::<WaveType>().unwrap_err();
        assert_eq!(err, ParameterError::UnknownWaveType("sideways".into()));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_names_round_trip() {
        for behavior in Behavior::ALL {
            assert_eq!(behavior.name().parse::<Behavior>(), Ok(behavior));
        }
    }

    #[test]
    fn test_merge_prefers_newer() {
        let older = ParameterSet::new().speed(100.0).amplitude(20.0);
        let newer = ParameterSet::new().speed(150.0);

        let merged = older.merge(newer);
        assert_eq!(merged.speed, Some(150.0));
        assert_eq!(merged.amplitude, Some(20.0));
        assert!(ParameterSet::new().is_empty());
        assert!(!merged.is_empty());
    }
}
