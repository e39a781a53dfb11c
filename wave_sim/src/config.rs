//! Doppler simulation configuration
//!
//! All layout constants and timing knobs of the moving-source simulation live
//! here. [`DopplerConfig::reference`] reproduces the reference layout exactly;
//! [`DopplerConfig::robust`] bounds frame jumps and wavefront memory for
//! long-running sessions.

use crate::wavefront::RetentionPolicy;

/// Layout and timing of the Doppler visualization
#[derive(Debug, Clone, PartialEq)]
pub struct DopplerConfig {
    /// Position the source starts from and returns to on a boundary crossing
    pub domain_min: f32,
    /// Reaching this position counts as a boundary crossing
    pub domain_max: f32,
    /// Scene height (pixels)
    pub scene_height: f32,
    /// Vertical position of the source/observer lane
    pub lane_y: f32,
    /// Fixed observer position along the lane
    pub observer_x: f32,
    /// Radius of the source and observer markers
    pub marker_radius: f32,
    /// Emission period at zero speed (ms)
    pub base_period_ms: f32,
    /// Shortest allowed emission period (ms)
    pub min_period_ms: f32,
    /// Ring growth in pixels per millisecond
    pub display_scale: f32,
    /// Upper bound on a single frame step in seconds; `None` leaves dt unclamped
    pub max_dt: Option<f32>,
    /// How long emitted wavefronts are kept between boundary resets
    pub retention: RetentionPolicy,
}

impl DopplerConfig {
    /// The reference layout: 1600 px lane, unclamped dt, unbounded wavefronts
    pub fn reference() -> Self {
        Self {
            domain_min: 10.0,
            domain_max: 1600.0,
            scene_height: 200.0,
            lane_y: 100.0,
            observer_x: 800.0,
            marker_radius: 10.0,
            base_period_ms: 500.0,
            min_period_ms: 50.0,
            display_scale: 0.1,
            max_dt: None,
            retention: RetentionPolicy::Unbounded,
        }
    }

    /// Reference layout with a 0.1 s frame clamp and a bounded wavefront store
    pub fn robust() -> Self {
        Self::reference()
            .with_max_dt(Some(0.1))
            .with_retention(RetentionPolicy::MaxCount(512))
    }

    pub fn with_max_dt(mut self, max_dt: Option<f32>) -> Self {
        self.max_dt = max_dt.filter(|dt| dt.is_finite() && *dt >= 0.0);
        self
    }

    pub fn with_retention(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }

    pub fn with_domain(mut self, min: f32, max: f32) -> Self {
        self.domain_min = min.min(max);
        self.domain_max = max.max(min);
        self
    }

    /// Width of the rendered scene
    pub fn scene_width(&self) -> f32 {
        self.domain_max
    }
}

impl Default for DopplerConfig {
    fn default() -> Self {
        Self::reference()
    }
}
