//! Wave Visualizations
//!
//! Interactive visualizations of wave phenomena built on a small real-time
//! simulation core:
//!
//! - **Doppler Effect**: a moving source emitting wavefronts whose spacing
//!   compresses ahead of the source as its speed grows
//! - **Wave Properties**: transverse and longitudinal waves driven by amplitude,
//!   wavelength and frequency
//! - **EM vs Mechanical**: a frequency-coloured electromagnetic wave next to
//!   particles of a mechanical medium
//! - **Wave Behaviors**: reflection, refraction, interference and diffraction
//!   diagrams
//!
//! Each visualization is a [`scenes::Scene`] owned by a [`mount::Mount`], which
//! sequences parameter commits, motion integration and wavefront emission once
//! per display refresh through an [`driver::AnimationDriver`].

pub mod clock;
pub mod config;
pub mod motion;
pub mod emission;
pub mod wavefront;
pub mod fields;
pub mod diagrams;
pub mod params;
pub mod shapes;
pub mod driver;
pub mod scenes;
pub mod mount;
pub mod renderer;
pub mod equations_ui;
pub mod viewer;

/// Constants shared by the reference layouts
pub mod constants {
    /// Sampled width of the wave strips (pixels)
    pub const STRIP_WIDTH: f32 = 2000.0;

    /// Full turn, used by every sinusoid
    pub const TAU: f32 = std::f32::consts::TAU;

    /// Milliseconds per second
    pub const MS_PER_SEC: f32 = 1000.0;
}
