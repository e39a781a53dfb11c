//! The four wave visualizations
//!
//! A [`Scene`] owns the simulation state of one visualization. It is driven by
//! a [`crate::mount::Mount`]: an animated scene applies parameters and advances
//! only inside a tick, a static one applies parameters as soon as they arrive.
//! [`Scene::render`] is always a read-only snapshot.

pub mod behaviors;
pub mod doppler;
pub mod medium;
pub mod properties;

pub use behaviors::BehaviorScene;
pub use doppler::DopplerScene;
pub use medium::MediumScene;
pub use properties::PropertiesScene;

use crate::clock::Timestamp;
use crate::params::ParameterSet;
use crate::shapes::RenderModel;

pub trait Scene {
    /// Display name of the visualization
    fn name(&self) -> &'static str;

    /// Whether the scene has per-tick state. Static scenes have nothing to
    /// pause, so their parameters are applied immediately.
    fn is_animated(&self) -> bool {
        false
    }

    /// Called once when the scene is mounted, with the mount instant.
    fn on_mount(&mut self, _now: Timestamp) {}

    /// Apply the options this scene recognizes; the rest are ignored.
    fn apply(&mut self, params: &ParameterSet);

    /// Advance state by `dt_secs` for a tick firing at `now` (may be ignored).
    fn advance(&mut self, _now: Timestamp, _dt_secs: f32) {}

    /// Force the boundary-reset behavior immediately.
    fn reset(&mut self, _now: Timestamp) {}

    /// Snapshot for rendering at `now`. Never mutates state.
    fn render(&self, now: Timestamp) -> RenderModel;

    /// The parameters currently in effect, for seeding a control panel
    fn parameters(&self) -> ParameterSet;
}
