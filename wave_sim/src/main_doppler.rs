//! Doppler Effect Visualization
//!
//! A source moving along a lane emits wavefronts that expand as rings. Ahead
//! of the source the rings bunch up; behind it they spread out.
//!
//! Controls:
//! - Space: Start/stop
//! - R: Reset the source and clear wavefronts
//! - Slider: Source speed (25 to 300 px/s)

use wave_sim::config::DopplerConfig;
use wave_sim::equations_ui::{DOPPLER_CONTROLS, DOPPLER_EQUATIONS, DOPPLER_VARIABLES};
use wave_sim::scenes::DopplerScene;
use wave_sim::viewer::{self, SceneView};

fn main() {
    let view = SceneView {
        title: "Doppler Effect: Moving Source and Observer",
        equations: DOPPLER_EQUATIONS,
        variables: DOPPLER_VARIABLES,
        controls: DOPPLER_CONTROLS,
    };

    if let Err(e) = viewer::run(view, DopplerScene::new(DopplerConfig::reference())) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
