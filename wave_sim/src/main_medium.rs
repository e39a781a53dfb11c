//! Electromagnetic vs Mechanical Waves
//!
//! Controls:
//! - 1/2: Electromagnetic / mechanical
//! - Sliders: EM frequency (400 to 800 THz), medium density

use wave_sim::equations_ui::{MEDIUM_CONTROLS, MEDIUM_EQUATIONS, MEDIUM_VARIABLES};
use wave_sim::scenes::MediumScene;
use wave_sim::viewer::{self, SceneView};

fn main() {
    let view = SceneView {
        title: "EM vs Mechanical Waves",
        equations: MEDIUM_EQUATIONS,
        variables: MEDIUM_VARIABLES,
        controls: MEDIUM_CONTROLS,
    };

    if let Err(e) = viewer::run(view, MediumScene::new()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
