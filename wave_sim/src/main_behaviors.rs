//! Wave Behaviors Visualization
//!
//! Controls:
//! - 1: Reflection
//! - 2: Refraction
//! - 3: Interference
//! - 4: Diffraction

use wave_sim::equations_ui::{BEHAVIOR_CONTROLS, BEHAVIOR_EQUATIONS, BEHAVIOR_VARIABLES};
use wave_sim::scenes::BehaviorScene;
use wave_sim::viewer::{self, SceneView};

fn main() {
    let view = SceneView {
        title: "Wave Behaviors",
        equations: BEHAVIOR_EQUATIONS,
        variables: BEHAVIOR_VARIABLES,
        controls: BEHAVIOR_CONTROLS,
    };

    if let Err(e) = viewer::run(view, BehaviorScene::new()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
