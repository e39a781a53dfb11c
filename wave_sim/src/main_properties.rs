//! Wave Properties Visualization
//!
//! Transverse and longitudinal waves shaped by amplitude and wavelength, with
//! period, speed and energy readouts.
//!
//! Controls:
//! - 1/2: Transverse / longitudinal
//! - Sliders: Amplitude, wavelength, frequency

use wave_sim::equations_ui::{PROPERTIES_CONTROLS, PROPERTIES_EQUATIONS, PROPERTIES_VARIABLES};
use wave_sim::scenes::PropertiesScene;
use wave_sim::viewer::{self, SceneView};

fn main() {
    let view = SceneView {
        title: "Wave Properties",
        equations: PROPERTIES_EQUATIONS,
        variables: PROPERTIES_VARIABLES,
        controls: PROPERTIES_CONTROLS,
    };

    if let Err(e) = viewer::run(view, PropertiesScene::new()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
