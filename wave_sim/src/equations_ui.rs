//! Equations sidebar and control panel UI
//!
//! Displays the relevant wave equations and the sliders/tabs that feed
//! parameter updates back into a mount, using egui.

use egui::{Color32, Context, RichText};

use crate::params::{self, Behavior, MediumKind, ParamRange, ParameterSet, WaveType};
use crate::shapes::Readout;

/// An equation with its name and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Draw the equations sidebar
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
) {
    egui::SidePanel::right("equations_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading(RichText::new(title).color(Color32::LIGHT_BLUE));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.collapsing(RichText::new("📐 Equations").strong(), |ui| {
                    for eq in equations {
                        ui.group(|ui| {
                            ui.label(RichText::new(eq.name).strong().color(Color32::YELLOW));
                            ui.label(RichText::new(eq.formula).monospace().color(Color32::WHITE));
                            ui.label(RichText::new(eq.description).small().italics());
                        });
                        ui.add_space(4.0);
                    }
                });

                ui.add_space(8.0);

                ui.collapsing(RichText::new("📖 Variables").strong(), |ui| {
                    egui::Grid::new("variables_grid")
                        .num_columns(2)
                        .spacing([10.0, 4.0])
                        .show(ui, |ui| {
                            for (symbol, meaning) in variables {
                                ui.label(
                                    RichText::new(*symbol)
                                        .monospace()
                                        .color(Color32::LIGHT_GREEN),
                                );
                                ui.label(*meaning);
                                ui.end_row();
                            }
                        });
                });
            });
        });
}

// ============================================================================
// Controls
// ============================================================================

/// A numeric option driven by a slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericParam {
    Speed,
    Amplitude,
    Wavelength,
    Frequency,
    EmFrequency,
    MediumDensity,
}

impl NumericParam {
    pub fn label(&self) -> &'static str {
        match self {
            NumericParam::Speed => "Source speed (px/s)",
            NumericParam::Amplitude => "Amplitude (px)",
            NumericParam::Wavelength => "Wavelength (px)",
            NumericParam::Frequency => "Frequency (Hz)",
            NumericParam::EmFrequency => "Frequency (THz)",
            NumericParam::MediumDensity => "Medium density",
        }
    }

    pub fn range(&self) -> ParamRange {
        match self {
            NumericParam::Speed => params::SPEED,
            NumericParam::Amplitude => params::AMPLITUDE,
            NumericParam::Wavelength => params::WAVELENGTH,
            NumericParam::Frequency => params::FREQUENCY,
            NumericParam::EmFrequency => params::EM_FREQUENCY,
            NumericParam::MediumDensity => params::MEDIUM_DENSITY,
        }
    }

    pub fn get(&self, set: &ParameterSet) -> Option<f32> {
        match self {
            NumericParam::Speed => set.speed,
            NumericParam::Amplitude => set.amplitude,
            NumericParam::Wavelength => set.wavelength,
            NumericParam::Frequency => set.frequency,
            NumericParam::EmFrequency => set.em_frequency,
            NumericParam::MediumDensity => set.medium_density,
        }
    }

    pub fn set(&self, set: ParameterSet, value: f32) -> ParameterSet {
        match self {
            NumericParam::Speed => set.speed(value),
            NumericParam::Amplitude => set.amplitude(value),
            NumericParam::Wavelength => set.wavelength(value),
            NumericParam::Frequency => set.frequency(value),
            NumericParam::EmFrequency => set.em_frequency(value),
            NumericParam::MediumDensity => set.medium_density(value),
        }
    }
}

/// One widget of a control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Slider(NumericParam),
    WaveTypeTabs,
    MediumTabs,
    BehaviorTabs,
    /// Start/stop and reset buttons
    RunButtons,
}

impl Control {
    fn tab_count(&self) -> usize {
        match self {
            Control::WaveTypeTabs => WaveType::ALL.len(),
            Control::MediumTabs => MediumKind::ALL.len(),
            Control::BehaviorTabs => Behavior::ALL.len(),
            _ => 0,
        }
    }

    fn select_tab(&self, index: usize) -> Option<ParameterSet> {
        let set = ParameterSet::new();
        match self {
            Control::WaveTypeTabs => WaveType::ALL.get(index).map(|&t| set.wave_type(t)),
            Control::MediumTabs => MediumKind::ALL.get(index).map(|&m| set.medium(m)),
            Control::BehaviorTabs => Behavior::ALL.get(index).map(|&b| set.behavior(b)),
            _ => None,
        }
    }
}

/// Parameter update selecting the `index`-th tab of the first tab row
pub fn tab_shortcut(controls: &[Control], index: usize) -> Option<ParameterSet> {
    controls
        .iter()
        .find(|control| control.tab_count() > 0)
        .and_then(|control| control.select_tab(index))
}

/// Whether the panel offers start/stop, i.e. the visualization animates
pub fn has_run_buttons(controls: &[Control]) -> bool {
    controls
        .iter()
        .any(|control| matches!(control, Control::RunButtons))
}

/// What the user did in the control panel this frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelResponse {
    pub changes: ParameterSet,
    pub toggle_running: bool,
    pub reset: bool,
}

/// Draw the control panel and collect the user's changes.
///
/// `current` seeds the widgets; only values the user touched end up in
/// [`PanelResponse::changes`].
pub fn draw_control_panel(
    ctx: &Context,
    controls: &[Control],
    current: &ParameterSet,
    running: bool,
) -> PanelResponse {
    let mut response = PanelResponse::default();

    egui::SidePanel::left("controls_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading(RichText::new("Controls").color(Color32::LIGHT_BLUE));
            ui.separator();

            for control in controls {
                match *control {
                    Control::Slider(param) => {
                        let range = param.range();
                        let mut value = param.get(current).unwrap_or(range.default);
                        let slider = egui::Slider::new(&mut value, range.min..=range.max)
                            .step_by(range.step as f64)
                            .text(param.label());
                        if ui.add(slider).changed() {
                            response.changes = param.set(response.changes, value);
                        }
                    }
                    Control::WaveTypeTabs => {
                        let selected = current.wave_type.unwrap_or_default();
                        ui.horizontal(|ui| {
                            for wave_type in WaveType::ALL {
                                let label =
                                    ui.selectable_label(selected == wave_type, wave_type.name());
                                if label.clicked() {
                                    response.changes = response.changes.wave_type(wave_type);
                                }
                            }
                        });
                    }
                    Control::MediumTabs => {
                        let selected = current.medium.unwrap_or_default();
                        ui.horizontal(|ui| {
                            for medium in MediumKind::ALL {
                                let label = ui.selectable_label(selected == medium, medium.name());
                                if label.clicked() {
                                    response.changes = response.changes.medium(medium);
                                }
                            }
                        });
                    }
                    Control::BehaviorTabs => {
                        let selected = current.behavior.unwrap_or_default();
                        ui.horizontal_wrapped(|ui| {
                            for behavior in Behavior::ALL {
                                let label =
                                    ui.selectable_label(selected == behavior, behavior.name());
                                if label.clicked() {
                                    response.changes = response.changes.behavior(behavior);
                                }
                            }
                        });
                    }
                    Control::RunButtons => {
                        ui.horizontal(|ui| {
                            let label = if running { "Stop" } else { "Start" };
                            if ui.button(label).clicked() {
                                response.toggle_running = true;
                            }
                            if ui.button("Reset").clicked() {
                                response.reset = true;
                            }
                        });
                    }
                }
                ui.add_space(6.0);
            }
        });

    response
}

/// Draw the status bar with the scene's numeric readouts
pub fn draw_readouts(ctx: &Context, title: &str, readouts: &[Readout], running: bool) {
    egui::TopBottomPanel::top("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(title).strong());
            for readout in readouts {
                ui.separator();
                ui.label(readout.formatted());
            }
            ui.separator();
            if running {
                ui.label(RichText::new("RUNNING").color(Color32::GREEN));
            } else {
                ui.label(RichText::new("PAUSED").color(Color32::YELLOW));
            }
        });
    });
}

// ============================================================================
// Doppler Effect
// ============================================================================

pub const DOPPLER_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Observed Frequency (approaching)",
        formula: "f' = f · v / (v − vₛ)",
        description: "Wavefronts bunch up ahead of the source",
    },
    Equation {
        name: "Observed Frequency (receding)",
        formula: "f' = f · v / (v + vₛ)",
        description: "Wavefronts spread out behind the source",
    },
    Equation {
        name: "Emission Period",
        formula: "T = max(50, 500 − vₛ) ms",
        description: "Faster sources emit more often",
    },
    Equation {
        name: "Wavefront Radius",
        formula: "r = (t − t₀) / 10",
        description: "Rings grow at a constant rate",
    },
];

pub const DOPPLER_VARIABLES: &[(&str, &str)] = &[
    ("f", "Emitted frequency"),
    ("f'", "Observed frequency"),
    ("v", "Wave speed in the medium"),
    ("vₛ", "Source speed"),
    ("T", "Time between emissions"),
    ("t₀", "Emission time of a wavefront"),
];

pub const DOPPLER_CONTROLS: &[Control] =
    &[Control::Slider(NumericParam::Speed), Control::RunButtons];

// ============================================================================
// Wave Properties
// ============================================================================

pub const PROPERTIES_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Wave Equation",
        formula: "y(x) = A·sin(2πx / λ)",
        description: "Displacement along the wave",
    },
    Equation {
        name: "Wave Speed",
        formula: "v = f·λ",
        description: "Distance travelled per second",
    },
    Equation {
        name: "Period",
        formula: "T = 1 / f",
        description: "Time for one full oscillation",
    },
    Equation {
        name: "Energy",
        formula: "E ∝ A²",
        description: "Energy grows with the square of amplitude",
    },
];

pub const PROPERTIES_VARIABLES: &[(&str, &str)] = &[
    ("A", "Amplitude"),
    ("λ", "Wavelength"),
    ("f", "Frequency"),
    ("T", "Period"),
    ("v", "Wave speed"),
    ("E", "Energy"),
];

pub const PROPERTIES_CONTROLS: &[Control] = &[
    Control::WaveTypeTabs,
    Control::Slider(NumericParam::Amplitude),
    Control::Slider(NumericParam::Wavelength),
    Control::Slider(NumericParam::Frequency),
];

// ============================================================================
// EM vs Mechanical
// ============================================================================

pub const MEDIUM_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Speed of Light",
        formula: "c = f·λ ≈ 3×10⁸ m/s",
        description: "EM waves need no medium",
    },
    Equation {
        name: "Photon Energy",
        formula: "E = h·f",
        description: "Higher frequency, more energetic light",
    },
    Equation {
        name: "Mechanical Wave Speed",
        formula: "v = √(K / ρ)",
        description: "Set by the stiffness and density of the medium",
    },
];

pub const MEDIUM_VARIABLES: &[(&str, &str)] = &[
    ("c", "Speed of light"),
    ("h", "Planck constant"),
    ("f", "Frequency"),
    ("K", "Bulk modulus"),
    ("ρ", "Medium density"),
];

pub const MEDIUM_CONTROLS: &[Control] = &[
    Control::MediumTabs,
    Control::Slider(NumericParam::EmFrequency),
    Control::Slider(NumericParam::MediumDensity),
];

// ============================================================================
// Wave Behaviors
// ============================================================================

pub const BEHAVIOR_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Law of Reflection",
        formula: "θᵢ = θᵣ",
        description: "Angle of incidence equals angle of reflection",
    },
    Equation {
        name: "Snell's Law",
        formula: "n₁·sin θ₁ = n₂·sin θ₂",
        description: "Bending at a boundary between media",
    },
    Equation {
        name: "Superposition",
        formula: "y = y₁ + y₂",
        description: "Overlapping waves add pointwise",
    },
    Equation {
        name: "Single-Slit Minima",
        formula: "a·sin θ = m·λ",
        description: "Spreading after a narrow opening",
    },
];

pub const BEHAVIOR_VARIABLES: &[(&str, &str)] = &[
    ("θᵢ, θᵣ", "Incidence / reflection angle"),
    ("n₁, n₂", "Refractive indices"),
    ("y₁, y₂", "Component displacements"),
    ("a", "Slit width"),
    ("m", "Order of the minimum"),
];

pub const BEHAVIOR_CONTROLS: &[Control] = &[Control::BehaviorTabs];
