//! Wave behaviors: reflection, refraction, interference and diffraction
//!
//! All four are fixed diagrams; the selected behavior only decides which one
//! is drawn.

use glam::Vec2;

use super::Scene;
use crate::clock::Timestamp;
use crate::diagrams::{DiffractionDiagram, Ray, RayDiagram, BOUNDARY_DASH};
use crate::fields::{InterferenceLayout, ResultantMode};
use crate::params::{Behavior, ParameterSet};
use crate::shapes::{palette, Readout, RenderModel, Shape};

const SURFACE_WIDTH: f32 = 2.0;
const RAY_WIDTH: f32 = 3.0;
const CURVE_WIDTH: f32 = 2.0;
const INTERFERENCE_HEIGHT: f32 = 300.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorScene {
    pub behavior: Behavior,
    pub resultant_mode: ResultantMode,
    interference: InterferenceLayout,
    diffraction: DiffractionDiagram,
}

impl BehaviorScene {
    pub fn new() -> Self {
        Self {
            behavior: Behavior::default(),
            resultant_mode: ResultantMode::default(),
            interference: InterferenceLayout::default(),
            diffraction: DiffractionDiagram::reference(),
        }
    }

    pub fn with_resultant_mode(mut self, mode: ResultantMode) -> Self {
        self.resultant_mode = mode;
        self
    }

    pub fn with_interference(mut self, layout: InterferenceLayout) -> Self {
        self.interference = layout;
        self
    }

    fn ray_shapes(diagram: &RayDiagram, dash: Option<(f32, f32)>) -> Vec<Shape> {
        let surface = diagram.surface();
        let ray = |r: Ray, color| Shape::Segment {
            from: r.from,
            to: r.to,
            color,
            width: RAY_WIDTH,
            dash: None,
        };

        vec![
            Shape::Segment {
                from: surface.from,
                to: surface.to,
                color: palette::WHITE,
                width: SURFACE_WIDTH,
                dash,
            },
            ray(diagram.incident, palette::CYAN),
            ray(diagram.outgoing, palette::YELLOW),
        ]
    }

    fn render_reflection(&self) -> RenderModel {
        let diagram = RayDiagram::REFLECTION;
        RenderModel {
            extent: diagram.extent,
            shapes: Self::ray_shapes(&diagram, None),
            readouts: vec![
                Readout::new("Incidence", diagram.incidence_angle().to_degrees(), "°", 1),
                Readout::new("Reflection", diagram.outgoing_angle().to_degrees(), "°", 1),
            ],
            ..Default::default()
        }
    }

    fn render_refraction(&self) -> RenderModel {
        let diagram = RayDiagram::REFRACTION;
        RenderModel {
            extent: diagram.extent,
            shapes: Self::ray_shapes(&diagram, Some(BOUNDARY_DASH)),
            readouts: vec![
                Readout::new("Incidence", diagram.incidence_angle().to_degrees(), "°", 1),
                Readout::new("Refraction", diagram.outgoing_angle().to_degrees(), "°", 1),
                Readout::new("n₂/n₁", diagram.index_ratio(), "", 2),
            ],
            ..Default::default()
        }
    }

    fn render_interference(&self) -> RenderModel {
        let layout = &self.interference;
        let curves = layout.curves(self.resultant_mode);
        let polyline = |points, color| Shape::Polyline {
            points,
            color,
            width: CURVE_WIDTH,
        };

        RenderModel {
            extent: Vec2::new(layout.width, INTERFERENCE_HEIGHT),
            shapes: vec![
                polyline(curves.resultant, palette::YELLOW),
                polyline(curves.first, palette::CYAN),
                polyline(curves.second, palette::CYAN),
            ],
            readouts: vec![Readout::new(
                "Phase shift",
                layout.phase_shift.to_degrees(),
                "°",
                0,
            )],
            ..Default::default()
        }
    }

    fn render_diffraction(&self) -> RenderModel {
        let diagram = &self.diffraction;
        let half_turn = std::f32::consts::FRAC_PI_2;

        let walls = diagram.walls.iter().map(|&(min, size)| Shape::Rect {
            min,
            size,
            color: palette::WHITE,
        });
        let arcs = diagram.arc_radii.iter().map(|&radius| Shape::Arc {
            center: diagram.arc_center,
            radius,
            start_angle: -half_turn,
            end_angle: half_turn,
            color: palette::YELLOW,
            width: CURVE_WIDTH,
        });
        let plane_waves = diagram.plane_waves.iter().map(|ray| Shape::Segment {
            from: ray.from,
            to: ray.to,
            color: palette::CYAN,
            width: CURVE_WIDTH,
            dash: None,
        });

        RenderModel {
            extent: diagram.extent,
            shapes: walls.chain(arcs).chain(plane_waves).collect(),
            readouts: vec![Readout::new("Slit width", diagram.slit_width(), "px", 0)],
            ..Default::default()
        }
    }
}

impl Default for BehaviorScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for BehaviorScene {
    fn name(&self) -> &'static str {
        "Wave Behaviors"
    }

    fn apply(&mut self, params: &ParameterSet) {
        if let Some(behavior) = params.behavior {
            self.behavior = behavior;
        }
    }

    fn render(&self, _now: Timestamp) -> RenderModel {
        match self.behavior {
            Behavior::Reflection => self.render_reflection(),
            Behavior::Refraction => self.render_refraction(),
            Behavior::Interference => self.render_interference(),
            Behavior::Diffraction => self.render_diffraction(),
        }
    }

    fn parameters(&self) -> ParameterSet {
        ParameterSet::new().behavior(self.behavior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(behavior: Behavior) -> RenderModel {
        let mut scene = BehaviorScene::default();
        scene.apply(&ParameterSet::new().behavior(behavior));
        scene.render(Timestamp::ZERO)
    }

    #[test]
    fn test_reflection_diagram() {
        let model = render(Behavior::Reflection);
        assert_eq!(model.extent, Vec2::new(400.0, 300.0));
        assert_eq!(model.shapes.len(), 3);
        assert!(matches!(&model.shapes[0], Shape::Segment { dash: None, .. }));
    }

    #[test]
    fn test_refraction_boundary_is_dashed() {
        let model = render(Behavior::Refraction);
        assert!(matches!(
            &model.shapes[0],
            Shape::Segment { dash: Some(dash), .. } if *dash == BOUNDARY_DASH
        ));
        assert_eq!(model.readouts.len(), 3);
    }

    #[test]
    fn test_interference_draws_three_curves() {
        let model = render(Behavior::Interference);
        assert_eq!(model.extent, Vec2::new(500.0, 300.0));
        assert_eq!(model.shapes.len(), 3);
        match &model.shapes[0] {
            Shape::Polyline { points, color, .. } => {
                assert_eq!(*color, palette::YELLOW);
                assert!(points.iter().all(|p| p.y == 40.0));
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    fn resultant(scene: &BehaviorScene) -> Vec<Vec2> {
        match &scene.render(Timestamp::ZERO).shapes[0] {
            Shape::Polyline { points, .. } => points.clone(),
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_superposed_resultant_for_opposite_phases_is_flat() {
        let mut scene = BehaviorScene::new().with_resultant_mode(ResultantMode::Superposed);
        scene.apply(&ParameterSet::new().behavior(Behavior::Interference));

        let points = resultant(&scene);
        assert_eq!(points.len(), 501);
        assert!(points.iter().all(|p| (p.y - 40.0).abs() < 1e-3));
    }

    #[test]
    fn test_superposed_resultant_follows_phase_shift() {
        let in_phase = InterferenceLayout {
            phase_shift: 0.0,
            ..Default::default()
        };
        let mut superposed = BehaviorScene::new()
            .with_interference(in_phase)
            .with_resultant_mode(ResultantMode::Superposed);
        superposed.apply(&ParameterSet::new().behavior(Behavior::Interference));
        let mut illustrative = BehaviorScene::new().with_interference(in_phase);
        illustrative.apply(&ParameterSet::new().behavior(Behavior::Interference));

        // A quarter wavelength in, both crests add up
        assert!((resultant(&superposed)[25].y - 120.0).abs() < 1e-3);
        assert_eq!(resultant(&illustrative)[25].y, 40.0);
    }

    #[test]
    fn test_diffraction_shapes() {
        let model = render(Behavior::Diffraction);
        let rects = model.shapes.iter().filter(|s| matches!(s, Shape::Rect { .. })).count();
        let arcs = model.shapes.iter().filter(|s| matches!(s, Shape::Arc { .. })).count();
        let lines = model.shapes.iter().filter(|s| matches!(s, Shape::Segment { .. })).count();
        assert_eq!((rects, arcs, lines), (2, 5, 9));
    }

    #[test]
    fn test_unrelated_options_are_ignored() {
        let mut scene = BehaviorScene::default();
        scene.apply(&ParameterSet::new().speed(120.0).amplitude(30.0));
        assert_eq!(scene.behavior, Behavior::Reflection);
    }
}
