//! Parameter flow from a mount into the static visualizations.

use approx::assert_relative_eq;
use wave_sim::clock::ManualClock;
use wave_sim::mount::Mount;
use wave_sim::params::{Behavior, MediumKind, ParameterSet, WaveType};
use wave_sim::scenes::{BehaviorScene, MediumScene, PropertiesScene};
use wave_sim::shapes::Shape;

#[test]
fn test_properties_readouts_follow_parameters() {
    let clock = ManualClock::new();
    let mut mount = Mount::new(PropertiesScene::new(), clock, true);

    assert_relative_eq!(mount.render_frame().readouts[0].value, 0.2);

    mount.set_parameters(ParameterSet::new().frequency(2.0).wavelength(100.0));
    mount.set_parameters(ParameterSet::new().amplitude(20.0));

    // Static scenes show the change without waiting for a tick
    let frame = mount.render_frame();
    assert_relative_eq!(frame.readouts[0].value, 0.5);
    assert_relative_eq!(frame.readouts[1].value, 200.0);
    assert_relative_eq!(frame.readouts[2].value, 0.4);
    assert_eq!(frame.extent.y, 40.0);
}

#[test]
fn test_paused_medium_scene_still_switches() {
    let clock = ManualClock::new();
    let mut mount = Mount::new(MediumScene::new(), clock.clone(), true);
    mount.set_running(false);

    mount.set_parameters(ParameterSet::new().medium(MediumKind::Mechanical));
    clock.advance(16);
    assert!(!mount.on_refresh());

    assert_eq!(mount.scene().medium, MediumKind::Mechanical);
    assert!(mount
        .render_frame()
        .shapes
        .iter()
        .all(|shape| matches!(shape, Shape::Disc { .. })));
}

#[test]
fn test_switching_wave_type_changes_shapes() {
    let clock = ManualClock::new();
    let mut mount = Mount::new(PropertiesScene::new(), clock.clone(), true);

    let wave_type: WaveType = "longitudinal".parse().expect("known wave type");
    mount.set_parameters(ParameterSet::new().wave_type(wave_type));
    clock.advance(16);
    mount.on_refresh();

    assert!(mount
        .render_frame()
        .shapes
        .iter()
        .all(|shape| matches!(shape, Shape::Ellipse { .. })));
}

#[test]
fn test_medium_switch_and_density() {
    let clock = ManualClock::new();
    let mut mount = Mount::new(MediumScene::new(), clock.clone(), true);

    mount.set_parameters(ParameterSet::new().medium(MediumKind::Mechanical).medium_density(0.5));
    clock.advance(16);
    mount.on_refresh();

    let frame = mount.render_frame();
    assert_eq!(frame.shapes.len(), 50);
    assert!(frame.shapes.iter().all(|shape| matches!(shape, Shape::Disc { .. })));
}

#[test]
fn test_behavior_tabs() {
    let clock = ManualClock::new();
    let mut mount = Mount::new(BehaviorScene::new(), clock.clone(), true);

    for (behavior, extent_x) in [
        (Behavior::Reflection, 400.0),
        (Behavior::Refraction, 400.0),
        (Behavior::Interference, 500.0),
        (Behavior::Diffraction, 400.0),
    ] {
        mount.set_parameters(ParameterSet::new().behavior(behavior));
        clock.advance(16);
        mount.on_refresh();
        assert_eq!(mount.scene().behavior, behavior);
        assert_eq!(mount.render_frame().extent.x, extent_x);
    }
}
