//! End-to-end scenarios for the Doppler visualization, driven by a manual clock.

use approx::assert_relative_eq;
use wave_sim::clock::{Clock, ManualClock, Timestamp};
use wave_sim::config::DopplerConfig;
use wave_sim::mount::Mount;
use wave_sim::params::ParameterSet;
use wave_sim::scenes::{DopplerScene, Scene};

fn doppler_mount(config: DopplerConfig) -> (Mount<DopplerScene, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mount = Mount::new(DopplerScene::new(config), clock.clone(), true);
    (mount, clock)
}

fn tick(mount: &mut Mount<DopplerScene, ManualClock>, clock: &ManualClock, ms: u64) {
    clock.advance(ms);
    assert!(mount.on_refresh(), "a running mount ticks on every refresh");
}

#[test]
fn test_one_second_frames_advance_by_speed() {
    let (mut mount, clock) = doppler_mount(DopplerConfig::reference());

    for frame in 1..=5 {
        tick(&mut mount, &clock, 1000);
        assert_relative_eq!(mount.scene().motion().position(), 10.0 + 95.0 * frame as f32);
    }

    // Every one-second frame is past the 405 ms period
    assert_eq!(mount.scene().wavefronts().len(), 5);
}

#[test]
fn test_emissions_respect_period_at_display_rate() {
    let (mut mount, clock) = doppler_mount(DopplerConfig::reference());

    for _ in 0..625 {
        tick(&mut mount, &clock, 16);
    }

    let stamps: Vec<u64> = mount
        .scene()
        .wavefronts()
        .iter()
        .map(|w| w.emission_timestamp().as_millis())
        .collect();

    assert!(stamps.len() >= 20);
    assert!(stamps[0] > 405);
    for pair in stamps.windows(2) {
        assert!(pair[1] - pair[0] > 405, "emitted too soon: {:?}", pair);
    }

    // Ten seconds at 95 px/s
    assert_relative_eq!(mount.scene().motion().position(), 960.0, epsilon = 0.05);
}

#[test]
fn test_boundary_crossing_at_full_speed() {
    let (mut mount, clock) = doppler_mount(DopplerConfig::reference());
    mount.set_parameters(ParameterSet::new().speed(300.0));

    for _ in 0..52 {
        tick(&mut mount, &clock, 100);
    }
    assert_relative_eq!(mount.scene().motion().position(), 1570.0, epsilon = 1e-3);
    assert!(!mount.scene().wavefronts().is_empty());

    // (1600 - 10) / 300 ≈ 5.3 s
    tick(&mut mount, &clock, 100);
    assert_eq!(clock.now(), Timestamp::from_millis(5300));
    assert_eq!(mount.scene().motion().position(), 10.0);
    assert!(mount.scene().wavefronts().is_empty());

    let frame = mount.render_frame();
    assert!(frame.wavefronts.is_empty());
    assert_eq!(frame.source_position, Some(10.0));
}

#[test]
fn test_stopped_mount_is_frozen() {
    let (mut mount, clock) = doppler_mount(DopplerConfig::reference());
    tick(&mut mount, &clock, 1000);
    tick(&mut mount, &clock, 1000);

    let position = mount.scene().motion().position();
    let emitted: Vec<_> = mount.scene().wavefronts().iter().copied().collect();

    mount.set_running(false);
    for _ in 0..100 {
        clock.advance(250);
        assert!(!mount.on_refresh());
    }

    assert_eq!(mount.scene().motion().position(), position);
    let after: Vec<_> = mount.scene().wavefronts().iter().copied().collect();
    assert_eq!(after, emitted);
}

#[test]
fn test_ring_radius_grows_with_render_time() {
    let (mut mount, clock) = doppler_mount(DopplerConfig::reference());
    tick(&mut mount, &clock, 500);

    let emitted_at = mount
        .scene()
        .wavefronts()
        .iter()
        .next()
        .map(|w| w.emission_timestamp())
        .expect("one wavefront after 500 ms");
    assert_eq!(emitted_at, Timestamp::from_millis(500));

    clock.advance(1200);
    let frame = mount.render_frame();
    assert_relative_eq!(frame.wavefronts[0].radius, 120.0, epsilon = 1e-3);
}

#[test]
fn test_reset_clears_immediately() {
    let (mut mount, clock) = doppler_mount(DopplerConfig::reference());
    tick(&mut mount, &clock, 1000);
    assert!(!mount.scene().wavefronts().is_empty());

    mount.reset();
    assert!(mount.scene().wavefronts().is_empty());
    assert_eq!(mount.scene().motion().position(), 10.0);
}

#[test]
fn test_robust_config_bounds_frame_gaps() {
    let (mut mount, clock) = doppler_mount(DopplerConfig::robust());

    // A 30 s stall advances the source by at most 0.1 s worth of motion
    tick(&mut mount, &clock, 30_000);
    assert_relative_eq!(mount.scene().motion().position(), 19.5, epsilon = 1e-3);
}

#[test]
fn test_mounts_do_not_share_state() {
    let (mut first, first_clock) = doppler_mount(DopplerConfig::reference());
    let (second, _second_clock) = doppler_mount(DopplerConfig::reference());

    tick(&mut first, &first_clock, 1000);
    assert_eq!(first.scene().wavefronts().len(), 1);
    assert!(second.scene().wavefronts().is_empty());
    assert_eq!(second.scene().motion().position(), 10.0);

    first.unmount();
    assert_eq!(second.scene().name(), "Doppler Effect");
}
