//! Per-visualization mount
//!
//! A [`Mount`] is the explicit context of one mounted visualization: it owns
//! the scene, the animation driver, the clock and any parameter updates still
//! waiting for the next tick. Ticking happens only through
//! [`Mount::on_refresh`], so a dropped mount can never be ticked again.

use crate::clock::Clock;
use crate::driver::{AnimationDriver, TickSource};
use crate::params::ParameterSet;
use crate::scenes::Scene;
use crate::shapes::RenderModel;

pub struct Mount<S: Scene, C: Clock> {
    scene: S,
    clock: C,
    driver: AnimationDriver,
    pending: ParameterSet,
}

impl<S: Scene, C: Clock> Mount<S, C> {
    /// Mount `scene`, ticking on every display refresh while running
    pub fn new(scene: S, clock: C, running: bool) -> Self {
        Self::with_tick_source(scene, clock, TickSource::DisplayRefresh, running)
    }

    pub fn with_tick_source(mut scene: S, clock: C, source: TickSource, running: bool) -> Self {
        let now = clock.now();
        scene.on_mount(now);
        log::info!("Mounted {} at {} ms", scene.name(), now.as_millis());

        let mut driver = AnimationDriver::new(source);
        if running {
            driver.start(now);
        }

        Self {
            scene,
            clock,
            driver,
            pending: ParameterSet::default(),
        }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Queue parameter updates for the next tick. Static scenes take them
    /// immediately, whether or not the mount is running.
    pub fn set_parameters(&mut self, params: ParameterSet) {
        if params.is_empty() {
            return;
        }
        if self.scene.is_animated() {
            self.pending = self.pending.merge(params);
        } else {
            log::debug!("Applying parameters to {}: {:?}", self.scene.name(), params);
            self.scene.apply(&params);
        }
    }

    /// Start or stop ticking. Repeating the current state is a no-op.
    pub fn set_running(&mut self, running: bool) {
        let changed = if running {
            self.driver.start(self.clock.now())
        } else {
            self.driver.stop()
        };

        if changed {
            log::info!(
                "{} {}",
                self.scene.name(),
                if running { "started" } else { "stopped" }
            );
        }
    }

    /// Run one tick if the driver has one due. Returns whether a tick ran.
    ///
    /// Order within a tick: pending parameters, then the scene update, then
    /// the request for the next tick.
    pub fn on_refresh(&mut self) -> bool {
        let Some(tick) = self.driver.poll(self.clock.now()) else {
            return false;
        };

        let pending = std::mem::take(&mut self.pending);
        if !pending.is_empty() {
            log::debug!("Committing parameters to {}: {:?}", self.scene.name(), pending);
            self.scene.apply(&pending);
        }

        self.scene.advance(tick.now, tick.dt_secs);
        self.driver.reschedule(tick.now);
        true
    }

    /// Read-only snapshot for the current instant
    pub fn render_frame(&self) -> RenderModel {
        self.scene.render(self.clock.now())
    }

    /// Force the boundary reset immediately
    pub fn reset(&mut self) {
        log::debug!("Resetting {}", self.scene.name());
        self.scene.reset(self.clock.now());
    }

    /// Parameters in effect, with queued updates layered on top
    pub fn parameters(&self) -> ParameterSet {
        self.scene.parameters().merge(self.pending)
    }

    /// Tear the visualization down, cancelling any pending tick
    pub fn unmount(self) {}
}

impl<S: Scene, C: Clock> Drop for Mount<S, C> {
    fn drop(&mut self) {
        self.driver.cancel();
        log::info!("Unmounted {}", self.scene.name());
    }
}
