//! Time-stepped motion of the wave source
//!
//! The source moves along a single axis at constant speed. Each frame the
//! integrator advances it by `speed × dt`; reaching the far end of the domain
//! sends it back to the start and is reported as a boundary crossing.

/// Position and speed of the moving source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceState {
    /// Position along the lane (pixels)
    pub position: f32,
    /// Speed (pixels per second)
    pub speed: f32,
}

/// Outcome of a single integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionStep {
    /// The source moved and is still inside the domain
    Advanced { position: f32 },
    /// The source reached the boundary and was sent back to the domain start
    BoundaryCrossed,
}

/// Advances the source each frame and detects boundary crossings
#[derive(Debug, Clone)]
pub struct MotionIntegrator {
    state: SourceState,
    domain_min: f32,
    domain_max: f32,
    max_dt: Option<f32>,
}

impl MotionIntegrator {
    pub fn new(domain_min: f32, domain_max: f32, speed: f32) -> Self {
        Self {
            state: SourceState {
                position: domain_min,
                speed,
            },
            domain_min,
            domain_max,
            max_dt: None,
        }
    }

    /// Bound the step length; `None` leaves large frame gaps unclamped
    pub fn with_max_dt(mut self, max_dt: Option<f32>) -> Self {
        self.max_dt = max_dt;
        self
    }

    pub fn state(&self) -> SourceState {
        self.state
    }

    pub fn position(&self) -> f32 {
        self.state.position
    }

    pub fn speed(&self) -> f32 {
        self.state.speed
    }

    pub fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    /// Takes effect on the next step; motion already integrated is untouched
    pub fn set_speed(&mut self, speed: f32) {
        self.state.speed = speed;
    }

    /// Step the source forward by dt seconds
    pub fn step(&mut self, dt: f32) -> MotionStep {
        let dt = self.effective_dt(dt);
        let next = self.state.position + self.state.speed * dt;

        if next >= self.domain_max {
            self.state.position = self.domain_min;
            MotionStep::BoundaryCrossed
        } else {
            self.state.position = next;
            MotionStep::Advanced { position: next }
        }
    }

    /// Send the source back to the domain start
    pub fn restart(&mut self) {
        self.state.position = self.domain_min;
    }

    fn effective_dt(&self, dt: f32) -> f32 {
        // NaN and negative steps (clock skew) become "no motion"
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        match self.max_dt {
            Some(max) => dt.min(max),
            None => dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_advances_by_speed_times_dt() {
        let mut motion = MotionIntegrator::new(10.0, 1600.0, 95.0);

        assert_eq!(motion.step(1.0), MotionStep::Advanced { position: 105.0 });
        assert_eq!(motion.step(1.0), MotionStep::Advanced { position: 200.0 });
        assert_relative_eq!(motion.position(), 200.0);
    }

    #[test]
    fn test_position_never_decreases_before_crossing() {
        let mut motion = MotionIntegrator::new(10.0, 1600.0, 300.0);
        let mut last = motion.position();

        for dt in [0.0, 0.001, 0.016, 0.5, 0.0, 0.033] {
            match motion.step(dt) {
                MotionStep::Advanced { position } => {
                    assert!(position >= last);
                    last = position;
                }
                MotionStep::BoundaryCrossed => panic!("crossed too early"),
            }
        }
    }

    #[test]
    fn test_reaching_boundary_resets_to_start() {
        let mut motion = MotionIntegrator::new(10.0, 1600.0, 300.0);

        assert!(matches!(motion.step(5.0), MotionStep::Advanced { .. }));
        assert_eq!(motion.step(0.3), MotionStep::BoundaryCrossed);
        assert_eq!(motion.position(), 10.0);
    }

    #[test]
    fn test_large_dt_is_unclamped_by_default() {
        let mut motion = MotionIntegrator::new(0.0, 10_000.0, 100.0);
        motion.step(30.0);
        assert_relative_eq!(motion.position(), 3000.0);
    }

    #[test]
    fn test_max_dt_clamps_large_steps() {
        let mut motion = MotionIntegrator::new(0.0, 10_000.0, 100.0).with_max_dt(Some(0.1));
        motion.step(30.0);
        assert_relative_eq!(motion.position(), 10.0);
    }

    #[test]
    fn test_negative_and_nan_dt_do_not_move() {
        let mut motion = MotionIntegrator::new(10.0, 1600.0, 95.0);
        motion.step(-2.0);
        motion.step(f32::NAN);
        assert_eq!(motion.position(), 10.0);
    }

    #[test]
    fn test_speed_change_applies_to_next_step_only() {
        let mut motion = MotionIntegrator::new(10.0, 1600.0, 100.0);
        motion.step(1.0);
        motion.set_speed(200.0);
        assert_eq!(motion.position(), 110.0);

        motion.step(1.0);
        assert_eq!(motion.position(), 310.0);
    }
}
