//! Spring bounce back to the nearest bound
//!
//! Entered either when a pull is released or when a throw runs into a bound.
//! The axis then follows a damped spring anchored at the bound:
//!
//! ```text
//! accel = -k·displacement - c·velocity
//! ```
//!
//! and is snapped exactly onto the bound once it comes to rest (or when the
//! spring's iteration cap is reached).

use glide_animation::{Spring, SpringConfig};

/// Per-axis bounce state
#[derive(Debug, Clone)]
pub struct AxisBounce {
    spring: Spring,
}

impl AxisBounce {
    /// Bound the axis is returning to
    pub fn bound(&self) -> f64 {
        self.spring.target()
    }

    /// Signed distance from the bound
    pub fn displacement(&self) -> f64 {
        self.spring.displacement()
    }

    pub fn velocity(&self) -> f64 {
        self.spring.velocity()
    }

    /// Move the anchor, e.g. when the content size changes mid-bounce
    pub fn retarget(&mut self, bound: f64) {
        self.spring.set_target(bound);
    }
}

/// Outcome of one bounce tick on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceStep {
    Moving,
    /// At rest; the offset now equals the bound exactly
    Settled,
}

/// Spring integrator shared by both axes
#[derive(Debug, Clone, Copy)]
pub struct BounceSimulator {
    config: SpringConfig,
}

impl BounceSimulator {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Start a bounce from `offset` moving at `velocity`, returning to `bound`
    pub fn begin(&self, bound: f64, offset: f64, velocity: f64) -> AxisBounce {
        tracing::debug!(
            "bounce toward {:.1}: displacement {:.2}, velocity {:.1}",
            bound,
            offset - bound,
            velocity
        );
        let mut spring = Spring::new(self.config, offset).with_velocity(velocity);
        spring.set_target(bound);
        AxisBounce { spring }
    }

    /// Advance one axis by `dt` seconds and write the result into `offset`
    pub fn step(&self, bounce: &mut AxisBounce, offset: &mut f64, dt: f64) -> BounceStep {
        let moving = bounce.spring.step(dt);
        *offset = bounce.spring.value();

        if moving {
            BounceStep::Moving
        } else {
            *offset = bounce.bound();
            BounceStep::Settled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_animation::spring::MAX_ITERATIONS;

    const DT: f64 = 1.0 / 60.0;

    fn run(sim: &BounceSimulator, bounce: &mut AxisBounce, offset: &mut f64) -> u32 {
        let mut ticks = 0;
        while sim.step(bounce, offset, DT) == BounceStep::Moving {
            ticks += 1;
            assert!(ticks <= MAX_ITERATIONS);
        }
        ticks
    }

    #[test]
    fn test_bounce_from_pull_converges_exactly() {
        let sim = BounceSimulator::new(SpringConfig::bounce());
        let mut offset = -26.1;
        let mut bounce = sim.begin(0.0, offset, 0.0);

        let ticks = run(&sim, &mut bounce, &mut offset);
        assert_eq!(offset, 0.0);
        assert!(ticks < 120, "took {ticks} ticks");
    }

    #[test]
    fn test_bounce_from_throw_overshoots_then_returns() {
        let sim = BounceSimulator::new(SpringConfig::bounce());
        let mut offset = 500.0;
        let mut bounce = sim.begin(500.0, offset, 1500.0);

        let mut peak = offset;
        while sim.step(&mut bounce, &mut offset, DT) == BounceStep::Moving {
            peak = peak.max(offset);
        }
        assert!(peak > 510.0);
        assert_eq!(offset, 500.0);
    }

    #[test]
    fn test_underdamped_still_settles_within_cap() {
        let sim = BounceSimulator::new(SpringConfig::new(200.0, 2.0, 1.0));
        let mut offset = 80.0;
        let mut bounce = sim.begin(0.0, offset, 0.0);

        run(&sim, &mut bounce, &mut offset);
        assert_eq!(offset, 0.0);
        assert_eq!(bounce.displacement(), 0.0);
    }
}
