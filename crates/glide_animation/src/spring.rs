//! Damped spring physics
//!
//! Springs are integrated with semi-implicit (symplectic) Euler: velocity is
//! updated from the acceleration first, then position from the new velocity.
//! At a fixed 60 Hz step this stays stable for every configuration whose
//! natural frequency is well below the frame rate.

use serde::Deserialize;

/// Displacement below which a spring may come to rest
pub const REST_DISPLACEMENT: f64 = 0.1;

/// Velocity below which a spring may come to rest
pub const REST_VELOCITY: f64 = 1.0;

/// Hard cap on integration steps before a spring is forced to rest
pub const MAX_ITERATIONS: u32 = 600;

/// Spring configuration
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Edge bounce: slightly past critical damping, no visible rebound
    pub const fn bounce() -> Self {
        Self::new(300.0, 35.0, 1.0)
    }

    /// Fast snap with very little travel past the target
    pub const fn stiff() -> Self {
        Self::new(600.0, 50.0, 1.0)
    }

    /// Soft return that may rebound once
    pub const fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Damping ratio (1.0 = critically damped)
    pub fn damping_ratio(&self) -> f64 {
        let critical = 2.0 * (self.stiffness * self.mass).sqrt();
        if critical > 0.0 {
            self.damping / critical
        } else {
            0.0
        }
    }

    /// Replace non-finite or non-positive parameters with the bounce defaults
    pub fn normalized(self) -> Self {
        let fallback = Self::bounce();
        let pick = |value: f64, default: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                default
            }
        };
        Self {
            stiffness: pick(self.stiffness, fallback.stiffness),
            damping: pick(self.damping, fallback.damping),
            mass: pick(self.mass, fallback.mass),
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::bounce()
    }
}

/// A single damped spring pulling `value` toward `target`
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
    iterations: u32,
    settled: bool,
}

impl Spring {
    /// Create a spring resting at `initial`
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config: config.normalized(),
            value: initial,
            velocity: 0.0,
            target: initial,
            iterations: 0,
            settled: true,
        }
    }

    /// Set the initial velocity (units per second)
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self.settled = false;
        self
    }

    /// Move the target. The iteration count carries over, so retargeting
    /// never postpones the cap.
    pub fn set_target(&mut self, target: f64) {
        if target != self.target {
            self.target = target;
            self.settled = false;
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Signed distance from the target
    pub fn displacement(&self) -> f64 {
        self.value - self.target
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance by `dt` seconds. Returns true while the spring is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.settled {
            return false;
        }

        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;

        let displacement = self.value - self.target;
        let accel = (-stiffness * displacement - damping * self.velocity) / mass;
        self.velocity += accel * dt;
        self.value += self.velocity * dt;
        self.iterations += 1;

        let at_rest = (self.value - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_VELOCITY;

        if at_rest || self.iterations >= MAX_ITERATIONS {
            if !at_rest {
                tracing::warn!(
                    "spring forced to rest after {} iterations (displacement {:.3}, velocity {:.3})",
                    self.iterations,
                    self.value - self.target,
                    self.velocity
                );
            }
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
            return false;
        }

        true
    }
}
