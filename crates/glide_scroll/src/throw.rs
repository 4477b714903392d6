//! Momentum ("throw") after a drag release
//!
//! The release velocity comes from the last drag sample only, which matches
//! what the user's hand was doing at the moment of release better than an
//! average over the whole gesture. Each tick then does
//!
//! ```text
//! offset += v·dt
//! v      *= rate^(1000·dt)
//! ```
//!
//! until `|v|` drops under the threshold or the offset would cross a bound.

use std::time::Duration;

use glide_animation::Decay;
use glide_core::Point;

// ============================================================================
// Release velocity
// ============================================================================

/// Tracks the most recent drag sample to estimate release velocity
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    last_time: Option<Duration>,
    velocity: Point,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget previous samples; `time` marks the gesture start
    pub fn reset(&mut self, time: Duration) {
        self.last_time = Some(time);
        self.velocity = Point::ZERO;
    }

    /// Record a drag delta observed at `time`
    pub fn push(&mut self, delta: Point, time: Duration) {
        let elapsed = self
            .last_time
            .and_then(|last| time.checked_sub(last))
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);

        self.velocity = if elapsed > 0.0 {
            Point::new(delta.x / elapsed, delta.y / elapsed)
        } else {
            // No usable interval; assume the delta spans one frame
            Point::new(delta.x * 60.0, delta.y * 60.0)
        };
        self.last_time = Some(time);
    }

    /// Velocity of the last sample
    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Velocity to throw with when released at `time`. A release that comes
    /// more than `timeout` seconds after the last sample means the pointer
    /// stopped before letting go.
    pub fn release_velocity(&self, time: Duration, timeout: f64) -> Point {
        let idle = self
            .last_time
            .and_then(|last| time.checked_sub(last))
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);

        if idle > timeout {
            tracing::trace!("release {:.3}s after last sample, no throw", idle);
            Point::ZERO
        } else {
            self.velocity
        }
    }
}

// ============================================================================
// Throw simulation
// ============================================================================

/// Per-axis throw state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisThrow {
    pub velocity: f64,
}

/// Outcome of one throw tick on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrowStep {
    /// Still moving
    Moving,
    /// Velocity decayed below the threshold
    Stopped,
    /// Integration would have crossed `bound`; the offset was stopped on it
    /// and `velocity` is what is left to hand to a bounce
    HitBound { bound: f64, velocity: f64 },
}

/// Momentum integrator shared by both axes
#[derive(Debug, Clone, Copy)]
pub struct ThrowSimulator {
    decay: Decay,
    velocity_threshold: f64,
}

impl ThrowSimulator {
    pub fn new(deceleration_rate: f64, velocity_threshold: f64) -> Self {
        Self {
            decay: Decay::new(deceleration_rate),
            velocity_threshold,
        }
    }

    pub fn decay(&self) -> Decay {
        self.decay
    }

    /// Whether a release velocity is worth throwing
    pub fn should_throw(&self, velocity: f64) -> bool {
        velocity.abs() >= self.velocity_threshold && velocity.is_finite()
    }

    /// Advance one axis by `dt` seconds
    pub fn step(
        &self,
        throw: &mut AxisThrow,
        offset: &mut f64,
        (min, max): (f64, f64),
        dt: f64,
    ) -> ThrowStep {
        let next = *offset + throw.velocity * dt;

        if next < min || next > max {
            let bound = if next < min { min } else { max };
            *offset = bound;
            let velocity = throw.velocity;
            throw.velocity = 0.0;
            return ThrowStep::HitBound { bound, velocity };
        }

        *offset = next;
        throw.velocity *= self.decay.factor(dt);

        if throw.velocity.abs() < self.velocity_threshold {
            throw.velocity = 0.0;
            ThrowStep::Stopped
        } else {
            ThrowStep::Moving
        }
    }
}
