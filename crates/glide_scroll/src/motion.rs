//! Per-axis motion
//!
//! One tagged value per axis means an axis can never be pulling, throwing
//! and bouncing at the same time; switching between them is a single
//! assignment.

use glide_animation::Tween;

use crate::bounce::AxisBounce;
use crate::pull::PullState;
use crate::throw::AxisThrow;

/// What is currently moving one axis
#[derive(Debug, Clone, Default)]
pub enum AxisMotion {
    #[default]
    Idle,
    /// Held past a bound by a drag
    Pulling(PullState),
    /// Momentum after release
    Throwing(AxisThrow),
    /// Spring return to a bound
    Bouncing(AxisBounce),
    /// Animated offset change
    Animating(Tween),
}

impl AxisMotion {
    pub fn is_idle(&self) -> bool {
        matches!(self, AxisMotion::Idle)
    }

    /// Needs clock ticks to make progress
    pub fn is_animated(&self) -> bool {
        matches!(
            self,
            AxisMotion::Throwing(_) | AxisMotion::Bouncing(_) | AxisMotion::Animating(_)
        )
    }

    /// Throw or bounce: momentum left over from a drag
    pub fn is_decelerating(&self) -> bool {
        matches!(self, AxisMotion::Throwing(_) | AxisMotion::Bouncing(_))
    }

    pub fn pull(&self) -> Option<&PullState> {
        match self {
            AxisMotion::Pulling(state) => Some(state),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AxisMotion::Idle => "idle",
            AxisMotion::Pulling(_) => "pulling",
            AxisMotion::Throwing(_) => "throwing",
            AxisMotion::Bouncing(_) => "bouncing",
            AxisMotion::Animating(_) => "animating",
        }
    }
}
