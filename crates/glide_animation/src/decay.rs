//! Exponential velocity decay for momentum scrolling
//!
//! `rate` is the fraction of velocity kept per millisecond, so after `t`
//! seconds a velocity `v0` has decayed to `v0 · rate^(1000·t)`.

/// Slowest accepted rate (velocity halves roughly every millisecond)
pub const MIN_RATE: f64 = 0.5;

/// Fastest accepted rate
pub const MAX_RATE: f64 = 0.9999;

/// Exponential decay curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decay {
    rate: f64,
}

impl Decay {
    /// Normal deceleration, matching the familiar desktop momentum feel
    pub const NORMAL: f64 = 0.998;

    /// Quick stop
    pub const FAST: f64 = 0.99;

    /// Out-of-range or non-finite rates are clamped into `[MIN_RATE, MAX_RATE]`
    pub fn new(rate: f64) -> Self {
        Self {
            rate: Self::normalize_rate(rate),
        }
    }

    pub fn normalize_rate(rate: f64) -> f64 {
        if rate.is_finite() {
            rate.clamp(MIN_RATE, MAX_RATE)
        } else {
            tracing::warn!("non-finite deceleration rate, using {}", Self::NORMAL);
            Self::NORMAL
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Velocity multiplier after `dt` seconds
    pub fn factor(&self, dt: f64) -> f64 {
        self.rate.powf(dt * 1000.0)
    }

    /// Time for the velocity to halve, in seconds
    pub fn half_life(&self) -> f64 {
        0.5_f64.ln() / self.rate.ln() / 1000.0
    }

    /// Closed-form velocity after `t` seconds
    pub fn velocity_at(&self, v0: f64, t: f64) -> f64 {
        v0 * self.factor(t)
    }

    /// Closed-form distance travelled after `t` seconds
    pub fn distance_at(&self, v0: f64, t: f64) -> f64 {
        v0 * (self.factor(t) - 1.0) / (1000.0 * self.rate.ln())
    }
}

impl Default for Decay {
    fn default() -> Self {
        Self::new(Self::NORMAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_life() {
        let decay = Decay::new(Decay::NORMAL);
        let h = decay.half_life();
        assert!((decay.factor(h) - 0.5).abs() < 1e-12);
        assert!(h > 0.3 && h < 0.4);
    }

    #[test]
    fn test_factor_composes() {
        let decay = Decay::new(0.995);
        let a = decay.factor(0.1) * decay.factor(0.2);
        assert!((a - decay.factor(0.3)).abs() < 1e-12);
    }

    #[test]
    fn test_rate_normalization() {
        assert_eq!(Decay::new(2.0).rate(), MAX_RATE);
        assert_eq!(Decay::new(-1.0).rate(), MIN_RATE);
        assert_eq!(Decay::new(f64::NAN).rate(), Decay::NORMAL);
    }

    #[test]
    fn test_distance_saturates() {
        let decay = Decay::default();
        let far = decay.distance_at(1000.0, 60.0);
        let farther = decay.distance_at(1000.0, 120.0);
        assert!(far > 0.0);
        assert!((farther - far).abs() < 1e-6);
    }
}
