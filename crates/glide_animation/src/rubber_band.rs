//! Rubber-band resistance
//!
//! Maps a raw over-drag distance `d` onto the distance actually displayed:
//!
//! ```text
//! band(d) = (1 - 1 / (k·d/B + 1)) · B
//! ```
//!
//! The curve starts with slope `k`, is strictly increasing and saturates at
//! `B` (the axis extent), so the further the content is pulled the harder it
//! resists.

/// Saturating resistance curve for over-drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RubberBand {
    /// Resistance constant `k`, also the initial slope
    pub stiffness: f64,
    /// Asymptotic limit `B`
    pub limit: f64,
}

impl RubberBand {
    pub fn new(stiffness: f64, limit: f64) -> Self {
        Self { stiffness, limit }
    }

    /// A zero (or invalid) limit or stiffness disables resistance entirely
    pub fn is_pass_through(&self) -> bool {
        !(self.limit > 0.0 && self.stiffness > 0.0)
            || !self.limit.is_finite()
            || !self.stiffness.is_finite()
    }

    /// Displayed distance for a non-negative raw distance
    pub fn band(&self, x: f64) -> f64 {
        if self.is_pass_through() {
            return x;
        }
        let c = self.stiffness;
        let d = self.limit;

        (1. - (1. / (x * c / d + 1.))) * d
    }

    /// Signed variant: `sign(d) · band(|d|)`
    pub fn pulled(&self, d: f64) -> f64 {
        d.signum() * self.band(d.abs())
    }

    /// Raw distance that produces a displayed distance `y` (`0 <= y < limit`)
    pub fn inverse(&self, y: f64) -> f64 {
        if self.is_pass_through() {
            return y;
        }
        let c = self.stiffness;
        let d = self.limit;
        // Keep strictly below the asymptote
        let y = y.clamp(0.0, d * (1.0 - f64::EPSILON));

        y / (d - y) * d / c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_matches_closed_form() {
        let band = RubberBand::new(0.55, 500.0);
        let expected = (1.0 - 1.0 / (0.55 * 50.0 / 500.0 + 1.0)) * 500.0;
        assert_eq!(band.band(50.0), expected);
        assert_eq!(band.pulled(-50.0), -expected);
    }

    #[test]
    fn test_band_monotonic_and_bounded() {
        let band = RubberBand::new(0.55, 500.0);
        let mut last = 0.0;
        for i in 1..2000 {
            let x = i as f64 * 7.3;
            let y = band.band(x);
            assert!(y > last, "not increasing at {x}");
            assert!(y < 500.0);
            last = y;
        }
        assert!(band.band(1e12) > 499.0);
    }

    #[test]
    fn test_inverse_round_trips() {
        let band = RubberBand::new(0.55, 400.0);
        for x in [0.0, 1.0, 33.0, 250.0, 4000.0] {
            let y = band.band(x);
            assert!((band.inverse(y) - x).abs() < 1e-6 * x.max(1.0));
        }
    }

    #[test]
    fn test_zero_extent_passes_through() {
        let band = RubberBand::new(0.55, 0.0);
        assert_eq!(band.pulled(-42.0), -42.0);
        assert_eq!(band.inverse(42.0), 42.0);
    }
}
