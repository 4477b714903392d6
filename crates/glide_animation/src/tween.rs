//! Eased approach from one value to another over a fixed duration

use crate::easing::Easing;

/// A timed, eased interpolation
#[derive(Debug, Clone)]
pub struct Tween {
    from: f64,
    to: f64,
    /// Duration in seconds
    duration: f64,
    elapsed: f64,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
            elapsed: 0.0,
            easing,
        }
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Seconds left before the tween lands
    pub fn remaining(&self) -> f64 {
        self.duration - self.elapsed
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Advance by `dt` seconds and return the new value
    pub fn step(&mut self, dt: f64) -> f64 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn value(&self) -> f64 {
        if self.is_done() {
            return self.to;
        }
        let progress = self.elapsed / self.duration;
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_reaches_target_exactly() {
        let mut tween = Tween::new(0.0, 500.0, 0.25, Easing::EaseOutCubic);
        let mut last = 0.0;
        while !tween.is_done() {
            let value = tween.step(1.0 / 60.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(tween.value(), 500.0);
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut tween = Tween::new(0.0, 100.0, 0.5, Easing::Linear);
        tween.step(0.2);
        assert!((tween.remaining() - 0.3).abs() < 1e-12);
        tween.step(1.0);
        assert_eq!(tween.remaining(), 0.0);
    }

    #[test]
    fn test_zero_duration_is_immediately_done() {
        let tween = Tween::new(10.0, 20.0, 0.0, Easing::Linear);
        assert!(tween.is_done());
        assert_eq!(tween.value(), 20.0);
    }
}
