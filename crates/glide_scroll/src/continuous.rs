//! Edge auto-scroll
//!
//! While something is dragged near an edge of the view (a drag-and-drop
//! payload, a text selection), the content scrolls toward that edge. Each
//! axis has an edge zone; speed ramps linearly from zero at the inner edge of
//! the zone to `max_speed` at the view's edge and beyond.

use glide_core::{Axis, Point, Size};

use crate::config::ContinuousScrollConfig;

/// Active auto-scroll request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousScroll {
    /// Drag location in view coordinates
    point: Point,
}

impl ContinuousScroll {
    pub fn new(point: Point) -> Self {
        Self { point }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn set_point(&mut self, point: Point) {
        self.point = point;
    }

    /// Scroll speed on one axis, in points per second (signed)
    pub fn axis_velocity(&self, axis: Axis, visible: Size, config: &ContinuousScrollConfig) -> f64 {
        let extent = visible.get(axis);
        let zone = config.edge_zone.min(extent / 2.0);
        if zone <= 0.0 || !self.point.is_finite() {
            return 0.0;
        }

        let p = self.point.get(axis);
        let proximity = if p < zone {
            -(zone - p.max(0.0)) / zone
        } else if p > extent - zone {
            (p.min(extent) - (extent - zone)) / zone
        } else {
            0.0
        };
        proximity * config.max_speed
    }

    /// Scroll velocity for both axes
    pub fn velocity(&self, visible: Size, config: &ContinuousScrollConfig) -> Point {
        Point::new(
            self.axis_velocity(Axis::Horizontal, visible, config),
            self.axis_velocity(Axis::Vertical, visible, config),
        )
    }

    /// Advance `offset` on one axis by `dt`, stopping at `min`/`max`.
    /// Returns true if the offset moved.
    pub fn step_axis(
        &self,
        axis: Axis,
        offset: &mut f64,
        (min, max): (f64, f64),
        visible: Size,
        config: &ContinuousScrollConfig,
        dt: f64,
    ) -> bool {
        let velocity = self.axis_velocity(axis, visible, config);
        if velocity == 0.0 {
            return false;
        }
        let next = (*offset + velocity * dt).clamp(min, max.max(min));
        if next == *offset {
            return false;
        }
        *offset = next;
        true
    }

    /// Whether `axis` would still move from `offset`
    pub fn can_advance(
        &self,
        axis: Axis,
        offset: f64,
        (min, max): (f64, f64),
        visible: Size,
        config: &ContinuousScrollConfig,
    ) -> bool {
        let velocity = self.axis_velocity(axis, visible, config);
        (velocity < 0.0 && offset > min) || (velocity > 0.0 && offset < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISIBLE: Size = Size::new(300.0, 500.0);

    fn config() -> ContinuousScrollConfig {
        ContinuousScrollConfig::default()
    }

    #[test]
    fn test_middle_of_view_is_still() {
        let scroll = ContinuousScroll::new(Point::new(150.0, 250.0));
        assert_eq!(scroll.velocity(VISIBLE, &config()), Point::ZERO);
    }

    #[test]
    fn test_speed_ramps_toward_edge() {
        let config = config();
        let near = ContinuousScroll::new(Point::new(150.0, 490.0));
        let nearer = ContinuousScroll::new(Point::new(150.0, 500.0));
        let v_near = near.axis_velocity(Axis::Vertical, VISIBLE, &config);
        let v_nearer = nearer.axis_velocity(Axis::Vertical, VISIBLE, &config);

        assert!(v_near > 0.0);
        assert!(v_nearer > v_near);
        assert_eq!(v_nearer, config.max_speed);
    }

    #[test]
    fn test_outside_view_is_full_speed() {
        let config = config();
        let scroll = ContinuousScroll::new(Point::new(-30.0, 250.0));
        assert_eq!(
            scroll.axis_velocity(Axis::Horizontal, VISIBLE, &config),
            -config.max_speed
        );
    }

    #[test]
    fn test_step_stops_at_content_end() {
        let config = config();
        let scroll = ContinuousScroll::new(Point::new(150.0, 500.0));
        let mut offset = 495.0;

        assert!(scroll.step_axis(Axis::Vertical, &mut offset, (0.0, 500.0), VISIBLE, &config, 1.0 / 60.0));
        assert_eq!(offset, 500.0);
        assert!(!scroll.can_advance(Axis::Vertical, offset, (0.0, 500.0), VISIBLE, &config));
        assert!(!scroll.step_axis(Axis::Vertical, &mut offset, (0.0, 500.0), VISIBLE, &config, 1.0 / 60.0));
    }
}
