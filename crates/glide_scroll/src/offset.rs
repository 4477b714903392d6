//! Offset model
//!
//! Owns the unrounded content offset together with the geometry that defines
//! its valid range. Per axis:
//!
//! ```text
//! min = -inset.leading
//! max = max(content - visible, 0) + inset.trailing
//! ```
//!
//! Bounds are always derived, never stored, so changing the content size or
//! insets immediately moves them.

use glide_core::{Axis, EdgeInsets, Point, Rect, Size};

/// Content offset plus the geometry bounding it
#[derive(Debug, Clone, Default)]
pub struct OffsetModel {
    /// Unrounded offset; physics integrates here
    offset: Point,
    content_size: Size,
    content_inset: EdgeInsets,
    visible_size: Size,
}

impl OffsetModel {
    pub fn new(visible_size: Size) -> Self {
        Self {
            visible_size: visible_size.non_negative(),
            ..Default::default()
        }
    }

    /// Observable offset, rounded to whole points to avoid visual jitter
    pub fn offset(&self) -> Point {
        self.offset.rounded()
    }

    pub fn unrounded_offset(&self) -> Point {
        self.offset
    }

    /// Write one axis of the offset without clamping
    pub fn set_axis(&mut self, axis: Axis, value: f64) {
        if value.is_finite() {
            self.offset.set(axis, value);
        }
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn set_content_size(&mut self, size: Size) {
        let size = size.non_negative();
        if size != self.content_size {
            tracing::debug!(
                "content size {:?} -> {:?}",
                self.content_size,
                size
            );
        }
        self.content_size = size;
    }

    pub fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    pub fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.content_inset = inset.non_negative();
    }

    pub fn visible_size(&self) -> Size {
        self.visible_size
    }

    pub fn set_visible_size(&mut self, size: Size) {
        self.visible_size = size.non_negative();
    }

    /// Smallest valid offset on `axis`
    pub fn min(&self, axis: Axis) -> f64 {
        -self.content_inset.leading(axis)
    }

    /// Largest valid offset on `axis`
    pub fn max(&self, axis: Axis) -> f64 {
        let scrollable = self.content_size.get(axis) - self.visible_size.get(axis);
        scrollable.max(0.0) + self.content_inset.trailing(axis)
    }

    pub fn clamp_axis(&self, axis: Axis, value: f64) -> f64 {
        value.clamp(self.min(axis), self.max(axis))
    }

    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            self.clamp_axis(Axis::Horizontal, point.x),
            self.clamp_axis(Axis::Vertical, point.y),
        )
    }

    /// Whether the content is larger than the view on `axis`
    pub fn can_scroll(&self, axis: Axis) -> bool {
        self.content_size.get(axis) > self.visible_size.get(axis)
    }

    /// Clamp `axis` back into bounds; returns true if the offset moved
    pub fn reclamp_axis(&mut self, axis: Axis) -> bool {
        let current = self.offset.get(axis);
        let clamped = self.clamp_axis(axis, current);
        if clamped != current {
            self.offset.set(axis, clamped);
            true
        } else {
            false
        }
    }

    /// Portion of the content currently visible
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.offset(), self.visible_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> OffsetModel {
        let mut model = OffsetModel::new(Size::new(300.0, 500.0));
        model.set_content_size(Size::new(100.0, 1000.0));
        model
    }

    #[test]
    fn test_bounds() {
        let model = model();
        assert_eq!(model.min(Axis::Vertical), 0.0);
        assert_eq!(model.max(Axis::Vertical), 500.0);
        // Content narrower than the view
        assert_eq!(model.max(Axis::Horizontal), 0.0);
        assert!(model.can_scroll(Axis::Vertical));
        assert!(!model.can_scroll(Axis::Horizontal));
    }

    #[test]
    fn test_bounds_with_insets() {
        let mut model = model();
        model.set_content_inset(EdgeInsets::new(20.0, 5.0, 30.0, 0.0));
        assert_eq!(model.min(Axis::Vertical), -20.0);
        assert_eq!(model.max(Axis::Vertical), 530.0);
        assert_eq!(model.min(Axis::Horizontal), -5.0);
    }

    #[test]
    fn test_negative_geometry_is_zeroed() {
        let mut model = model();
        model.set_content_size(Size::new(-50.0, -1.0));
        model.set_content_inset(EdgeInsets::new(-5.0, -5.0, -5.0, -5.0));
        assert_eq!(model.min(Axis::Vertical), 0.0);
        assert_eq!(model.max(Axis::Vertical), 0.0);
    }

    #[test]
    fn test_out_of_bounds_reclamp() {
        let mut model = model();
        model.set_axis(Axis::Vertical, -12.5);
        assert_eq!(model.offset().y, -13.0);
        assert!(model.reclamp_axis(Axis::Vertical));
        assert_eq!(model.unrounded_offset().y, 0.0);
        assert!(!model.reclamp_axis(Axis::Vertical));
    }

    #[test]
    fn test_visible_rect_uses_rounded_offset() {
        let mut model = model();
        model.set_axis(Axis::Vertical, 100.4);
        assert_eq!(model.visible_rect(), Rect::new(0.0, 100.0, 300.0, 500.0));
    }
}
