//! Core geometry types
//!
//! Everything is `f64`: scroll offsets are integrated at sub-pixel precision
//! and only rounded when they are observed.

// ─────────────────────────────────────────────────────────────────────────────
// Axis
// ─────────────────────────────────────────────────────────────────────────────

/// One of the two scroll axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Index into per-axis arrays (`[horizontal, vertical]`)
    pub const fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Point
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point (also used for 2D deltas and velocities)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component along `axis`
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Replace the component along `axis`
    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }

    /// Point with both components rounded to whole units
    pub fn rounded(&self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Size
// ─────────────────────────────────────────────────────────────────────────────

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along `axis` (width for horizontal, height for vertical)
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Negative and non-finite components become zero
    pub fn non_negative(&self) -> Self {
        Self::new(sanitize(self.width), sanitize(self.height))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rect
// ─────────────────────────────────────────────────────────────────────────────

/// 2D rectangle with a top-left origin
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Leading edge along `axis` (left or top)
    pub fn min(&self, axis: Axis) -> f64 {
        self.origin.get(axis)
    }

    /// Trailing edge along `axis` (right or bottom)
    pub fn max(&self, axis: Axis) -> f64 {
        self.origin.get(axis) + self.size.get(axis)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EdgeInsets
// ─────────────────────────────────────────────────────────────────────────────

/// Per-edge margins
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Inset on the leading edge of `axis` (left or top)
    pub fn leading(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Inset on the trailing edge of `axis` (right or bottom)
    pub fn trailing(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Negative and non-finite components become zero
    pub fn non_negative(&self) -> Self {
        Self::new(
            sanitize(self.top),
            sanitize(self.left),
            sanitize(self.bottom),
            sanitize(self.right),
        )
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_accessors() {
        let mut p = Point::new(1.0, 2.0);
        assert_eq!(p.get(Axis::Horizontal), 1.0);
        assert_eq!(p.get(Axis::Vertical), 2.0);
        p.set(Axis::Vertical, 7.5);
        assert_eq!(p, Point::new(1.0, 7.5));
    }

    #[test]
    fn test_non_negative_normalization() {
        let size = Size::new(-10.0, f64::NAN).non_negative();
        assert_eq!(size, Size::ZERO);

        let insets = EdgeInsets::new(-1.0, 4.0, f64::INFINITY, 2.0).non_negative();
        assert_eq!(insets, EdgeInsets::new(0.0, 4.0, 0.0, 2.0));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.min(Axis::Horizontal), 10.0);
        assert_eq!(rect.max(Axis::Vertical), 70.0);
    }

    #[test]
    fn test_point_rounding() {
        assert_eq!(Point::new(1.4, -2.6).rounded(), Point::new(1.0, -3.0));
    }
}
