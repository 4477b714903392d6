//! Glide Core
//!
//! Foundational primitives shared by the Glide crates:
//!
//! - **Geometry**: points, sizes, rects and edge insets in `f64` so physics can
//!   integrate at sub-pixel precision
//! - **Axes**: per-axis accessors used by everything that runs the same logic
//!   horizontally and vertically
//! - **Events**: numeric event identifiers consumed by state machines
//! - **State transitions**: the `StateTransitions` trait implemented by widget
//!   state enums
//!
//! # Example
//!
//! ```rust
//! use glide_core::{Axis, Point};
//!
//! let mut offset = Point::new(0.0, 120.0);
//! offset.set(Axis::Vertical, 80.0);
//! assert_eq!(offset.get(Axis::Vertical), 80.0);
//! ```

pub mod events;
pub mod fsm;
pub mod geometry;

pub use events::EventType;
pub use fsm::StateTransitions;
pub use geometry::{Axis, EdgeInsets, Point, Rect, Size};
