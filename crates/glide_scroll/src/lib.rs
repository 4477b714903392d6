//! Glide Scroll
//!
//! Headless scroll view physics: the offset model, rubber-band pulls,
//! momentum throws, spring bounce-back, animated offset changes, edge
//! auto-scroll and scroll indicator visibility.
//!
//! Rendering and pointer dispatch live outside this crate. A host feeds
//! drag deltas and clock ticks into a [`ScrollView`] and reads back the
//! content offset, indicator state and redraw requests.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use glide_core::{Point, Size};
//! use glide_scroll::ScrollView;
//!
//! let mut view = ScrollView::new(Size::new(300.0, 500.0));
//! view.set_content_size(Size::new(300.0, 2000.0));
//!
//! view.begin_drag(Duration::ZERO);
//! view.drag_by(Point::new(0.0, 40.0), Duration::from_millis(16));
//! view.end_drag(Duration::from_millis(20));
//!
//! // Momentum keeps the content moving until it decays
//! while view.is_animating() {
//!     view.tick();
//! }
//! assert!(view.content_offset().y > 40.0);
//! ```

pub mod bounce;
pub mod config;
pub mod continuous;
pub mod delegate;
pub mod error;
pub mod indicator;
pub mod motion;
pub mod offset;
pub mod pull;
pub mod state;
pub mod throw;
pub mod view;

pub use bounce::{AxisBounce, BounceSimulator, BounceStep};
pub use config::{
    ContinuousScrollConfig, IndicatorConfig, IndicatorStyle, IndicatorVisibility, ScrollConfig,
};
pub use continuous::ContinuousScroll;
pub use delegate::ScrollViewDelegate;
pub use error::{ConfigError, Result};
pub use indicator::{
    IndicatorEvent, IndicatorEvents, IndicatorInputs, IndicatorState,
    IndicatorVisibilityController,
};
pub use motion::AxisMotion;
pub use offset::OffsetModel;
pub use pull::{DragStep, PullState, PullTracker};
pub use state::ScrollState;
pub use throw::{AxisThrow, ThrowSimulator, ThrowStep, VelocityTracker};
pub use view::ScrollView;
