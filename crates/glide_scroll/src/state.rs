//! Scroll interaction state
//!
//! Tracks what is moving the content as a whole. Per-axis physics lives in
//! [`AxisMotion`](crate::motion::AxisMotion); this state answers the coarse
//! questions (`is_dragging`, `is_decelerating`) and is what gets logged.

use glide_core::events::event_types::{DRAG, DRAG_END, SCROLL_END};
use glide_core::StateTransitions;

/// Scroll-specific events
pub mod scroll_events {
    pub use glide_core::events::event_types::{DRAG, DRAG_END, SCROLL_END};

    /// An animated offset change started
    pub const ANIMATE: u32 = 100;
    /// Every axis came to rest
    pub const SETTLED: u32 = 101;
    /// Motion was cut short (direct offset change, scrolling disabled)
    pub const CANCEL: u32 = 102;
}

use scroll_events::{ANIMATE, CANCEL, SETTLED};

/// Coarse scroll state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollState {
    #[default]
    Idle,
    /// Pointer is down and moving the content
    Dragging,
    /// Released: throwing and/or bouncing
    Decelerating,
    /// Animated offset change in progress
    Animating,
}

impl ScrollState {
    /// Whether anything is moving the content
    pub fn is_active(&self) -> bool {
        !matches!(self, ScrollState::Idle)
    }
}

impl StateTransitions for ScrollState {
    fn on_event(&self, event: u32) -> Option<Self> {
        match (self, event) {
            // A new drag interrupts everything
            (_, DRAG) => Some(ScrollState::Dragging),
            // Released with momentum or an over-pull to undo
            (ScrollState::Dragging, SCROLL_END) => Some(ScrollState::Decelerating),
            // Released at rest
            (ScrollState::Dragging, DRAG_END) => Some(ScrollState::Idle),
            (ScrollState::Idle | ScrollState::Decelerating, ANIMATE) => {
                Some(ScrollState::Animating)
            }
            (ScrollState::Decelerating | ScrollState::Animating, SETTLED) => {
                Some(ScrollState::Idle)
            }
            (_, CANCEL) => Some(ScrollState::Idle),
            _ => None,
        }
    }
}
