//! State transitions
//!
//! Widget interaction states are small `Copy` enums. Each one declares how it
//! reacts to an event id; `None` means the event is ignored in that state.
//!
//! # Example
//!
//! ```
//! use glide_core::events::event_types::*;
//! use glide_core::StateTransitions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
//! enum Hover {
//!     #[default]
//!     Outside,
//!     Inside,
//! }
//!
//! impl StateTransitions for Hover {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Hover::Outside, POINTER_ENTER) => Some(Hover::Inside),
//!             (Hover::Inside, POINTER_LEAVE) => Some(Hover::Outside),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut state = Hover::default();
//! state.apply(POINTER_ENTER);
//! assert_eq!(state, Hover::Inside);
//! ```

use std::hash::Hash;

use crate::events::EventType;

/// Trait for state types that can handle event transitions
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;

    /// Apply `event` in place, returning true if the state changed
    fn apply(&mut self, event: EventType) -> bool {
        match self.on_event(event) {
            Some(next) if next != *self => {
                *self = next;
                true
            }
            _ => false,
        }
    }
}
