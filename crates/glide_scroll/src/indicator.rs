//! Scroll indicator visibility
//!
//! Each axis runs a small state machine, `Hidden ⇄ Showing`, with a transient
//! `Flashing` override. The policy decides the target state from a few
//! inputs (eligibility, scroll activity, pointer inside). Whenever the visible
//! state flips, a fade is started and bracketed by `will…`/`did…`
//! notifications; the fade itself is drawn by the indicator visual.
//!
//! A flip while the opposite fade is still running cancels that fade and
//! reverses from the progress it reached. The cancelled `did…` is never sent.

use glide_core::{Axis, StateTransitions};
use smallvec::SmallVec;

use crate::config::{IndicatorConfig, IndicatorVisibility};

/// Indicator event identifiers
pub mod indicator_events {
    /// Policy wants the indicator visible
    pub const SHOW: u32 = 200;
    /// Policy wants the indicator hidden
    pub const HIDE: u32 = 201;
    /// Temporary forced visibility
    pub const FLASH: u32 = 202;
}

// ============================================================================
// Indicator State
// ============================================================================

/// Per-axis indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndicatorState {
    #[default]
    Hidden,
    Showing,
    /// Forced visible by a flash, regardless of policy
    Flashing,
}

impl IndicatorState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, IndicatorState::Hidden)
    }
}

impl StateTransitions for IndicatorState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use indicator_events::*;
        match (self, event) {
            (IndicatorState::Hidden, SHOW) => Some(IndicatorState::Showing),
            (IndicatorState::Showing, HIDE) => Some(IndicatorState::Hidden),
            (IndicatorState::Hidden | IndicatorState::Showing, FLASH) => {
                Some(IndicatorState::Flashing)
            }
            // Leaving a flash hands control back to the policy
            (IndicatorState::Flashing, SHOW) => Some(IndicatorState::Showing),
            (IndicatorState::Flashing, HIDE) => Some(IndicatorState::Hidden),
            _ => None,
        }
    }
}

/// Notification produced by a visibility change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorEvent {
    WillShow(Axis),
    DidShow(Axis),
    WillHide(Axis),
    DidHide(Axis),
}

/// Notifications produced by one controller call, in delivery order
pub type IndicatorEvents = SmallVec<[IndicatorEvent; 4]>;

/// Inputs the policy is evaluated against
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorInputs {
    /// Content exceeds the visible extent, per axis (`[horizontal, vertical]`)
    pub eligible: [bool; 2],
    /// A drag or animation is moving the axis
    pub scrolling: [bool; 2],
    pub mouse_inside: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Fade {
    Idle,
    In { elapsed: f64 },
    Out { elapsed: f64 },
}

#[derive(Debug, Clone, Copy)]
struct AxisIndicator {
    state: IndicatorState,
    fade: Fade,
    /// Seconds left before a flash hands back to the policy
    flash_remaining: f64,
}

impl Default for AxisIndicator {
    fn default() -> Self {
        Self {
            state: IndicatorState::Hidden,
            fade: Fade::Idle,
            flash_remaining: 0.0,
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Drives both axes' indicator state machines
#[derive(Debug, Clone)]
pub struct IndicatorVisibilityController {
    axes: [AxisIndicator; 2],
    visibility: [IndicatorVisibility; 2],
    fade_duration: f64,
    flash_duration: f64,
}

impl IndicatorVisibilityController {
    pub fn new(config: &IndicatorConfig) -> Self {
        Self {
            axes: [AxisIndicator::default(); 2],
            visibility: [config.horizontal, config.vertical],
            fade_duration: config.fade_duration,
            flash_duration: config.flash_duration,
        }
    }

    pub fn visibility(&self, axis: Axis) -> IndicatorVisibility {
        self.visibility[axis.index()]
    }

    /// Change the policy; takes effect on the next evaluation
    pub fn set_visibility(&mut self, axis: Axis, visibility: IndicatorVisibility) {
        self.visibility[axis.index()] = visibility;
    }

    pub fn state(&self, axis: Axis) -> IndicatorState {
        self.axes[axis.index()].state
    }

    /// Visible, or on its way to being visible
    pub fn is_showing(&self, axis: Axis) -> bool {
        self.state(axis).is_visible()
    }

    /// A fade or flash still needs clock ticks
    pub fn is_animating(&self) -> bool {
        self.axes
            .iter()
            .any(|a| a.fade != Fade::Idle || a.flash_remaining > 0.0)
    }

    /// Whether the policy alone wants `axis` visible
    pub fn policy_wants_visible(&self, axis: Axis, inputs: &IndicatorInputs) -> bool {
        if !inputs.eligible[axis.index()] {
            return false;
        }
        match self.visibility(axis) {
            IndicatorVisibility::Never => false,
            IndicatorVisibility::Always => true,
            IndicatorVisibility::WhileScrolling => inputs.scrolling[axis.index()],
            IndicatorVisibility::WhileMouseInside => inputs.mouse_inside,
        }
    }

    /// Re-apply the policy to both axes
    pub fn evaluate(&mut self, inputs: &IndicatorInputs) -> IndicatorEvents {
        let mut events = IndicatorEvents::new();
        for axis in Axis::ALL {
            self.evaluate_axis(axis, inputs, &mut events);
        }
        events
    }

    /// Force both axes visible for the flash duration
    pub fn flash(&mut self, inputs: &IndicatorInputs) -> IndicatorEvents {
        let mut events = IndicatorEvents::new();
        for axis in Axis::ALL {
            if !inputs.eligible[axis.index()] {
                continue;
            }
            let idx = axis.index();
            let was_visible = self.axes[idx].state.is_visible();
            self.axes[idx].state.apply(indicator_events::FLASH);
            self.axes[idx].flash_remaining = self.flash_duration;
            tracing::debug!("flashing {:?} indicator", axis);
            if !was_visible {
                self.begin_fade(axis, true, &mut events);
            }
            if self.flash_duration <= 0.0 {
                self.evaluate_axis(axis, inputs, &mut events);
            }
        }
        events
    }

    /// Advance fades and flash timers by `dt` seconds, then re-apply the policy
    pub fn advance(&mut self, dt: f64, inputs: &IndicatorInputs) -> IndicatorEvents {
        let mut events = IndicatorEvents::new();
        for axis in Axis::ALL {
            let idx = axis.index();
            let duration = self.fade_duration;
            let indicator = &mut self.axes[idx];

            match &mut indicator.fade {
                Fade::Idle => {}
                Fade::In { elapsed } => {
                    *elapsed += dt;
                    if *elapsed >= duration {
                        indicator.fade = Fade::Idle;
                        events.push(IndicatorEvent::DidShow(axis));
                    }
                }
                Fade::Out { elapsed } => {
                    *elapsed += dt;
                    if *elapsed >= duration {
                        indicator.fade = Fade::Idle;
                        events.push(IndicatorEvent::DidHide(axis));
                    }
                }
            }

            if indicator.flash_remaining > 0.0 {
                indicator.flash_remaining = (indicator.flash_remaining - dt).max(0.0);
            }

            self.evaluate_axis(axis, inputs, &mut events);
        }
        events
    }

    fn evaluate_axis(&mut self, axis: Axis, inputs: &IndicatorInputs, events: &mut IndicatorEvents) {
        let idx = axis.index();
        if self.axes[idx].flash_remaining > 0.0 {
            return;
        }

        let event = if self.policy_wants_visible(axis, inputs) {
            indicator_events::SHOW
        } else {
            indicator_events::HIDE
        };

        let was_visible = self.axes[idx].state.is_visible();
        if self.axes[idx].state.apply(event) {
            let now_visible = self.axes[idx].state.is_visible();
            tracing::trace!("{:?} indicator -> {:?}", axis, self.axes[idx].state);
            if now_visible != was_visible {
                self.begin_fade(axis, now_visible, events);
            }
        }
    }

    fn begin_fade(&mut self, axis: Axis, show: bool, events: &mut IndicatorEvents) {
        let duration = self.fade_duration;
        let indicator = &mut self.axes[axis.index()];

        indicator.fade = match (indicator.fade, show) {
            (Fade::Out { elapsed }, true) => {
                tracing::debug!("{:?} indicator hide reversed", axis);
                Fade::In {
                    elapsed: (duration - elapsed).max(0.0),
                }
            }
            (Fade::In { elapsed }, false) => {
                tracing::debug!("{:?} indicator show reversed", axis);
                Fade::Out {
                    elapsed: (duration - elapsed).max(0.0),
                }
            }
            (fade @ Fade::In { .. }, true) | (fade @ Fade::Out { .. }, false) => fade,
            (Fade::Idle, true) => Fade::In { elapsed: 0.0 },
            (Fade::Idle, false) => Fade::Out { elapsed: 0.0 },
        };

        events.push(if show {
            IndicatorEvent::WillShow(axis)
        } else {
            IndicatorEvent::WillHide(axis)
        });

        if duration <= 0.0 {
            indicator.fade = Fade::Idle;
            events.push(if show {
                IndicatorEvent::DidShow(axis)
            } else {
                IndicatorEvent::DidHide(axis)
            });
        }
    }
}
