//! Scroll view
//!
//! [`ScrollView`] is the widget-facing surface. It owns the offset model, one
//! [`AxisMotion`] per axis, the indicator controller and the animation clock,
//! and is driven by three kinds of input:
//!
//! - pointer dispatch: [`begin_drag`](ScrollView::begin_drag),
//!   [`drag_by`](ScrollView::drag_by), [`end_drag`](ScrollView::end_drag) and
//!   mouse enter/exit
//! - direct calls: offsets, geometry and properties
//! - clock ticks: [`tick`](ScrollView::tick)
//!
//! A tick integrates every simulator first, then re-evaluates indicators, then
//! notifies the delegate and finally requests a redraw, so a delegate always
//! reads the offset the frame will be drawn with.
//!
//! Drag deltas are in content-offset space: moving the pointer down by 10
//! points (revealing content above) is a delta of `-10`.

use std::rc::{Rc, Weak};
use std::time::Duration;

use glide_animation::{AnimationClock, FrameScheduler, ManualFrameScheduler, Tween};
use glide_core::{Axis, EdgeInsets, Point, Rect, Size, StateTransitions};

use crate::bounce::{BounceSimulator, BounceStep};
use crate::config::{IndicatorStyle, IndicatorVisibility, ScrollConfig};
use crate::continuous::ContinuousScroll;
use crate::delegate::ScrollViewDelegate;
use crate::indicator::{
    IndicatorEvent, IndicatorEvents, IndicatorInputs, IndicatorVisibilityController,
};
use crate::motion::AxisMotion;
use crate::offset::OffsetModel;
use crate::pull::{PullState, PullTracker};
use crate::state::{scroll_events, ScrollState};
use crate::throw::{AxisThrow, ThrowSimulator, ThrowStep, VelocityTracker};

/// Scrollable viewport over a larger content area
pub struct ScrollView {
    config: ScrollConfig,
    model: OffsetModel,
    motion: [AxisMotion; 2],
    state: ScrollState,
    pull: PullTracker,
    throw: ThrowSimulator,
    bounce: BounceSimulator,
    velocity: VelocityTracker,
    indicators: IndicatorVisibilityController,
    continuous: Option<ContinuousScroll>,
    clock: AnimationClock,
    delegate: Option<Weak<dyn ScrollViewDelegate>>,
    /// Axes the current drag has moved
    drag_moved: [bool; 2],
    mouse_inside: bool,
    scrolling_to_top: bool,
    needs_redraw: bool,
}

impl ScrollView {
    /// Create a scroll view with the default configuration
    pub fn new(visible_size: Size) -> Self {
        Self::with_config(visible_size, ScrollConfig::default())
    }

    /// Create a scroll view whose clock is driven by hand via [`tick`](Self::tick)
    pub fn with_config(visible_size: Size, config: ScrollConfig) -> Self {
        Self::with_scheduler(visible_size, config, Box::new(ManualFrameScheduler::new()))
    }

    /// Create a scroll view whose clock is backed by a platform timer
    pub fn with_scheduler(
        visible_size: Size,
        config: ScrollConfig,
        scheduler: Box<dyn FrameScheduler>,
    ) -> Self {
        let config = config.normalized();
        let mut view = Self {
            model: OffsetModel::new(visible_size),
            motion: Default::default(),
            state: ScrollState::Idle,
            pull: PullTracker::new(config.rubber_band_resistance),
            throw: ThrowSimulator::new(config.deceleration_rate, config.velocity_threshold),
            bounce: BounceSimulator::new(config.bounce_spring),
            velocity: VelocityTracker::new(),
            indicators: IndicatorVisibilityController::new(&config.indicator),
            continuous: None,
            clock: AnimationClock::new(scheduler),
            delegate: None,
            drag_moved: [false; 2],
            mouse_inside: false,
            scrolling_to_top: false,
            needs_redraw: true,
            config,
        };
        view.finish_update(false);
        view
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    // =========================================================================
    // Delegate
    // =========================================================================

    /// Observe this scroll view. Only a weak reference is kept.
    pub fn set_delegate<D: ScrollViewDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    fn notify(&self, f: impl FnOnce(&dyn ScrollViewDelegate, &ScrollView)) {
        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            f(&*delegate, self);
        }
    }

    fn deliver(&self, event: IndicatorEvent) {
        self.notify(|delegate, view| match event {
            IndicatorEvent::WillShow(axis) => delegate.will_show_indicator(view, axis),
            IndicatorEvent::DidShow(axis) => delegate.did_show_indicator(view, axis),
            IndicatorEvent::WillHide(axis) => delegate.will_hide_indicator(view, axis),
            IndicatorEvent::DidHide(axis) => delegate.did_hide_indicator(view, axis),
        });
    }

    // =========================================================================
    // Offset
    // =========================================================================

    /// Current offset, rounded to whole points
    pub fn content_offset(&self) -> Point {
        self.model.offset()
    }

    pub fn unrounded_content_offset(&self) -> Point {
        self.model.unrounded_offset()
    }

    /// Move the content. A direct change clamps into bounds (unless the axis
    /// is being pulled) and cancels any throw or bounce; an animated change
    /// eases to the clamped target.
    pub fn set_content_offset(&mut self, offset: Point, animated: bool) {
        if !offset.is_finite() {
            tracing::warn!("ignoring non-finite content offset {:?}", offset);
            return;
        }
        self.scrolling_to_top = false;

        // An animation would fight the pointer
        if animated && self.state != ScrollState::Dragging {
            self.animate_to(offset);
        } else {
            self.jump_to(offset);
        }
    }

    fn jump_to(&mut self, offset: Point) {
        for axis in Axis::ALL {
            let idx = axis.index();
            let value = offset.get(axis);
            let bound = self.model.clamp_axis(axis, value);

            if self.motion[idx].pull().is_some() && value != bound {
                let band = self.pull.band(self.model.visible_size().get(axis));
                self.model.set_axis(axis, value);
                self.motion[idx] =
                    AxisMotion::Pulling(PullState::from_displacement(bound, value - bound, &band));
            } else {
                self.model.set_axis(axis, bound);
                self.motion[idx] = AxisMotion::Idle;
            }
        }

        if self.state != ScrollState::Dragging {
            self.transition(scroll_events::CANCEL);
        }
        self.finish_update(true);
    }

    fn animate_to(&mut self, offset: Point) {
        let target = self.model.clamp(offset);
        let current = self.model.unrounded_offset();
        let duration = self.animation_duration();
        let mut animating = false;

        for axis in Axis::ALL {
            let (from, to) = (current.get(axis), target.get(axis));
            self.motion[axis.index()] = if from == to {
                AxisMotion::Idle
            } else {
                animating = true;
                AxisMotion::Animating(Tween::new(from, to, duration, self.config.animation_easing))
            };
        }

        if animating {
            tracing::debug!(
                "animating offset to ({:.1}, {:.1}) over {:.3}s",
                target.x,
                target.y,
                duration
            );
            self.transition(scroll_events::ANIMATE);
            self.finish_update(false);
        } else {
            self.transition(scroll_events::CANCEL);
            self.finish_update(true);
        }
    }

    /// Ease duration for animated offset changes: the throw's half-life,
    /// kept between one frame and one second
    fn animation_duration(&self) -> f64 {
        self.throw.decay().half_life().clamp(self.clock.dt(), 1.0)
    }

    /// Scroll the minimum distance that makes `rect` (content coordinates)
    /// visible. A rect larger than the view is aligned to its leading edge.
    pub fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool) {
        let current = self.model.unrounded_offset();
        let visible = self.model.visible_size();
        let mut target = current;

        for axis in Axis::ALL {
            let (start, end) = (rect.min(axis), rect.max(axis));
            let offset = current.get(axis);
            let extent = visible.get(axis);

            let value = if end - start > extent || start < offset {
                start
            } else if end > offset + extent {
                end - extent
            } else {
                offset
            };
            target.set(axis, value);
        }

        if target != current {
            self.set_content_offset(target, animated);
        }
    }

    pub fn scroll_to_top(&mut self, animated: bool) {
        let mut target = self.model.unrounded_offset();
        target.y = self.model.min(Axis::Vertical);
        self.set_content_offset(target, animated);
        self.scrolling_to_top = self.is_animating_axis(Axis::Vertical);
    }

    pub fn scroll_to_bottom(&mut self, animated: bool) {
        let mut target = self.model.unrounded_offset();
        target.y = self.model.max(Axis::Vertical);
        self.set_content_offset(target, animated);
    }

    /// An animated [`scroll_to_top`](Self::scroll_to_top) is still running
    pub fn is_scrolling_to_top(&self) -> bool {
        self.scrolling_to_top && self.is_animating_axis(Axis::Vertical)
    }

    fn is_animating_axis(&self, axis: Axis) -> bool {
        matches!(self.motion[axis.index()], AxisMotion::Animating(_))
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn content_size(&self) -> Size {
        self.model.content_size()
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.model.set_content_size(size);
        self.geometry_changed();
    }

    pub fn content_inset(&self) -> EdgeInsets {
        self.model.content_inset()
    }

    pub fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.model.set_content_inset(inset);
        self.geometry_changed();
    }

    pub fn visible_size(&self) -> Size {
        self.model.visible_size()
    }

    /// Resize the viewport, e.g. after a layout pass
    pub fn set_visible_size(&mut self, size: Size) {
        self.model.set_visible_size(size);
        self.geometry_changed();
    }

    /// Portion of the content currently visible
    pub fn visible_rect(&self) -> Rect {
        self.model.visible_rect()
    }

    /// Bounds moved: re-clamp idle axes, re-anchor pulls and bounces, and
    /// point animations at the new bounds
    fn geometry_changed(&mut self) {
        let before = self.model.unrounded_offset();

        for axis in Axis::ALL {
            let idx = axis.index();
            let offset = before.get(axis);
            let bound = self.model.clamp_axis(axis, offset);

            match &mut self.motion[idx] {
                AxisMotion::Bouncing(bounce) => {
                    bounce.retarget(self.model.clamp_axis(axis, bounce.bound()));
                    continue;
                }
                AxisMotion::Animating(tween) => {
                    let tween = tween.clone();
                    self.retarget_animation(axis, tween);
                    continue;
                }
                // Throws check bounds every tick
                AxisMotion::Throwing(_) => continue,
                AxisMotion::Idle | AxisMotion::Pulling(_) => {}
            }

            self.motion[idx] = if self.motion[idx].pull().is_some() && offset != bound {
                let band = self.pull.band(self.model.visible_size().get(axis));
                AxisMotion::Pulling(PullState::from_displacement(bound, offset - bound, &band))
            } else {
                self.model.reclamp_axis(axis);
                AxisMotion::Idle
            };
        }

        if !self.motion.iter().any(AxisMotion::is_animated) {
            self.transition(scroll_events::SETTLED);
        }

        let moved = self.model.unrounded_offset() != before;
        self.needs_redraw = true;
        self.finish_update(moved);
    }

    /// Keep an animated axis inside the new bounds: restart from the clamped
    /// offset toward the clamped target, finishing on the original schedule
    fn retarget_animation(&mut self, axis: Axis, tween: Tween) {
        let idx = axis.index();
        let offset = self.model.unrounded_offset().get(axis);
        let from = self.model.clamp_axis(axis, offset);
        let to = self.model.clamp_axis(axis, tween.to());
        if from == offset && to == tween.to() {
            return;
        }

        tracing::debug!(
            "{:?} animation retargeted from {:.1} to {:.1}",
            axis,
            tween.to(),
            to
        );
        self.model.set_axis(axis, from);
        self.motion[idx] = if from == to {
            AxisMotion::Idle
        } else {
            AxisMotion::Animating(Tween::new(from, to, tween.remaining(), tween.easing()))
        };
    }

    fn bounds(&self, axis: Axis) -> (f64, f64) {
        (self.model.min(axis), self.model.max(axis))
    }

    /// Whether `axis` may rubber band past its bounds
    fn can_pull(&self, axis: Axis) -> bool {
        self.config.bounces && (self.model.can_scroll(axis) || self.config.always_bounce(axis))
    }

    fn can_throw(&self, axis: Axis) -> bool {
        self.model.max(axis) > self.model.min(axis) || self.can_pull(axis)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    pub fn is_scroll_enabled(&self) -> bool {
        self.config.scroll_enabled
    }

    /// Disabling drops every pull, throw, bounce, animation and continuous
    /// scroll, snaps the content into bounds and halts the clock
    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        if self.config.scroll_enabled == enabled {
            return;
        }
        self.config.scroll_enabled = enabled;
        if enabled {
            return;
        }

        tracing::debug!("scrolling disabled, clearing physics");
        let before = self.model.unrounded_offset();
        self.continuous = None;
        self.scrolling_to_top = false;
        for axis in Axis::ALL {
            self.motion[axis.index()] = AxisMotion::Idle;
            self.model.reclamp_axis(axis);
        }
        self.transition(scroll_events::CANCEL);
        self.clock.stop();

        let moved = self.model.unrounded_offset() != before;
        self.finish_update(moved);
    }

    pub fn bounces(&self) -> bool {
        self.config.bounces
    }

    pub fn set_bounces(&mut self, bounces: bool) {
        self.config.bounces = bounces;
    }

    pub fn always_bounce_vertical(&self) -> bool {
        self.config.always_bounce_vertical
    }

    pub fn set_always_bounce_vertical(&mut self, value: bool) {
        self.config.always_bounce_vertical = value;
    }

    pub fn always_bounce_horizontal(&self) -> bool {
        self.config.always_bounce_horizontal
    }

    pub fn set_always_bounce_horizontal(&mut self, value: bool) {
        self.config.always_bounce_horizontal = value;
    }

    pub fn deceleration_rate(&self) -> f64 {
        self.throw.decay().rate()
    }

    /// Set the per-millisecond velocity retention of throws. Out-of-range
    /// rates are clamped.
    pub fn set_deceleration_rate(&mut self, rate: f64) {
        self.throw = ThrowSimulator::new(rate, self.config.velocity_threshold);
        self.config.deceleration_rate = self.throw.decay().rate();
    }

    // =========================================================================
    // Motion state
    // =========================================================================

    pub fn scroll_state(&self) -> ScrollState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == ScrollState::Dragging
    }

    /// Released and still throwing or bouncing
    pub fn is_decelerating(&self) -> bool {
        self.state == ScrollState::Decelerating
    }

    pub fn motion(&self, axis: Axis) -> &AxisMotion {
        &self.motion[axis.index()]
    }

    /// Displayed rubber-band distance past the bounds while dragging
    pub fn pull_offset(&self) -> Point {
        let mut offset = Point::ZERO;
        for axis in Axis::ALL {
            if let Some(pull) = self.motion[axis.index()].pull() {
                offset.set(axis, pull.pulled());
            }
        }
        offset
    }

    /// Distance from the bound while bouncing back
    pub fn bounce_offset(&self) -> Point {
        let mut offset = Point::ZERO;
        for axis in Axis::ALL {
            if let AxisMotion::Bouncing(bounce) = &self.motion[axis.index()] {
                offset.set(axis, bounce.displacement());
            }
        }
        offset
    }

    /// The clock is running
    pub fn is_animating(&self) -> bool {
        self.clock.is_running()
    }

    /// Consume the pending redraw request
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    fn transition(&mut self, event: u32) {
        let from = self.state;
        if self.state.apply(event) {
            tracing::debug!("scroll state {:?} -> {:?}", from, self.state);
        }
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// A drag gesture starts. Anything still moving the content stops where
    /// it is drawn; an axis caught outside its bounds continues as a pull.
    pub fn begin_drag(&mut self, time: Duration) {
        if !self.config.scroll_enabled {
            return;
        }

        self.continuous = None;
        self.scrolling_to_top = false;
        self.drag_moved = [false; 2];
        for axis in Axis::ALL {
            self.interrupt_axis(axis);
        }
        self.velocity.reset(time);
        self.transition(scroll_events::DRAG);

        self.notify(|delegate, view| delegate.will_begin_dragging(view));
        self.finish_update(false);
    }

    fn interrupt_axis(&mut self, axis: Axis) {
        let idx = axis.index();
        if !self.motion[idx].is_animated() {
            return;
        }
        tracing::trace!("interrupting {} on {:?}", self.motion[idx].name(), axis);

        let offset = self.model.unrounded_offset().get(axis);
        let bound = self.model.clamp_axis(axis, offset);
        self.motion[idx] = if offset != bound && self.can_pull(axis) {
            let band = self.pull.band(self.model.visible_size().get(axis));
            AxisMotion::Pulling(PullState::from_displacement(bound, offset - bound, &band))
        } else {
            self.model.set_axis(axis, bound);
            AxisMotion::Idle
        };
    }

    /// Move the content by a drag `delta` observed at `time`. Starts a drag
    /// if none is active.
    pub fn drag_by(&mut self, delta: Point, time: Duration) {
        if !self.config.scroll_enabled || !delta.is_finite() {
            return;
        }
        if self.state != ScrollState::Dragging {
            self.begin_drag(time);
        }
        self.velocity.push(delta, time);

        let before = self.model.unrounded_offset();
        for axis in Axis::ALL {
            let d = delta.get(axis);
            if d == 0.0 {
                continue;
            }
            let idx = axis.index();
            self.drag_moved[idx] = true;
            let step = self.pull.step(
                before.get(axis),
                self.bounds(axis),
                self.model.visible_size().get(axis),
                self.motion[idx].pull().copied(),
                d,
                self.can_pull(axis),
            );
            self.model.set_axis(axis, step.offset);
            self.motion[idx] = step.pull.map_or(AxisMotion::Idle, AxisMotion::Pulling);
        }

        let moved = self.model.unrounded_offset() != before;
        self.finish_update(moved);
    }

    /// Release the drag at `time`. Pulled axes bounce back; others throw if
    /// the release velocity is high enough.
    pub fn end_drag(&mut self, time: Duration) {
        if self.state != ScrollState::Dragging {
            return;
        }

        let velocity = self
            .velocity
            .release_velocity(time, self.config.release_timeout);
        tracing::debug!(
            "drag released with velocity ({:.1}, {:.1})",
            velocity.x,
            velocity.y
        );

        for axis in Axis::ALL {
            let idx = axis.index();
            let offset = self.model.unrounded_offset().get(axis);
            let v = velocity.get(axis);

            self.motion[idx] = match std::mem::take(&mut self.motion[idx]) {
                AxisMotion::Pulling(pull) => {
                    AxisMotion::Bouncing(self.bounce.begin(pull.bound(), offset, v))
                }
                _ if self.can_throw(axis) && self.throw.should_throw(v) => {
                    AxisMotion::Throwing(AxisThrow { velocity: v })
                }
                other => other,
            };
        }

        let moving = self.motion.iter().any(AxisMotion::is_decelerating);
        self.transition(if moving {
            scroll_events::SCROLL_END
        } else {
            scroll_events::DRAG_END
        });

        self.notify(|delegate, view| delegate.did_end_dragging(view));
        self.finish_update(false);
    }

    pub fn mouse_entered(&mut self) {
        self.mouse_inside = true;
        self.finish_update(false);
    }

    pub fn mouse_exited(&mut self) {
        self.mouse_inside = false;
        self.finish_update(false);
    }

    pub fn is_mouse_inside(&self) -> bool {
        self.mouse_inside
    }

    // =========================================================================
    // Continuous scroll
    // =========================================================================

    /// Auto-scroll toward whichever edge `point` (view coordinates) is near.
    /// Calling again moves the point. The scroll is always animated.
    pub fn begin_continuous_scroll(&mut self, point: Point, _animated: bool) {
        if !self.config.scroll_enabled {
            return;
        }
        match &mut self.continuous {
            Some(scroll) => scroll.set_point(point),
            None => {
                tracing::debug!("continuous scroll started at {:?}", point);
                self.continuous = Some(ContinuousScroll::new(point));
            }
        }
        self.finish_update(false);
    }

    pub fn end_continuous_scroll(&mut self, _animated: bool) {
        if self.continuous.take().is_some() {
            tracing::debug!("continuous scroll ended");
            self.finish_update(false);
        }
    }

    pub fn is_continuous_scrolling(&self) -> bool {
        self.continuous.is_some()
    }

    /// Continuous scroll would still move `axis`
    fn continuous_moves(&self, axis: Axis) -> bool {
        self.continuous.is_some_and(|scroll| {
            scroll.can_advance(
                axis,
                self.model.unrounded_offset().get(axis),
                self.bounds(axis),
                self.model.visible_size(),
                &self.config.continuous,
            )
        })
    }

    // =========================================================================
    // Indicators
    // =========================================================================

    pub fn scroll_indicator_visibility(&self, axis: Axis) -> IndicatorVisibility {
        self.indicators.visibility(axis)
    }

    pub fn set_scroll_indicator_visibility(&mut self, axis: Axis, visibility: IndicatorVisibility) {
        self.config.indicator.set_visibility(axis, visibility);
        self.indicators.set_visibility(axis, visibility);
        self.finish_update(false);
    }

    pub fn horizontal_scroll_indicator_visibility(&self) -> IndicatorVisibility {
        self.scroll_indicator_visibility(Axis::Horizontal)
    }

    pub fn set_horizontal_scroll_indicator_visibility(&mut self, visibility: IndicatorVisibility) {
        self.set_scroll_indicator_visibility(Axis::Horizontal, visibility);
    }

    pub fn vertical_scroll_indicator_visibility(&self) -> IndicatorVisibility {
        self.scroll_indicator_visibility(Axis::Vertical)
    }

    pub fn set_vertical_scroll_indicator_visibility(&mut self, visibility: IndicatorVisibility) {
        self.set_scroll_indicator_visibility(Axis::Vertical, visibility);
    }

    pub fn is_scroll_indicator_showing(&self, axis: Axis) -> bool {
        self.indicators.is_showing(axis)
    }

    pub fn horizontal_scroll_indicator_showing(&self) -> bool {
        self.is_scroll_indicator_showing(Axis::Horizontal)
    }

    pub fn vertical_scroll_indicator_showing(&self) -> bool {
        self.is_scroll_indicator_showing(Axis::Vertical)
    }

    pub fn scroll_indicator_style(&self) -> IndicatorStyle {
        self.config.indicator.style
    }

    pub fn set_scroll_indicator_style(&mut self, style: IndicatorStyle) {
        if self.config.indicator.style != style {
            self.config.indicator.style = style;
            self.needs_redraw = true;
        }
    }

    /// Space taken by visible indicators along the trailing edges
    pub fn scroll_indicator_insets(&self) -> EdgeInsets {
        let thickness = self.config.indicator.thickness;
        let along = |axis: Axis| {
            if self.is_scroll_indicator_showing(axis) {
                thickness
            } else {
                0.0
            }
        };
        EdgeInsets::new(0.0, 0.0, along(Axis::Horizontal), along(Axis::Vertical))
    }

    /// Briefly show the indicators of every scrollable axis
    pub fn flash_scroll_indicators(&mut self) {
        let inputs = self.indicator_inputs();
        let events = self.indicators.flash(&inputs);
        self.publish(false, events);
    }

    fn indicator_inputs(&self) -> IndicatorInputs {
        let dragging = self.state == ScrollState::Dragging;
        let mut inputs = IndicatorInputs {
            mouse_inside: self.mouse_inside,
            ..Default::default()
        };
        for axis in Axis::ALL {
            let idx = axis.index();
            inputs.eligible[idx] = self.model.can_scroll(axis);
            let dragged = dragging && self.drag_moved[idx];
            inputs.scrolling[idx] =
                dragged || !self.motion[idx].is_idle() || self.continuous_moves(axis);
        }
        inputs
    }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Handle one clock tick. Ignored while the clock is stopped.
    pub fn tick(&mut self) {
        let Some(dt) = self.clock.begin_tick() else {
            return;
        };
        let before = self.model.unrounded_offset();

        for axis in Axis::ALL {
            self.step_axis(axis, dt);
        }
        self.step_continuous(dt);

        let inputs = self.indicator_inputs();
        let events = self.indicators.advance(dt, &inputs);

        if !self.is_animating_axis(Axis::Vertical) {
            self.scrolling_to_top = false;
        }
        if !self.motion.iter().any(AxisMotion::is_animated) {
            self.transition(scroll_events::SETTLED);
        }

        self.needs_redraw = true;
        let moved = self.model.unrounded_offset() != before;
        self.publish(moved, events);
    }

    fn step_axis(&mut self, axis: Axis, dt: f64) {
        let idx = axis.index();
        let bounds = self.bounds(axis);
        let mut offset = self.model.unrounded_offset().get(axis);

        let next = match std::mem::take(&mut self.motion[idx]) {
            AxisMotion::Throwing(mut throw) => {
                match self.throw.step(&mut throw, &mut offset, bounds, dt) {
                    ThrowStep::Moving => AxisMotion::Throwing(throw),
                    ThrowStep::Stopped => {
                        tracing::trace!("{:?} throw stopped at {:.1}", axis, offset);
                        AxisMotion::Idle
                    }
                    ThrowStep::HitBound { bound, velocity } if self.can_pull(axis) => {
                        AxisMotion::Bouncing(self.bounce.begin(bound, offset, velocity))
                    }
                    ThrowStep::HitBound { .. } => AxisMotion::Idle,
                }
            }
            AxisMotion::Bouncing(mut bounce) => {
                match self.bounce.step(&mut bounce, &mut offset, dt) {
                    BounceStep::Moving => AxisMotion::Bouncing(bounce),
                    BounceStep::Settled => AxisMotion::Idle,
                }
            }
            AxisMotion::Animating(mut tween) => {
                offset = tween.step(dt);
                if tween.is_done() {
                    // Geometry may have changed under the animation
                    offset = self.model.clamp_axis(axis, offset);
                    AxisMotion::Idle
                } else {
                    AxisMotion::Animating(tween)
                }
            }
            other => other,
        };

        self.motion[idx] = next;
        self.model.set_axis(axis, offset);
    }

    fn step_continuous(&mut self, dt: f64) {
        let Some(scroll) = self.continuous else {
            return;
        };
        let visible = self.model.visible_size();

        for axis in Axis::ALL {
            if !self.motion[axis.index()].is_idle() {
                continue;
            }
            let mut offset = self.model.unrounded_offset().get(axis);
            let bounds = self.bounds(axis);
            if scroll.step_axis(axis, &mut offset, bounds, visible, &self.config.continuous, dt) {
                self.model.set_axis(axis, offset);
            }
        }
    }

    fn needs_ticks(&self) -> bool {
        self.motion.iter().any(AxisMotion::is_animated)
            || Axis::ALL.iter().any(|&axis| self.continuous_moves(axis))
            || self.indicators.is_animating()
    }

    fn update_clock(&mut self) {
        if self.needs_ticks() {
            self.clock.start();
        } else {
            self.clock.stop();
        }
    }

    /// Re-apply the indicator policy, then publish
    fn finish_update(&mut self, moved: bool) {
        let inputs = self.indicator_inputs();
        let events = self.indicators.evaluate(&inputs);
        self.publish(moved, events);
    }

    /// Start or stop the clock, deliver indicator notifications, then
    /// `did_scroll` if the offset moved
    fn publish(&mut self, moved: bool, events: IndicatorEvents) {
        if moved || !events.is_empty() {
            self.needs_redraw = true;
        }
        self.update_clock();

        for event in events {
            self.deliver(event);
        }
        if moved {
            self.notify(|delegate, view| delegate.did_scroll(view));
        }
    }
}

impl Drop for ScrollView {
    fn drop(&mut self) {
        self.clock.invalidate();
    }
}

impl std::fmt::Debug for ScrollView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollView")
            .field("offset", &self.model.unrounded_offset())
            .field("content_size", &self.model.content_size())
            .field("visible_size", &self.model.visible_size())
            .field("state", &self.state)
            .field("horizontal", &self.motion[0].name())
            .field("vertical", &self.motion[1].name())
            .field("clock", &self.clock)
            .finish()
    }
}
