//! Scroll view delegate
//!
//! The delegate is a back-reference: the scroll view holds it weakly and
//! silently skips delivery once it has been dropped. Every method has an
//! empty default, so implementors only override what they observe.
//!
//! Notifications are delivered after the scroll view has finished updating,
//! so reading the view from inside a callback sees the current offset.

use glide_core::Axis;

use crate::view::ScrollView;

/// Receives scroll and indicator notifications
pub trait ScrollViewDelegate {
    /// The content offset changed
    fn did_scroll(&self, _scroll_view: &ScrollView) {}

    /// A drag gesture is starting
    fn will_begin_dragging(&self, _scroll_view: &ScrollView) {}

    /// The drag gesture was released
    fn did_end_dragging(&self, _scroll_view: &ScrollView) {}

    fn will_show_indicator(&self, _scroll_view: &ScrollView, _axis: Axis) {}

    fn did_show_indicator(&self, _scroll_view: &ScrollView, _axis: Axis) {}

    fn will_hide_indicator(&self, _scroll_view: &ScrollView, _axis: Axis) {}

    fn did_hide_indicator(&self, _scroll_view: &ScrollView, _axis: Axis) {}
}
