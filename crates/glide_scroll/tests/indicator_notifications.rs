//! Delegate notifications and indicator visibility policies

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use glide_core::{Axis, Point, Size};
use glide_scroll::{IndicatorVisibility, ScrollConfig, ScrollView, ScrollViewDelegate};

/// Records every notification as a short string
#[derive(Default)]
struct Recorder {
    log: RefCell<Vec<String>>,
}

impl Recorder {
    fn take(&self) -> Vec<String> {
        self.log.borrow_mut().drain(..).collect()
    }

    fn push(&self, entry: String) {
        self.log.borrow_mut().push(entry);
    }
}

fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::Horizontal => "h",
        Axis::Vertical => "v",
    }
}

impl ScrollViewDelegate for Recorder {
    fn did_scroll(&self, view: &ScrollView) {
        self.push(format!(
            "did_scroll {} {}",
            view.content_offset().y,
            view.vertical_scroll_indicator_showing()
        ));
    }

    fn will_begin_dragging(&self, _view: &ScrollView) {
        self.push("will_begin_dragging".into());
    }

    fn did_end_dragging(&self, _view: &ScrollView) {
        self.push("did_end_dragging".into());
    }

    fn will_show_indicator(&self, _view: &ScrollView, axis: Axis) {
        self.push(format!("will_show {}", axis_name(axis)));
    }

    fn did_show_indicator(&self, _view: &ScrollView, axis: Axis) {
        self.push(format!("did_show {}", axis_name(axis)));
    }

    fn will_hide_indicator(&self, _view: &ScrollView, axis: Axis) {
        self.push(format!("will_hide {}", axis_name(axis)));
    }

    fn did_hide_indicator(&self, _view: &ScrollView, axis: Axis) {
        self.push(format!("did_hide {}", axis_name(axis)));
    }
}

fn with_vertical(visibility: IndicatorVisibility) -> ScrollConfig {
    let mut config = ScrollConfig::default();
    config.indicator.horizontal = IndicatorVisibility::Never;
    config.indicator.vertical = visibility;
    config
}

fn observed_view(config: ScrollConfig) -> (ScrollView, Rc<Recorder>) {
    let recorder = Rc::new(Recorder::default());
    let mut view = ScrollView::with_config(Size::new(300.0, 500.0), config);
    view.set_delegate(&recorder);
    view.set_content_size(Size::new(100.0, 1000.0));
    (view, recorder)
}

fn run_until_idle(view: &mut ScrollView) {
    let mut ticks = 0;
    while view.is_animating() {
        view.tick();
        ticks += 1;
        assert!(ticks < 2000);
    }
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Notifications other than `did_scroll`
fn indicator_log(log: Vec<String>) -> Vec<String> {
    log.into_iter()
        .filter(|entry| !entry.starts_with("did_scroll"))
        .collect()
}

#[test]
fn test_always_shows_once_content_overflows() {
    let (mut view, recorder) = observed_view(with_vertical(IndicatorVisibility::Always));

    assert!(view.vertical_scroll_indicator_showing());
    assert!(!view.horizontal_scroll_indicator_showing());
    assert_eq!(recorder.take(), vec!["will_show v"]);

    run_until_idle(&mut view);
    assert_eq!(recorder.take(), vec!["did_show v"]);

    // Dragging and the pointer do not matter
    view.mouse_entered();
    view.mouse_exited();
    assert!(recorder.take().is_empty());
    assert!(view.vertical_scroll_indicator_showing());
}

#[test]
fn test_always_hides_when_content_fits() {
    let (mut view, recorder) = observed_view(with_vertical(IndicatorVisibility::Always));
    run_until_idle(&mut view);
    recorder.take();

    view.set_content_size(Size::new(100.0, 300.0));
    assert!(!view.vertical_scroll_indicator_showing());
    run_until_idle(&mut view);
    assert_eq!(indicator_log(recorder.take()), vec!["will_hide v", "did_hide v"]);
}

#[test]
fn test_while_mouse_inside_follows_pointer() {
    let (mut view, recorder) =
        observed_view(with_vertical(IndicatorVisibility::WhileMouseInside));
    assert!(!view.vertical_scroll_indicator_showing());
    assert!(recorder.take().is_empty());

    view.mouse_entered();
    assert!(view.vertical_scroll_indicator_showing());
    run_until_idle(&mut view);

    view.mouse_exited();
    assert!(!view.vertical_scroll_indicator_showing());
    run_until_idle(&mut view);

    assert_eq!(
        recorder.take(),
        vec!["will_show v", "did_show v", "will_hide v", "did_hide v"]
    );
}

#[test]
fn test_quick_exit_cancels_fade_in() {
    let (mut view, recorder) =
        observed_view(with_vertical(IndicatorVisibility::WhileMouseInside));

    view.mouse_entered();
    view.tick();
    view.tick();
    view.mouse_exited();
    run_until_idle(&mut view);

    // The interrupted fade-in never completes
    assert_eq!(recorder.take(), vec!["will_show v", "will_hide v", "did_hide v"]);
}

#[test]
fn test_while_scrolling_tracks_motion() {
    let (mut view, recorder) = observed_view(with_vertical(IndicatorVisibility::WhileScrolling));
    assert!(recorder.take().is_empty());

    view.begin_drag(ms(0));
    // Nothing has moved yet
    assert!(!view.vertical_scroll_indicator_showing());
    view.drag_by(Point::new(0.0, 10.0), ms(20));
    assert!(view.vertical_scroll_indicator_showing());
    view.end_drag(ms(22));

    // Still showing while the throw runs
    view.tick();
    assert!(view.vertical_scroll_indicator_showing());

    run_until_idle(&mut view);
    assert!(!view.vertical_scroll_indicator_showing());

    let log = indicator_log(recorder.take());
    assert_eq!(
        log,
        vec![
            "will_begin_dragging",
            "will_show v",
            "did_end_dragging",
            "did_show v",
            "will_hide v",
            "did_hide v",
        ]
    );
}

#[test]
fn test_while_scrolling_shows_only_dragged_axis() {
    let mut config = ScrollConfig::default();
    config.indicator.horizontal = IndicatorVisibility::WhileScrolling;
    config.indicator.vertical = IndicatorVisibility::WhileScrolling;
    let (mut view, recorder) = observed_view(config);
    view.set_content_size(Size::new(1000.0, 1000.0));
    assert!(recorder.take().is_empty());

    view.begin_drag(ms(0));
    view.drag_by(Point::new(0.0, 20.0), ms(16));
    assert!(view.vertical_scroll_indicator_showing());
    assert!(!view.horizontal_scroll_indicator_showing());

    // Once the drag turns sideways the horizontal axis joins in
    view.drag_by(Point::new(15.0, 0.0), ms(32));
    assert!(view.horizontal_scroll_indicator_showing());
    assert!(view.vertical_scroll_indicator_showing());

    assert_eq!(
        indicator_log(recorder.take()),
        vec!["will_begin_dragging", "will_show v", "will_show h"]
    );
}

#[test]
fn test_did_scroll_sees_updated_state() {
    let (mut view, recorder) = observed_view(with_vertical(IndicatorVisibility::WhileScrolling));

    view.drag_by(Point::new(0.0, 25.0), ms(16));
    let log = recorder.take();

    // Indicator notifications precede did_scroll, which reads the new offset
    // and the already-updated indicator state
    assert_eq!(
        log,
        vec!["will_begin_dragging", "will_show v", "did_scroll 25 true"]
    );
}

#[test]
fn test_drag_notifications_bracket_gesture() {
    let (mut view, recorder) = observed_view(with_vertical(IndicatorVisibility::Never));

    view.begin_drag(ms(0));
    view.drag_by(Point::new(0.0, 5.0), ms(16));
    view.drag_by(Point::new(0.0, 5.0), ms(32));
    view.end_drag(ms(500));

    assert_eq!(
        recorder.take(),
        vec![
            "will_begin_dragging",
            "did_scroll 5 false",
            "did_scroll 10 false",
            "did_end_dragging",
        ]
    );
}

#[test]
fn test_flash_overrides_never() {
    let (mut view, recorder) = observed_view(with_vertical(IndicatorVisibility::Never));

    view.flash_scroll_indicators();
    assert!(view.vertical_scroll_indicator_showing());
    // Horizontal content fits, so that axis never flashes
    assert!(!view.horizontal_scroll_indicator_showing());
    assert!(view.is_animating());

    run_until_idle(&mut view);
    assert!(!view.vertical_scroll_indicator_showing());
    assert_eq!(
        recorder.take(),
        vec!["will_show v", "did_show v", "will_hide v", "did_hide v"]
    );
}

#[test]
fn test_policy_change_applies_immediately() {
    let (mut view, recorder) = observed_view(with_vertical(IndicatorVisibility::Never));

    view.set_vertical_scroll_indicator_visibility(IndicatorVisibility::Always);
    assert_eq!(
        view.vertical_scroll_indicator_visibility(),
        IndicatorVisibility::Always
    );
    assert!(view.vertical_scroll_indicator_showing());
    assert_eq!(recorder.take(), vec!["will_show v"]);
}

#[test]
fn test_dropped_delegate_is_skipped() {
    let (mut view, recorder) = observed_view(with_vertical(IndicatorVisibility::Always));
    drop(recorder);

    view.drag_by(Point::new(0.0, 40.0), ms(16));
    view.end_drag(ms(20));
    run_until_idle(&mut view);
    assert!(view.content_offset().y > 40.0);
}

#[test]
fn test_cleared_delegate_stops_notifications() {
    let (mut view, recorder) = observed_view(with_vertical(IndicatorVisibility::Never));
    view.clear_delegate();

    view.set_content_offset(Point::new(0.0, 100.0), false);
    assert!(recorder.take().is_empty());
}
