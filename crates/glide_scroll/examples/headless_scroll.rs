//! Headless Scroll Demo
//!
//! Drives a scroll view without a window: a fling that runs into the bottom
//! edge and bounces, an over-pull at the top, then an animated scroll back.
//! Every frame is logged so the physics can be followed in the terminal.
//!
//! Run with: RUST_LOG=glide_scroll=debug cargo run -p glide_scroll --example headless_scroll
//!
//! Pass a TOML file to try other settings:
//! cargo run -p glide_scroll --example headless_scroll -- scroll.toml

use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use glide_core::{Axis, Point, Size};
use glide_scroll::{IndicatorVisibility, ScrollConfig, ScrollView, ScrollViewDelegate};
use tracing_subscriber::EnvFilter;

struct Logger;

impl ScrollViewDelegate for Logger {
    fn did_scroll(&self, view: &ScrollView) {
        tracing::info!(
            "offset {:>7.1}  pull {:>6.1}  bounce {:>6.1}",
            view.content_offset().y,
            view.pull_offset().y,
            view.bounce_offset().y
        );
    }

    fn will_begin_dragging(&self, _view: &ScrollView) {
        tracing::info!("-- drag");
    }

    fn did_end_dragging(&self, view: &ScrollView) {
        tracing::info!("-- release ({:?})", view.scroll_state());
    }

    fn will_show_indicator(&self, _view: &ScrollView, axis: Axis) {
        tracing::info!("{:?} indicator fading in", axis);
    }

    fn did_hide_indicator(&self, _view: &ScrollView, axis: Axis) {
        tracing::info!("{:?} indicator hidden", axis);
    }
}

fn settle(view: &mut ScrollView) -> u32 {
    let mut frames = 0;
    while view.is_animating() {
        view.tick();
        frames += 1;
    }
    frames
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ScrollConfig::from_path(path)?,
        None => {
            let mut config = ScrollConfig::default();
            config.indicator.vertical = IndicatorVisibility::WhileScrolling;
            config
        }
    };

    let logger = Rc::new(Logger);
    let mut view = ScrollView::with_config(Size::new(320.0, 480.0), config);
    view.set_delegate(&logger);
    view.set_content_size(Size::new(320.0, 2400.0));

    // Fling toward the bottom
    let mut time = Duration::ZERO;
    view.begin_drag(time);
    for _ in 0..4 {
        time += Duration::from_millis(16);
        view.drag_by(Point::new(0.0, 60.0), time);
    }
    view.end_drag(time);
    let frames = settle(&mut view);
    tracing::info!("fling settled after {} frames at {}", frames, view.content_offset().y);

    // Pull past the top and let go
    view.set_content_offset(Point::ZERO, false);
    time += Duration::from_secs(1);
    view.begin_drag(time);
    for _ in 0..5 {
        time += Duration::from_millis(16);
        view.drag_by(Point::new(0.0, -30.0), time);
    }
    time += Duration::from_millis(300);
    view.end_drag(time);
    let frames = settle(&mut view);
    tracing::info!("bounce settled after {} frames", frames);

    // Animated jump to the end
    view.scroll_to_bottom(true);
    let frames = settle(&mut view);
    tracing::info!(
        "scrolled to bottom in {} frames, visible rect {:?}",
        frames,
        view.visible_rect()
    );

    Ok(())
}
