//! Fixed-rate animation clock
//!
//! A single periodic driver ticks every active scroll animation at 60 Hz. The
//! platform timer itself sits behind [`FrameScheduler`]; the clock only
//! decides when that timer should run and hands out the fixed step.
//!
//! The clock is owned by exactly one widget. Once invalidated it never starts
//! again and ignores late ticks.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Tick rate of every animation clock
pub const FRAME_RATE: u32 = 60;

/// Platform timer driving an [`AnimationClock`]
///
/// Implementations call back into the owner (e.g. `ScrollView::tick`) once per
/// interval while started.
pub trait FrameScheduler {
    /// Begin firing every `interval`
    fn start(&mut self, interval: Duration);

    /// Stop firing; may be called while already stopped
    fn stop(&mut self);

    /// Release the timer for good
    fn invalidate(&mut self);
}

/// The animation clock
pub struct AnimationClock {
    scheduler: Box<dyn FrameScheduler>,
    target_fps: u32,
    running: bool,
    invalidated: bool,
    ticks: u64,
}

impl AnimationClock {
    pub fn new(scheduler: Box<dyn FrameScheduler>) -> Self {
        Self {
            scheduler,
            target_fps: FRAME_RATE,
            running: false,
            invalidated: false,
            ticks: 0,
        }
    }

    /// Tick interval
    pub fn interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps
    }

    /// Fixed step in seconds
    pub fn dt(&self) -> f64 {
        1.0 / self.target_fps as f64
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Total ticks delivered since creation
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Start the platform timer if it is not already running
    pub fn start(&mut self) {
        if self.running || self.invalidated {
            return;
        }
        tracing::debug!("animation clock started ({} Hz)", self.target_fps);
        self.running = true;
        let interval = self.interval();
        self.scheduler.start(interval);
    }

    /// Stop the platform timer; a no-op when already stopped
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        tracing::debug!("animation clock stopped after {} ticks", self.ticks);
        self.running = false;
        self.scheduler.stop();
    }

    /// Stop and release the platform timer. Only the first call has an effect.
    pub fn invalidate(&mut self) {
        if self.invalidated {
            return;
        }
        self.stop();
        self.invalidated = true;
        self.scheduler.invalidate();
    }

    /// Accept a timer callback. Returns the step to integrate, or `None` for a
    /// stray tick while stopped or after invalidation.
    pub fn begin_tick(&mut self) -> Option<f64> {
        if !self.running || self.invalidated {
            tracing::trace!("ignoring tick on inactive clock");
            return None;
        }
        self.ticks += 1;
        Some(self.dt())
    }
}

impl std::fmt::Debug for AnimationClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationClock")
            .field("target_fps", &self.target_fps)
            .field("running", &self.running)
            .field("invalidated", &self.invalidated)
            .field("ticks", &self.ticks)
            .finish()
    }
}

// ============================================================================
// Manual scheduler
// ============================================================================

#[derive(Debug, Default)]
struct ManualState {
    running: bool,
    interval: Option<Duration>,
    starts: u32,
    stops: u32,
    invalidations: u32,
}

/// Scheduler for hosts that poll: it records requests instead of owning a
/// timer. Clones share state, so a host can keep a handle while the clock
/// owns the other.
#[derive(Debug, Clone, Default)]
pub struct ManualFrameScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the owner currently wants ticks
    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    pub fn interval(&self) -> Option<Duration> {
        self.state.borrow().interval
    }

    pub fn start_count(&self) -> u32 {
        self.state.borrow().starts
    }

    pub fn stop_count(&self) -> u32 {
        self.state.borrow().stops
    }

    pub fn invalidate_count(&self) -> u32 {
        self.state.borrow().invalidations
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn start(&mut self, interval: Duration) {
        let mut state = self.state.borrow_mut();
        state.running = true;
        state.interval = Some(interval);
        state.starts += 1;
    }

    fn stop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.running = false;
        state.stops += 1;
    }

    fn invalidate(&mut self) {
        let mut state = self.state.borrow_mut();
        state.running = false;
        state.invalidations += 1;
    }
}
