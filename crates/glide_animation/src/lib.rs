//! Glide Animation System
//!
//! Physics and timing primitives for scroll animation.
//!
//! # Features
//!
//! - **Spring Physics**: semi-implicit Euler springs with an iteration cap
//! - **Rubber Banding**: saturating resistance curve for over-drag
//! - **Decay**: exponential velocity decay for momentum scrolling
//! - **Tweens**: eased approach between two values over a fixed duration
//! - **Animation Clock**: a single fixed-rate (60 Hz) driver behind an abstract
//!   platform scheduler

pub mod clock;
pub mod decay;
pub mod easing;
pub mod rubber_band;
pub mod spring;
pub mod tween;

pub use clock::{AnimationClock, FrameScheduler, ManualFrameScheduler, FRAME_RATE};
pub use decay::Decay;
pub use easing::Easing;
pub use rubber_band::RubberBand;
pub use spring::{Spring, SpringConfig};
pub use tween::Tween;
