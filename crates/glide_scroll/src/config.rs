//! Scroll configuration
//!
//! Every value has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! bounces = true
//! deceleration_rate = 0.995
//!
//! [bounce_spring]
//! stiffness = 400.0
//!
//! [indicator]
//! vertical = "while_mouse_inside"
//! style = "light"
//! ```

use std::path::Path;

use glide_animation::decay::{MAX_RATE, MIN_RATE};
use glide_animation::{Decay, Easing, SpringConfig};
use glide_core::Axis;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

// ============================================================================
// Indicator Types
// ============================================================================

/// When a scroll indicator is shown
///
/// Indicators are never shown on an axis whose content fits in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorVisibility {
    /// Never show the indicator
    Never,
    /// Show only while the content is dragged or animating
    WhileScrolling,
    /// Show only while the pointer is inside the scroll view
    WhileMouseInside,
    /// Always show the indicator
    #[default]
    Always,
}

/// Indicator appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStyle {
    /// Dark indicator for light backgrounds
    #[default]
    Dark,
    /// Light indicator for dark backgrounds
    Light,
}

/// Scroll indicator configuration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub horizontal: IndicatorVisibility,
    pub vertical: IndicatorVisibility,
    pub style: IndicatorStyle,
    /// Space an indicator takes from the visible rect
    pub thickness: f64,
    /// Show/hide fade duration in seconds
    pub fade_duration: f64,
    /// How long a flash keeps indicators up, in seconds
    pub flash_duration: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            horizontal: IndicatorVisibility::Always,
            vertical: IndicatorVisibility::Always,
            style: IndicatorStyle::Dark,
            thickness: 12.0,
            fade_duration: 0.25,
            flash_duration: 1.0,
        }
    }
}

impl IndicatorConfig {
    pub fn visibility(&self, axis: Axis) -> IndicatorVisibility {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    pub fn set_visibility(&mut self, axis: Axis, visibility: IndicatorVisibility) {
        match axis {
            Axis::Horizontal => self.horizontal = visibility,
            Axis::Vertical => self.vertical = visibility,
        }
    }
}

/// Edge auto-scroll configuration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContinuousScrollConfig {
    /// Distance from an edge inside which auto-scroll kicks in
    pub edge_zone: f64,
    /// Speed (points per second) when the drag point sits on the edge
    pub max_speed: f64,
}

impl Default for ContinuousScrollConfig {
    fn default() -> Self {
        Self {
            edge_zone: 40.0,
            max_speed: 1200.0,
        }
    }
}

// ============================================================================
// Scroll Configuration
// ============================================================================

/// Configuration for scroll behavior
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Whether scrolling responds to drags at all
    pub scroll_enabled: bool,
    /// Enable rubber banding and bounce at edges
    pub bounces: bool,
    /// Allow vertical rubber banding even when content fits
    pub always_bounce_vertical: bool,
    /// Allow horizontal rubber banding even when content fits
    pub always_bounce_horizontal: bool,
    /// Fraction of throw velocity kept per millisecond
    pub deceleration_rate: f64,
    /// Rubber-band resistance constant (initial slope of the curve)
    pub rubber_band_resistance: f64,
    /// Spring used to return an over-scrolled axis to its bound
    pub bounce_spring: SpringConfig,
    /// Throw stops once velocity falls below this (points per second)
    pub velocity_threshold: f64,
    /// A release this long after the last drag sample does not throw (seconds)
    pub release_timeout: f64,
    /// Easing used by animated offset changes
    pub animation_easing: Easing,
    pub indicator: IndicatorConfig,
    pub continuous: ContinuousScrollConfig,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scroll_enabled: true,
            bounces: true,
            always_bounce_vertical: false,
            always_bounce_horizontal: false,
            deceleration_rate: Decay::NORMAL,
            rubber_band_resistance: 0.55,
            bounce_spring: SpringConfig::bounce(),
            velocity_threshold: 10.0,
            release_timeout: 0.1,
            animation_easing: Easing::EaseOutCubic,
            indicator: IndicatorConfig::default(),
            continuous: ContinuousScrollConfig::default(),
        }
    }
}

impl ScrollConfig {
    /// Create config with bounce disabled
    pub fn no_bounce() -> Self {
        Self {
            bounces: false,
            ..Default::default()
        }
    }

    /// Create config with stiff bounce (less travel)
    pub fn stiff_bounce() -> Self {
        Self {
            bounce_spring: SpringConfig::stiff(),
            ..Default::default()
        }
    }

    /// Create config with gentle bounce (more wobbly)
    pub fn gentle_bounce() -> Self {
        Self {
            bounce_spring: SpringConfig::gentle(),
            ..Default::default()
        }
    }

    pub fn always_bounce(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.always_bounce_horizontal,
            Axis::Vertical => self.always_bounce_vertical,
        }
    }

    /// Parse and validate a TOML config
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: ScrollConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config.normalized())
    }

    /// Load a TOML config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Reject values that cannot describe a working scroll view
    pub fn validate(&self) -> Result<()> {
        if !(MIN_RATE..=MAX_RATE).contains(&self.deceleration_rate) {
            return Err(ConfigError::Invalid(format!(
                "deceleration_rate must be in [{MIN_RATE}, {MAX_RATE}], got {}",
                self.deceleration_rate
            )));
        }
        if !(self.rubber_band_resistance > 0.0 && self.rubber_band_resistance.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "rubber_band_resistance must be positive, got {}",
                self.rubber_band_resistance
            )));
        }
        let spring = self.bounce_spring;
        if !(spring.stiffness > 0.0 && spring.damping > 0.0 && spring.mass > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "bounce_spring parameters must be positive, got {spring:?}"
            )));
        }
        let non_negative = [
            ("velocity_threshold", self.velocity_threshold),
            ("release_timeout", self.release_timeout),
            ("indicator.thickness", self.indicator.thickness),
            ("indicator.fade_duration", self.indicator.fade_duration),
            ("indicator.flash_duration", self.indicator.flash_duration),
            ("continuous.edge_zone", self.continuous.edge_zone),
            ("continuous.max_speed", self.continuous.max_speed),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Clamp every value into its working range. Used for configs built in
    /// code, which never fail.
    pub fn normalized(mut self) -> Self {
        self.deceleration_rate = Decay::normalize_rate(self.deceleration_rate);
        debug_assert!((MIN_RATE..=MAX_RATE).contains(&self.deceleration_rate));
        if !(self.rubber_band_resistance > 0.0 && self.rubber_band_resistance.is_finite()) {
            self.rubber_band_resistance = Self::default().rubber_band_resistance;
        }
        self.bounce_spring = self.bounce_spring.normalized();
        let clean = |value: f64| if value.is_finite() { value.max(0.0) } else { 0.0 };
        self.velocity_threshold = clean(self.velocity_threshold);
        self.release_timeout = clean(self.release_timeout);
        self.indicator.thickness = clean(self.indicator.thickness);
        self.indicator.fade_duration = clean(self.indicator.fade_duration);
        self.indicator.flash_duration = clean(self.indicator.flash_duration);
        self.continuous.edge_zone = clean(self.continuous.edge_zone);
        self.continuous.max_speed = clean(self.continuous.max_speed);
        self
    }
}
