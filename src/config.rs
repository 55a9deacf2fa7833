//! Tunable thresholds and timeline dimensions.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::gesture::Axis;
use crate::input::throttle::DEFAULT_WINDOW;
use crate::{Error, Result};

/// Top-level configuration, loadable from JSON.
///
/// Every field has a default, so a config file only needs to mention what it
/// changes.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gesture classifier settings.
    pub gesture: GestureConfig,
    /// Timeline model settings.
    pub timeline: TimelineConfig,
}
impl Config {
    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        self.gesture.validate()?;
        self.timeline.validate()
    }
}

/// Gesture classifier settings. Distances are in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Drag distance a single finger must cover before the cursor
    /// starts following it.
    pub cursor_movement_threshold: f64,
    /// Change in finger separation that commits a pinch to zooming.
    pub zoom_on_pinch_threshold: f64,
    /// Change in finger midpoint that commits a pinch to panning.
    pub pan_on_pinch_threshold: f64,
    /// Ignore every start, move and pinch event. End events are still
    /// processed.
    pub disable: bool,
    /// Axis along which distances and positions are measured.
    pub axis: Axis,
    /// Minimum spacing between move (and between pinch) events that reach
    /// the classifier.
    #[serde(rename = "throttle_window_ms", with = "crate::input::millis")]
    pub throttle_window: Duration,
}
impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            cursor_movement_threshold: 5.0,
            zoom_on_pinch_threshold: 20.0,
            pan_on_pinch_threshold: 10.0,
            disable: false,
            axis: Axis::X,
            throttle_window: DEFAULT_WINDOW,
        }
    }
}
impl GestureConfig {
    /// Checks that every threshold is a finite, non-negative distance.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("cursor_movement_threshold", self.cursor_movement_threshold),
            ("zoom_on_pinch_threshold", self.zoom_on_pinch_threshold),
            ("pan_on_pinch_threshold", self.pan_on_pinch_threshold),
        ];
        for (name, value) in thresholds.iter() {
            if !value.is_finite() || *value < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number, not {}",
                    name, value,
                )));
            }
        }
        if self.throttle_window == Duration::ZERO {
            return Err(Error::Config(
                "throttle_window_ms must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Timeline model settings. Times are in seconds.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Length of the playback.
    pub total_time: f64,
    /// Earliest time the window can be panned to.
    pub min_time_range: f64,
    /// Latest time the window can be panned to.
    pub max_time_range: f64,
    /// End of the window shown before any zooming.
    pub default_max_time_displayed: f64,
    /// Narrowest window a pinch can zoom into.
    pub min_time_span: f64,
    /// Width of the chart's plotting area in pixels.
    pub chart_width: f64,
    /// Number of data rows shown on one page.
    pub rows_per_page: usize,
    /// Number of random rows created up front.
    pub initial_rows: usize,
    /// Rows inserted when the form is submitted empty.
    pub default_rows_to_insert: usize,
}
impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            total_time: 30.0,
            min_time_range: 0.0,
            max_time_range: 30.0,
            default_max_time_displayed: 30.0,
            min_time_span: 1.0,
            // 414 px phone width minus the 75 px play button.
            chart_width: 339.0,
            rows_per_page: 10,
            initial_rows: 5,
            default_rows_to_insert: 10,
        }
    }
}
impl TimelineConfig {
    /// Checks that the time range and dimensions are consistent.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.total_time,
            self.min_time_range,
            self.max_time_range,
            self.default_max_time_displayed,
            self.min_time_span,
            self.chart_width,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(Error::Config("timeline values must be finite".to_owned()));
        }
        if self.total_time <= 0.0 {
            return Err(Error::Config("total_time must be positive".to_owned()));
        }
        if self.min_time_range >= self.max_time_range {
            return Err(Error::Config(format!(
                "time range [{}, {}] is empty",
                self.min_time_range, self.max_time_range,
            )));
        }
        if self.default_max_time_displayed <= self.min_time_range {
            return Err(Error::Config(
                "default_max_time_displayed must be after min_time_range".to_owned(),
            ));
        }
        if self.min_time_span <= 0.0 {
            return Err(Error::Config("min_time_span must be positive".to_owned()));
        }
        if self.chart_width <= 0.0 {
            return Err(Error::Config("chart_width must be positive".to_owned()));
        }
        if self.rows_per_page == 0 {
            return Err(Error::Config("rows_per_page must be positive".to_owned()));
        }
        Ok(())
    }
}
