use std::fmt;

use crate::config::TimelineConfig;

/// Minimum chart width, to avoid divide-by-zero errors.
const MIN_WIDTH: f64 = 1.0;

/// Closed interval of time, in seconds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Domain {
    /// Earliest time.
    pub start: f64,
    /// Latest time.
    pub end: f64,
}
impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.start, self.end)
    }
}
impl Domain {
    /// Returns the interval from `start` to `end`.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
    /// Returns the length of the interval.
    pub fn span(self) -> f64 {
        self.end - self.start
    }
    /// Returns the middle of the interval.
    pub fn midpoint(self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Visible time window of the chart.
///
/// Pixel positions are measured from the left edge of the plotting area.
/// The window never leaves `bounds` and is never narrower than the minimum
/// span; pans and zooms that would violate either are clamped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    /// Range the window can be panned and zoomed within.
    bounds: Domain,
    /// Currently visible range.
    window: Domain,
    /// Width of the plotting area in pixels.
    width: f64,
    /// Narrowest allowed window.
    min_span: f64,
}
impl Viewport {
    /// Returns the initial, unzoomed viewport for a timeline.
    pub fn new(config: &TimelineConfig) -> Self {
        let bounds = Domain::new(config.min_time_range, config.max_time_range);
        let mut ret = Self {
            bounds,
            window: bounds,
            width: config.chart_width.max(MIN_WIDTH),
            min_span: config.min_time_span,
        };
        ret.set_window(
            config.min_time_range,
            config.default_max_time_displayed - config.min_time_range,
        );
        ret
    }

    /// Returns the range the window can move within.
    pub fn bounds(self) -> Domain {
        self.bounds
    }
    /// Returns the currently visible range.
    pub fn window(self) -> Domain {
        self.window
    }
    /// Returns the width of the plotting area in pixels.
    pub fn width(self) -> f64 {
        self.width
    }
    /// Sets the width of the plotting area in pixels.
    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(MIN_WIDTH);
    }

    /// Returns the time under a pixel position.
    pub fn value_at(self, px: f64) -> f64 {
        self.window.start + px / self.width * self.window.span()
    }
    /// Returns the pixel position of a time.
    pub fn pixel_of(self, value: f64) -> f64 {
        (value - self.window.start) / self.window.span() * self.width
    }

    /// Drags the window so that the time under `from` ends up under `to`.
    pub fn pan_by_pixels(&mut self, from: f64, to: f64) {
        if !(from.is_finite() && to.is_finite()) {
            return;
        }
        let span = self.window.span();
        let shift = (from - to) / self.width * span;
        self.set_window(self.window.start + shift, span);
    }

    /// Rescales the window by the ratio of two finger separations, keeping
    /// the time under `center` at the same pixel position.
    ///
    /// Fingers moving apart (`to_distance > from_distance`) zoom in. Returns
    /// `false` if the distances cannot describe a zoom.
    pub fn zoom_by_pixels(&mut self, from_distance: f64, to_distance: f64, center: f64) -> bool {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        if !(valid(from_distance) && valid(to_distance) && center.is_finite()) {
            return false;
        }
        let invariant_value = self.value_at(center);
        let new_span = self.clamp_span(self.window.span() * from_distance / to_distance);
        // Place the invariant time back under the same pixel.
        let new_start = invariant_value - center / self.width * new_span;
        self.set_window(new_start, new_span);
        true
    }

    fn clamp_span(self, span: f64) -> f64 {
        span.max(self.min_span).min(self.bounds.span())
    }

    /// Sets the window, clamping its span and then sliding it back inside
    /// the bounds.
    fn set_window(&mut self, start: f64, span: f64) {
        let span = self.clamp_span(span);
        let start = start.max(self.bounds.start).min(self.bounds.end - span);
        self.window = Domain::new(start, start + span);
    }
}
