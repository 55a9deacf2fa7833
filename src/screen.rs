//! The demo screen: a scroll container holding the timeline, its selection
//! buttons, and a form for inserting random rows.

use log::{info, warn};
use rand::Rng;
use std::time::Duration;

use crate::config::Config;
use crate::gesture::{GestureDetector, GestureState};
use crate::input::TouchEvent;
use crate::timeline::Timeline;
use crate::{Error, Result};

/// Parses the row-insertion form.
///
/// A blank field means `default`. Anything else must be a positive whole
/// number.
pub fn parse_row_count(text: &str, default: usize) -> Result<usize> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(default);
    }
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::RowCount(text.to_owned())),
    }
}

/// Screen state outside the chart itself.
#[derive(Debug, Clone)]
pub struct Screen {
    config: Config,
    /// Timeline model.
    pub timeline: Timeline,
    detector: GestureDetector,
    /// Whether the page scrolls. Disabled while a finger is on the chart so
    /// that chart gestures do not also scroll the page.
    allow_scroll: bool,
    /// Whether the timeline is shown at all.
    display_timeline: bool,
    /// Contents of the row-insertion text field.
    row_input: String,
}
impl Screen {
    /// Returns a screen with a freshly populated timeline.
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        Self {
            config: config.clone(),
            timeline: Timeline::new(config.timeline, rng),
            detector: GestureDetector::new(config.gesture),
            allow_scroll: true,
            display_timeline: true,
            row_input: String::new(),
        }
    }

    /// Returns whether the page currently scrolls.
    pub fn allow_scroll(&self) -> bool {
        self.allow_scroll
    }
    /// Returns whether the timeline is shown.
    pub fn display_timeline(&self) -> bool {
        self.display_timeline
    }
    /// Returns the contents of the row-insertion field.
    pub fn row_input(&self) -> &str {
        &self.row_input
    }
    /// Returns the chart's gesture state.
    pub fn gesture_state(&self) -> GestureState {
        self.detector.state()
    }

    /// Routes a touch on the chart.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> GestureState {
        if !self.display_timeline {
            return self.detector.state();
        }
        match event {
            TouchEvent::Start(_) => self.allow_scroll = false,
            TouchEvent::End(_) => self.allow_scroll = true,
            TouchEvent::Move(_) | TouchEvent::Pinch(_) => (),
        }
        self.detector.dispatch(event, &mut self.timeline)
    }

    /// Shows or hides the timeline.
    ///
    /// Hiding abandons any interaction in progress and unlocks scrolling.
    /// Showing it again starts over with a new timeline: stopped, unzoomed
    /// and holding fresh random rows.
    pub fn toggle_timeline<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.display_timeline = !self.display_timeline;
        if self.display_timeline {
            self.timeline = Timeline::new(self.config.timeline, rng);
            info!("timeline shown");
        } else {
            self.detector = GestureDetector::new(self.config.gesture);
            self.allow_scroll = true;
            info!("timeline hidden");
        }
    }

    /// Handles the "Prev" button.
    pub fn select_prev(&mut self) {
        self.timeline.select_prev();
    }
    /// Handles the "Next" button.
    pub fn select_next(&mut self) {
        self.timeline.select_next();
    }
    /// Handles a tap on the play button.
    pub fn press_play(&mut self) {
        self.timeline.transport_mut().press();
    }
    /// Handles a long press on the play button.
    pub fn long_press_play(&mut self) {
        self.timeline.transport_mut().long_press();
    }
    /// Advances playback by one frame. Nothing plays while hidden.
    pub fn tick(&mut self, dt: Duration) {
        if !self.display_timeline {
            return;
        }
        self.timeline.transport_mut().advance(dt);
    }

    /// Replaces the contents of the row-insertion field.
    pub fn set_row_input(&mut self, text: impl Into<String>) {
        self.row_input = text.into();
    }
    /// Handles the "Add Data" button. Returns the number of rows inserted.
    ///
    /// Invalid input clears the field and inserts nothing.
    pub fn insert_rows<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        let default = self.timeline.config().default_rows_to_insert;
        match parse_row_count(&self.row_input, default) {
            Ok(n) => {
                self.timeline.add_rows(n, rng);
                Ok(n)
            }
            Err(e) => {
                warn!("{}", e);
                self.row_input.clear();
                Err(e)
            }
        }
    }
}
