//! Classification of touch interactions into cursor, pan and zoom gestures.
//!
//! One interaction lasts from the first finger touching down to the last
//! finger lifting. During it the classifier commits to at most one of three
//! gestures:
//!
//! - **Cursor**: a single finger dragged past `cursor_movement_threshold`.
//! - **Pan**: two fingers whose midpoint moved past `pan_on_pinch_threshold`.
//! - **Zoom**: two fingers whose separation changed past
//!   `zoom_on_pinch_threshold`. Zoom is checked first, so it wins when both
//!   pinch thresholds are crossed by the same event.
//!
//! Once committed, the gesture sticks until the next end event. A second
//! finger arriving during a cursor drag makes the whole interaction
//! [`GestureState::Invalid`], which ignores everything until release.

use cgmath::Point2;
use log::debug;
use std::fmt;

mod detector;
mod pinch;

pub use detector::{GestureDetector, GestureTarget};
pub use pinch::{first_two, pinch_distance, pinch_position, Axis};

use crate::config::GestureConfig;
use crate::input::{TouchEvent, TouchFrame, TouchPoint};

/// Classifier state for the current interaction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// No gesture recognized yet.
    Ready,
    /// Single-finger cursor drag.
    Cursor,
    /// Two fingers down, not yet known whether panning or zooming.
    PanOrZoom,
    /// Two-finger pan.
    Pan,
    /// Two-finger pinch zoom.
    Zoom,
    /// Rejected interaction; everything is ignored until release.
    Invalid,
}
impl Default for GestureState {
    fn default() -> Self {
        GestureState::Ready
    }
}
impl fmt::Display for GestureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GestureState::Ready => "READY",
            GestureState::Cursor => "CURSOR",
            GestureState::PanOrZoom => "PAN_OR_ZOOM",
            GestureState::Pan => "PAN",
            GestureState::Zoom => "ZOOM",
            GestureState::Invalid => "INVALID",
        };
        write!(f, "{}", s)
    }
}
impl GestureState {
    /// Returns `true` for the states that mutate the timeline.
    pub fn is_committed(self) -> bool {
        matches!(
            self,
            GestureState::Cursor | GestureState::Pan | GestureState::Zoom,
        )
    }
}

/// Measurements carried between events of one interaction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GestureContext {
    /// Whether a second finger has been seen since the interaction started.
    pub multi_touched: bool,
    /// Position of the finger that started the interaction.
    pub start: TouchPoint,
    /// Finger separation when the second finger was first seen.
    pub pinch_distance0: f64,
    /// Finger midpoint when the second finger was first seen.
    pub pinch_position0: f64,
    /// Finger separation at the last emitted pan or zoom.
    pub last_pinch_distance: f64,
    /// Finger midpoint at the last emitted pan or zoom.
    pub last_pinch_position: f64,
}
impl Default for GestureContext {
    fn default() -> Self {
        Self {
            multi_touched: false,
            start: Point2::new(0.0, 0.0),
            pinch_distance0: 0.0,
            pinch_position0: 0.0,
            last_pinch_distance: 0.0,
            last_pinch_position: 0.0,
        }
    }
}

/// Two-finger pan, as the finger midpoint before and after, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanDelta {
    /// Previous midpoint.
    pub from: f64,
    /// Current midpoint.
    pub to: f64,
}

/// Pinch zoom, as the finger separation before and after, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomDelta {
    /// Previous separation.
    pub from_distance: f64,
    /// Current separation.
    pub to_distance: f64,
    /// Current midpoint.
    pub center: f64,
}

/// High-level action produced by the classifier.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Intent {
    /// A new interaction started at this position.
    TouchStart(f64),
    /// Move the playhead cursor to this position.
    CursorMove(f64),
    /// Shift the visible window.
    PanDelta(PanDelta),
    /// Rescale the visible window.
    ZoomDelta(ZoomDelta),
}
impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::TouchStart(x) => write!(f, "touch start at {:.1}", x),
            Intent::CursorMove(x) => write!(f, "cursor to {:.1}", x),
            Intent::PanDelta(d) => write!(f, "pan {:.1} -> {:.1}", d.from, d.to),
            Intent::ZoomDelta(d) => write!(
                f,
                "zoom {:.1} -> {:.1} around {:.1}",
                d.from_distance, d.to_distance, d.center,
            ),
        }
    }
}

/// State of one interaction: the gesture state plus its measurements.
///
/// This is a plain value. [`Gesture::advance()`] consumes it and returns the
/// successor, so an event is always applied to a fully updated gesture.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Gesture {
    /// Current classification.
    pub state: GestureState,
    /// Measurements backing the classification.
    pub context: GestureContext,
}
impl Gesture {
    /// Returns a gesture waiting for the first touch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event and returns the new gesture along with the intents
    /// to forward to the timeline.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn advance(self, event: &TouchEvent, config: &GestureConfig) -> (Self, Vec<Intent>) {
        let mut next = self;
        let mut intents = vec![];
        match event {
            TouchEvent::End(frame) => next.end(frame, config, &mut intents),
            _ if config.disable => (),
            TouchEvent::Start(frame) => next.start(frame, config, &mut intents),
            TouchEvent::Move(frame) => next.drag(frame, config, &mut intents),
            TouchEvent::Pinch(frame) => next.pinch(frame, config, &mut intents),
        }
        (next, intents)
    }

    fn start(&mut self, frame: &TouchFrame, config: &GestureConfig, intents: &mut Vec<Intent>) {
        self.state = GestureState::Ready;
        self.context.multi_touched = false;
        match frame.touches.first() {
            Some(&p) => {
                self.context.start = p;
                intents.push(Intent::TouchStart(config.axis.coord(p)));
            }
            None => debug!("touch start without any touches"),
        }
    }

    fn drag(&mut self, frame: &TouchFrame, config: &GestureConfig, intents: &mut Vec<Intent>) {
        let axis = config.axis;
        match self.state {
            // Some platforms follow every pinch with a move carrying both
            // fingers. Those must not drag the cursor.
            GestureState::Ready | GestureState::Cursor if frame.touches.len() > 1 => (),

            GestureState::Ready => {
                let p = match frame.touches.first() {
                    Some(&p) => p,
                    None => {
                        debug!("touch move without any touches");
                        return;
                    }
                };
                let distance_moved = (axis.coord(self.context.start) - axis.coord(p)).abs();
                if distance_moved >= config.cursor_movement_threshold {
                    self.state = GestureState::Cursor;
                    intents.push(Intent::CursorMove(axis.coord(p)));
                }
            }
            GestureState::Cursor => {
                if let Some(&p) = frame.touches.first() {
                    intents.push(Intent::CursorMove(axis.coord(p)));
                }
            }

            // Stray single-finger moves during a pinch.
            GestureState::PanOrZoom
            | GestureState::Pan
            | GestureState::Zoom
            | GestureState::Invalid => (),
        }
    }

    fn pinch(&mut self, frame: &TouchFrame, config: &GestureConfig, intents: &mut Vec<Intent>) {
        let (p0, p1) = match first_two(&frame.touches) {
            Some(pair) => pair,
            None => {
                debug!("pinch with {} touches ignored", frame.touches.len());
                return;
            }
        };
        let distance = pinch_distance(config.axis, p0, p1);
        let position = pinch_position(config.axis, p0, p1);

        self.context.multi_touched = true;
        match self.state {
            GestureState::Ready => {
                self.state = GestureState::PanOrZoom;
                self.context.pinch_distance0 = distance;
                self.context.pinch_position0 = position;
                self.context.last_pinch_distance = distance;
                self.context.last_pinch_position = position;
            }
            GestureState::Cursor => self.state = GestureState::Invalid,
            GestureState::PanOrZoom => {
                let zoomed = (distance - self.context.pinch_distance0).abs();
                let panned = (position - self.context.pinch_position0).abs();
                if zoomed > config.zoom_on_pinch_threshold {
                    self.state = GestureState::Zoom;
                    intents.push(self.zoom_to(distance, position));
                } else if panned > config.pan_on_pinch_threshold {
                    self.state = GestureState::Pan;
                    intents.push(self.pan_to(distance, position));
                }
            }
            GestureState::Pan => intents.push(self.pan_to(distance, position)),
            GestureState::Zoom => intents.push(self.zoom_to(distance, position)),
            GestureState::Invalid => (),
        }
    }

    fn end(&mut self, frame: &TouchFrame, config: &GestureConfig, intents: &mut Vec<Intent>) {
        self.state = GestureState::Ready;
        if frame.touches.len() < 2 && !self.context.multi_touched {
            // Some platforms only report the lifted finger in the changed
            // touches.
            let touches = if frame.touches.is_empty() {
                &frame.changed_touches
            } else {
                &frame.touches
            };
            if let Some(&p) = touches.first() {
                intents.push(Intent::CursorMove(config.axis.coord(p)));
            }
        }
    }

    fn pan_to(&mut self, distance: f64, position: f64) -> Intent {
        let delta = PanDelta {
            from: self.context.last_pinch_position,
            to: position,
        };
        self.context.last_pinch_distance = distance;
        self.context.last_pinch_position = position;
        Intent::PanDelta(delta)
    }
    fn zoom_to(&mut self, distance: f64, position: f64) -> Intent {
        let delta = ZoomDelta {
            from_distance: self.context.last_pinch_distance,
            to_distance: distance,
            center: position,
        };
        self.context.last_pinch_distance = distance;
        self.context.last_pinch_position = position;
        Intent::ZoomDelta(delta)
    }
}

/// Owns the [`Gesture`] of the active interaction.
#[derive(Debug, Default, Clone)]
pub struct GestureClassifier {
    config: GestureConfig,
    gesture: Gesture,
}
impl GestureClassifier {
    /// Returns a classifier waiting for the first touch.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            gesture: Gesture::new(),
        }
    }

    /// Returns the classifier's configuration.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }
    /// Returns the gesture of the active interaction.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }
    /// Returns the current gesture state.
    pub fn state(&self) -> GestureState {
        self.gesture.state
    }

    /// Applies one event and returns the resulting intents.
    pub fn handle(&mut self, event: &TouchEvent) -> Vec<Intent> {
        let (next, intents) = self.gesture.advance(event, &self.config);
        if next.state != self.gesture.state {
            debug!(
                "gesture {} -> {} on {}",
                self.gesture.state,
                next.state,
                event.name(),
            );
        }
        self.gesture = next;
        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GestureState::*;

    fn pan(from: f64, to: f64) -> Intent {
        Intent::PanDelta(PanDelta { from, to })
    }
    fn zoom(from_distance: f64, to_distance: f64, center: f64) -> Intent {
        Intent::ZoomDelta(ZoomDelta {
            from_distance,
            to_distance,
            center,
        })
    }

    /// Feeds events one at a time, returning the classifier and every
    /// intent emitted along the way.
    fn run(config: GestureConfig, events: &[TouchEvent]) -> (GestureClassifier, Vec<Intent>) {
        let mut classifier = GestureClassifier::new(config);
        let intents = events.iter().flat_map(|e| classifier.handle(e)).collect();
        (classifier, intents)
    }

    /// Returns a classifier that has committed to `state`.
    fn in_state(state: GestureState) -> GestureClassifier {
        let events = match state {
            Ready => vec![],
            Cursor => vec![
                TouchEvent::start(0, &[(0.0, 0.0)]),
                TouchEvent::move_to(1, &[(50.0, 0.0)]),
            ],
            PanOrZoom => vec![
                TouchEvent::start(0, &[(0.0, 0.0)]),
                TouchEvent::pinch(1, &[(0.0, 0.0), (100.0, 0.0)]),
            ],
            Pan => vec![
                TouchEvent::start(0, &[(0.0, 0.0)]),
                TouchEvent::pinch(1, &[(0.0, 0.0), (100.0, 0.0)]),
                TouchEvent::pinch(2, &[(30.0, 0.0), (130.0, 0.0)]),
            ],
            Zoom => vec![
                TouchEvent::start(0, &[(0.0, 0.0)]),
                TouchEvent::pinch(1, &[(0.0, 0.0), (100.0, 0.0)]),
                TouchEvent::pinch(2, &[(0.0, 0.0), (150.0, 0.0)]),
            ],
            Invalid => vec![
                TouchEvent::start(0, &[(0.0, 0.0)]),
                TouchEvent::move_to(1, &[(50.0, 0.0)]),
                TouchEvent::pinch(2, &[(50.0, 0.0), (100.0, 0.0)]),
            ],
        };
        let (classifier, _) = run(GestureConfig::default(), &events);
        assert_eq!(classifier.state(), state);
        classifier
    }

    const ALL_STATES: [GestureState; 6] = [Ready, Cursor, PanOrZoom, Pan, Zoom, Invalid];

    #[test]
    fn test_end_always_resets() {
        for &state in &ALL_STATES {
            for end in &[
                TouchEvent::end(10, &[]),
                TouchEvent::end(10, &[(1.0, 1.0)]),
                TouchEvent::end(10, &[(1.0, 1.0), (2.0, 2.0)]),
                TouchEvent::end(10, &[]).with_changed(&[(3.0, 3.0)]),
            ] {
                let mut classifier = in_state(state);
                classifier.handle(end);
                assert_eq!(classifier.state(), Ready, "end from {}", state);
            }
        }
    }

    #[test]
    fn test_committed_gesture_sticks() {
        let noise = [
            TouchEvent::move_to(10, &[(400.0, 0.0)]),
            TouchEvent::move_to(11, &[(-400.0, 0.0)]),
            TouchEvent::move_to(12, &[(0.0, 0.0), (300.0, 0.0)]),
            TouchEvent::pinch(13, &[(0.0, 0.0), (500.0, 0.0)]),
            TouchEvent::pinch(14, &[(200.0, 0.0), (210.0, 0.0)]),
            TouchEvent::pinch(15, &[(-300.0, 0.0), (-100.0, 0.0)]),
        ];
        for &state in &[Cursor, Pan, Zoom] {
            let mut classifier = in_state(state);
            for event in &noise {
                classifier.handle(event);
                let now = classifier.state();
                assert!(
                    now == state || !now.is_committed(),
                    "{} turned into {}",
                    state,
                    now,
                );
            }
        }
    }

    #[test]
    fn test_zoom_wins_over_pan() {
        let mut classifier = in_state(PanOrZoom);
        // Separation 100 -> 200 and midpoint 50 -> 200.
        let intents = classifier.handle(&TouchEvent::pinch(5, &[(100.0, 0.0), (300.0, 0.0)]));
        assert_eq!(classifier.state(), Zoom);
        assert_eq!(intents, vec![zoom(100.0, 200.0, 200.0)]);
    }

    #[test]
    fn test_pan_or_zoom_below_thresholds() {
        let mut classifier = in_state(PanOrZoom);
        // Separation changes by exactly 20 and midpoint by exactly 10, which
        // does not exceed either threshold.
        let intents = classifier.handle(&TouchEvent::pinch(5, &[(0.0, 0.0), (120.0, 0.0)]));
        assert_eq!(classifier.state(), PanOrZoom);
        assert!(intents.is_empty());

        let intents = classifier.handle(&TouchEvent::pinch(6, &[(11.0, 0.0), (111.0, 0.0)]));
        assert_eq!(classifier.state(), Pan);
        assert_eq!(intents, vec![pan(50.0, 61.0)]);
    }

    #[test]
    fn test_cursor_threshold() {
        let config = GestureConfig::default();
        let (mut classifier, intents) = run(
            config,
            &[
                TouchEvent::start(0, &[(100.0, 40.0)]),
                TouchEvent::move_to(50, &[(104.0, 90.0)]),
            ],
        );
        assert_eq!(classifier.state(), Ready);
        assert_eq!(intents, vec![Intent::TouchStart(100.0)]);

        let intents = classifier.handle(&TouchEvent::move_to(100, &[(106.0, 40.0)]));
        assert_eq!(classifier.state(), Cursor);
        assert_eq!(intents, vec![Intent::CursorMove(106.0)]);

        let intents = classifier.handle(&TouchEvent::move_to(150, &[(101.0, 40.0)]));
        assert_eq!(classifier.state(), Cursor);
        assert_eq!(intents, vec![Intent::CursorMove(101.0)]);
    }

    #[test]
    fn test_pinch_during_cursor_is_rejected() {
        let mut classifier = in_state(Cursor);
        let intents = classifier.handle(&TouchEvent::pinch(5, &[(50.0, 0.0), (90.0, 0.0)]));
        assert_eq!(classifier.state(), Invalid);
        assert!(intents.is_empty());
        assert!(classifier.gesture().context.multi_touched);

        // Everything is ignored until release, including the final cursor.
        for event in &[
            TouchEvent::move_to(6, &[(80.0, 0.0)]),
            TouchEvent::pinch(7, &[(0.0, 0.0), (300.0, 0.0)]),
            TouchEvent::pinch(8, &[(200.0, 0.0), (240.0, 0.0)]),
            TouchEvent::end(9, &[(80.0, 0.0)]),
        ] {
            assert!(classifier.handle(event).is_empty());
        }
        assert_eq!(classifier.state(), Ready);
    }

    #[test]
    fn test_end_uses_changed_touches() {
        let mut classifier = in_state(Cursor);
        assert!(!classifier.gesture().context.multi_touched);
        let end = TouchEvent::end(5, &[]).with_changed(&[(77.0, 3.0)]);
        let intents = classifier.handle(&end);
        assert_eq!(intents, vec![Intent::CursorMove(77.0)]);
        assert_eq!(classifier.state(), Ready);
    }

    #[test]
    fn test_end_prefers_touches() {
        let mut classifier = in_state(Cursor);
        let end = TouchEvent::end(5, &[(12.0, 0.0)]).with_changed(&[(77.0, 0.0)]);
        assert_eq!(classifier.handle(&end), vec![Intent::CursorMove(12.0)]);

        let mut classifier = in_state(Cursor);
        assert!(classifier.handle(&TouchEvent::end(5, &[])).is_empty());

        let mut classifier = in_state(Cursor);
        let end = TouchEvent::end(5, &[(12.0, 0.0), (40.0, 0.0)]);
        assert!(classifier.handle(&end).is_empty());
    }

    #[test]
    fn test_tap_sets_cursor() {
        let (classifier, intents) = run(
            GestureConfig::default(),
            &[
                TouchEvent::start(0, &[(42.0, 0.0)]),
                TouchEvent::end(80, &[]).with_changed(&[(43.0, 0.0)]),
            ],
        );
        assert_eq!(classifier.state(), Ready);
        assert_eq!(
            intents,
            vec![Intent::TouchStart(42.0), Intent::CursorMove(43.0)],
        );
    }

    #[test]
    fn test_no_final_cursor_after_pinch() {
        for &state in &[PanOrZoom, Pan, Zoom] {
            let mut classifier = in_state(state);
            let end = TouchEvent::end(10, &[]).with_changed(&[(5.0, 0.0)]);
            assert!(classifier.handle(&end).is_empty());
        }
    }

    #[test]
    fn test_disabled() {
        let config = GestureConfig {
            disable: true,
            ..GestureConfig::default()
        };
        let mut classifier = GestureClassifier::new(config);
        let before = classifier.gesture();
        for event in &[
            TouchEvent::start(0, &[(10.0, 0.0)]),
            TouchEvent::move_to(40, &[(90.0, 0.0)]),
            TouchEvent::pinch(80, &[(0.0, 0.0), (100.0, 0.0)]),
            TouchEvent::pinch(120, &[(0.0, 0.0), (300.0, 0.0)]),
        ] {
            assert!(classifier.handle(event).is_empty());
            assert_eq!(classifier.gesture(), before);
        }

        // A state left over from before disabling is still reset by the end.
        let (gesture, _) = in_state(Zoom)
            .gesture()
            .advance(&TouchEvent::end(5, &[]), &config);
        assert_eq!(gesture.state, Ready);
    }

    #[test]
    fn test_multi_touch_move_ignored() {
        let mut classifier = in_state(Ready);
        classifier.handle(&TouchEvent::start(0, &[(0.0, 0.0)]));
        let two = TouchEvent::move_to(1, &[(60.0, 0.0), (120.0, 0.0)]);
        assert!(classifier.handle(&two).is_empty());
        assert_eq!(classifier.state(), Ready);

        let mut classifier = in_state(Cursor);
        assert!(classifier.handle(&two).is_empty());
        assert_eq!(classifier.state(), Cursor);
    }

    #[test]
    fn test_pan_and_zoom_deltas() {
        let mut classifier = in_state(Pan);
        // Entered with midpoint 50 -> 80.
        let intents = classifier.handle(&TouchEvent::pinch(10, &[(40.0, 0.0), (140.0, 0.0)]));
        assert_eq!(intents, vec![pan(80.0, 90.0)]);
        let intents = classifier.handle(&TouchEvent::pinch(11, &[(20.0, 0.0), (120.0, 0.0)]));
        assert_eq!(intents, vec![pan(90.0, 70.0)]);

        let mut classifier = in_state(Zoom);
        // Entered with separation 100 -> 150.
        let intents = classifier.handle(&TouchEvent::pinch(10, &[(0.0, 0.0), (180.0, 0.0)]));
        assert_eq!(intents, vec![zoom(150.0, 180.0, 90.0)]);
        let intents = classifier.handle(&TouchEvent::pinch(11, &[(10.0, 0.0), (70.0, 0.0)]));
        assert_eq!(intents, vec![zoom(180.0, 60.0, 40.0)]);
    }

    #[test]
    fn test_pinch_captures_reference() {
        let classifier = in_state(PanOrZoom);
        let context = classifier.gesture().context;
        assert!(context.multi_touched);
        assert_eq!(context.pinch_distance0, 100.0);
        assert_eq!(context.pinch_position0, 50.0);
    }

    #[test]
    fn test_malformed_events_absorbed() {
        for &state in &ALL_STATES {
            let mut classifier = in_state(state);
            let before = classifier.gesture();
            assert!(classifier.handle(&TouchEvent::pinch(20, &[(5.0, 0.0)])).is_empty());
            assert!(classifier.handle(&TouchEvent::pinch(21, &[])).is_empty());
            assert!(classifier.handle(&TouchEvent::move_to(22, &[])).is_empty());
            assert_eq!(classifier.gesture(), before, "from {}", state);
        }

        let mut classifier = in_state(Zoom);
        assert!(classifier.handle(&TouchEvent::start(30, &[])).is_empty());
        assert_eq!(classifier.state(), Ready);
        assert!(!classifier.gesture().context.multi_touched);
    }

    #[test]
    fn test_vertical_axis() {
        let config = GestureConfig {
            axis: Axis::Y,
            ..GestureConfig::default()
        };
        let (classifier, intents) = run(
            config,
            &[
                TouchEvent::start(0, &[(0.0, 10.0)]),
                TouchEvent::move_to(40, &[(100.0, 12.0)]),
                TouchEvent::move_to(80, &[(100.0, 20.0)]),
            ],
        );
        assert_eq!(classifier.state(), Cursor);
        assert_eq!(
            intents,
            vec![Intent::TouchStart(10.0), Intent::CursorMove(20.0)],
        );
    }

    #[test]
    fn test_scenario() {
        let config = GestureConfig::default();
        let mut classifier = GestureClassifier::new(config);

        classifier.handle(&TouchEvent::start(0, &[(0.0, 0.0)]));
        assert!(classifier.handle(&TouchEvent::move_to(40, &[(3.0, 0.0)])).is_empty());
        assert_eq!(classifier.state(), Ready);

        let intents = classifier.handle(&TouchEvent::move_to(80, &[(7.0, 0.0)]));
        assert_eq!(classifier.state(), Cursor);
        assert_eq!(intents, vec![Intent::CursorMove(7.0)]);

        let intents = classifier.handle(&TouchEvent::end(120, &[]).with_changed(&[(7.0, 0.0)]));
        assert_eq!(classifier.state(), Ready);
        assert_eq!(intents, vec![Intent::CursorMove(7.0)]);
    }

    #[test]
    fn test_reusable_across_interactions() {
        let mut classifier = in_state(Zoom);
        classifier.handle(&TouchEvent::end(10, &[]));
        classifier.handle(&TouchEvent::start(20, &[(0.0, 0.0)]));
        assert!(!classifier.gesture().context.multi_touched);
        classifier.handle(&TouchEvent::move_to(30, &[(9.0, 0.0)]));
        assert_eq!(classifier.state(), Cursor);
    }
}
