use log::trace;

use super::{GestureClassifier, GestureState, Intent};
use crate::config::GestureConfig;
use crate::input::{Throttle, TouchEvent};

/// Receiver of classified intents, such as the timeline being touched.
pub trait GestureTarget {
    /// Applies one intent.
    fn apply(&mut self, intent: &Intent);
}

/// Gesture classifier with the input rate limits in front of it.
///
/// Move and pinch events each go through their own leading-edge throttle, so
/// a burst of either kind reaches the classifier at most once per throttle
/// window. Start and end events always get through.
#[derive(Debug, Clone)]
pub struct GestureDetector {
    classifier: GestureClassifier,
    move_throttle: Throttle,
    pinch_throttle: Throttle,
}
impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
impl GestureDetector {
    /// Returns a detector waiting for the first touch.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            classifier: GestureClassifier::new(config),
            move_throttle: Throttle::new(config.throttle_window),
            pinch_throttle: Throttle::new(config.throttle_window),
        }
    }

    /// Returns the underlying classifier.
    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }
    /// Returns the current gesture state.
    pub fn state(&self) -> GestureState {
        self.classifier.state()
    }

    /// Throttles and classifies one event, returning the resulting intents.
    pub fn handle(&mut self, event: &TouchEvent) -> Vec<Intent> {
        let admitted = match event {
            TouchEvent::Start(_) | TouchEvent::End(_) => true,
            TouchEvent::Move(f) => self.move_throttle.admit(f.timestamp),
            TouchEvent::Pinch(f) => self.pinch_throttle.admit(f.timestamp),
        };
        if admitted {
            self.classifier.handle(event)
        } else {
            trace!("throttled {} at {:?}", event.name(), event.timestamp());
            vec![]
        }
    }

    /// Throttles and classifies one event, applying the resulting intents to
    /// `target`. Returns the gesture state afterwards.
    pub fn dispatch(
        &mut self,
        event: &TouchEvent,
        target: &mut impl GestureTarget,
    ) -> GestureState {
        for intent in self.handle(event) {
            target.apply(&intent);
        }
        self.state()
    }
}
