//! Raw multi-touch events, as delivered by the platform.

use cgmath::Point2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod throttle;

pub use throttle::Throttle;

/// Position of one finger in view-local pixels.
pub type TouchPoint = Point2<f64>;

/// Touches reported alongside one event.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchFrame {
    /// Fingers currently on the surface, in platform order.
    pub touches: Vec<TouchPoint>,
    /// Fingers that changed in this event. Some platforms only report the
    /// lifted finger here on release.
    #[serde(default)]
    pub changed_touches: Vec<TouchPoint>,
    /// Time the event was generated, relative to an arbitrary origin.
    #[serde(rename = "timestamp_ms", with = "millis", default)]
    pub timestamp: Duration,
}
impl TouchFrame {
    /// Returns a frame at `ms` milliseconds with the given active touches.
    pub fn new(ms: u64, touches: &[(f64, f64)]) -> Self {
        Self {
            touches: touches.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
            changed_touches: vec![],
            timestamp: Duration::from_millis(ms),
        }
    }
}

/// Low-level touch event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TouchEvent {
    /// A finger touched down.
    Start(TouchFrame),
    /// One or more fingers moved.
    Move(TouchFrame),
    /// Two or more fingers moved together.
    Pinch(TouchFrame),
    /// A finger lifted.
    End(TouchFrame),
}
impl TouchEvent {
    /// Returns a `Start` event.
    pub fn start(ms: u64, touches: &[(f64, f64)]) -> Self {
        Self::Start(TouchFrame::new(ms, touches))
    }
    /// Returns a `Move` event.
    pub fn move_to(ms: u64, touches: &[(f64, f64)]) -> Self {
        Self::Move(TouchFrame::new(ms, touches))
    }
    /// Returns a `Pinch` event.
    pub fn pinch(ms: u64, touches: &[(f64, f64)]) -> Self {
        Self::Pinch(TouchFrame::new(ms, touches))
    }
    /// Returns an `End` event.
    pub fn end(ms: u64, touches: &[(f64, f64)]) -> Self {
        Self::End(TouchFrame::new(ms, touches))
    }

    /// Replaces the changed-touches list.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_changed(mut self, changed: &[(f64, f64)]) -> Self {
        self.frame_mut().changed_touches =
            changed.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        self
    }

    /// Returns the touches carried by the event.
    pub fn frame(&self) -> &TouchFrame {
        match self {
            Self::Start(f) | Self::Move(f) | Self::Pinch(f) | Self::End(f) => f,
        }
    }
    fn frame_mut(&mut self) -> &mut TouchFrame {
        match self {
            Self::Start(f) | Self::Move(f) | Self::Pinch(f) | Self::End(f) => f,
        }
    }

    /// Returns the time the event was generated.
    pub fn timestamp(&self) -> Duration {
        self.frame().timestamp
    }

    /// Returns a short lowercase name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start(_) => "start",
            Self::Move(_) => "move",
            Self::Pinch(_) => "pinch",
            Self::End(_) => "end",
        }
    }
}

/// Serializes a `Duration` as whole milliseconds.
pub(crate) mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
