//! Rate limiting for high-frequency touch events.

use std::time::Duration;

/// Default throttle window, roughly two frames at 60 Hz.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(32);

/// Leading-edge rate limiter.
///
/// The first event is admitted immediately; further events are dropped until
/// `window` has elapsed since the last admitted one. Nothing is replayed at
/// the end of the window.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Throttle {
    window: Duration,
    last_admitted: Option<Duration>,
}
impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
impl Throttle {
    /// Returns a throttle with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_admitted: None,
        }
    }

    /// Returns the throttle window.
    pub fn window(self) -> Duration {
        self.window
    }

    /// Returns `true` if an event at `now` should be let through, and records
    /// it as the start of a new window if so.
    pub fn admit(&mut self, now: Duration) -> bool {
        let admitted = match self.last_admitted {
            None => true,
            // A clock that went backwards starts a fresh window.
            Some(last) if now < last => true,
            Some(last) => now - last >= self.window,
        };
        if admitted {
            self.last_admitted = Some(now);
        }
        admitted
    }
}
