use log::info;
use std::fmt;
use std::time::Duration;

/// Playback state shown on the play button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlayState {
    /// Rewound to the beginning.
    Stopped,
    /// Time is advancing.
    Playing,
    /// Time is frozen where it is.
    Paused,
}
impl Default for PlayState {
    fn default() -> Self {
        PlayState::Stopped
    }
}
impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayState::Stopped => "stopped",
            PlayState::Playing => "playing",
            PlayState::Paused => "paused",
        };
        write!(f, "{}", s)
    }
}

/// Play/pause/stop control and the current play time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transport {
    state: PlayState,
    /// Current play time in seconds.
    current_time: f64,
    /// Length of the playback in seconds.
    total_time: f64,
}
impl Transport {
    /// Returns a stopped transport.
    pub fn new(total_time: f64) -> Self {
        Self {
            state: PlayState::Stopped,
            current_time: 0.0,
            total_time,
        }
    }

    /// Returns the playback state.
    pub fn state(self) -> PlayState {
        self.state
    }
    /// Returns the current play time in seconds.
    pub fn current_time(self) -> f64 {
        self.current_time
    }
    /// Returns the length of the playback in seconds.
    pub fn total_time(self) -> f64 {
        self.total_time
    }

    /// Handles a tap on the play button: toggles between playing and paused.
    pub fn press(&mut self) {
        match self.state {
            PlayState::Playing => self.set_state(PlayState::Paused),
            PlayState::Stopped | PlayState::Paused => self.set_state(PlayState::Playing),
        };
    }
    /// Handles a long press on the play button: stops, or starts playing if
    /// already stopped.
    pub fn long_press(&mut self) {
        match self.state {
            PlayState::Stopped => self.set_state(PlayState::Playing),
            PlayState::Paused | PlayState::Playing => self.set_state(PlayState::Stopped),
        };
    }

    /// Changes the playback state. Stopping rewinds to the beginning.
    ///
    /// Returns `false` if the state was already `state`.
    pub fn set_state(&mut self, state: PlayState) -> bool {
        if self.state == state {
            return false;
        }
        info!("playback {} -> {} at {:.2}s", self.state, state, self.current_time);
        self.state = state;
        if state == PlayState::Stopped {
            self.current_time = 0.0;
        }
        true
    }

    /// Advances the play time while playing. Reaching the end stops playback.
    pub fn advance(&mut self, dt: Duration) {
        if self.state != PlayState::Playing {
            return;
        }
        self.current_time += dt.as_secs_f64();
        if self.current_time >= self.total_time {
            self.current_time = self.total_time;
            self.set_state(PlayState::Stopped);
        }
    }

    /// Moves the play time, pausing playback first.
    pub fn seek(&mut self, time: f64) {
        if !time.is_finite() {
            return;
        }
        if self.state != PlayState::Paused {
            self.set_state(PlayState::Paused);
        }
        self.current_time = time.max(0.0).min(self.total_time);
    }

    /// Returns the progress label, such as `"12 / 30"`.
    pub fn label(self) -> String {
        format!("{:.0} / {:.0}", self.current_time, self.total_time)
    }
    /// Returns the text on the play button.
    pub fn button_label(self) -> &'static str {
        match self.state {
            PlayState::Playing => "Pause",
            PlayState::Stopped | PlayState::Paused => "Play",
        }
    }
}
