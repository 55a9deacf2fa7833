//! Touch gesture classification for a scrollable timeline chart.
//!
//! A single finger drags the playhead cursor; two fingers either pan or
//! pinch-zoom the visible time window. [`gesture::Gesture`] is the pure state
//! machine that tells these apart, [`gesture::GestureDetector`] puts the
//! input throttles in front of it, and [`timeline::Timeline`] is the model
//! that the resulting intents mutate.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod config;
pub mod gesture;
pub mod input;
pub mod screen;
pub mod timeline;

pub use config::{Config, GestureConfig, TimelineConfig};
pub use gesture::{
    Gesture, GestureClassifier, GestureDetector, GestureState, GestureTarget, Intent,
};
pub use input::{TouchEvent, TouchFrame, TouchPoint};
pub use screen::Screen;
pub use timeline::Timeline;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the caller.
///
/// Gesture ambiguity and malformed touch events never appear here:
/// those are absorbed by the classifier rather than reported.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The data-insertion form held something other than a positive row count.
    #[error("invalid row count {0:?}")]
    RowCount(String),

    /// Reading a config or trace file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A config or trace file was not valid JSON for its schema.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
