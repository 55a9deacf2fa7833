use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::input::TouchPoint;

/// Axis along which the chart scrolls and zooms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}
impl Default for Axis {
    fn default() -> Self {
        Axis::X
    }
}
impl Axis {
    /// Returns the coordinate of a point along this axis.
    pub fn coord(self, p: TouchPoint) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// Returns the separation of two fingers along `axis`.
pub fn pinch_distance(axis: Axis, p0: TouchPoint, p1: TouchPoint) -> f64 {
    (axis.coord(p0) - axis.coord(p1)).abs()
}

/// Returns the midpoint of two fingers along `axis`.
pub fn pinch_position(axis: Axis, p0: TouchPoint, p1: TouchPoint) -> f64 {
    (axis.coord(p0) + axis.coord(p1)) / 2.0
}

/// Returns the first two touches, or `None` if there are fewer than two.
/// Any further fingers are ignored.
pub fn first_two(touches: &[TouchPoint]) -> Option<(TouchPoint, TouchPoint)> {
    touches.iter().copied().take(2).collect_tuple()
}
