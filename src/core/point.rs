//! Grid coordinates.
//!
//! `Point` is a board coordinate, not a pixel coordinate. Row `y = 0` is the
//! row holding the start square.

use serde::{Deserialize, Serialize};

/// An immutable board coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// The start corner of every board.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point.
    #[must_use]
    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
