//! Integer grid coordinate.
//!
//! `Coord` is a plain value with no notion of the grid it lives on; bounds are
//! enforced by the grid in `vc-grid`, which is the only place coordinates are
//! produced during a run.

use std::fmt;

/// A grid cell `(x, y)`, with `x` growing to the right and `y` growing upward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`, or `None` if either component would
    /// drop below zero or overflow `u32`.
    ///
    /// Upper bounds are the grid's concern; this only guards the integer range.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Coord> {
        Some(Coord {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
