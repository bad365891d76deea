//! Integer screen geometry.
//!
//! Coordinates are window-system pixels with the origin at the top-left of
//! the primary screen and `y` growing downwards.  Positions may be negative:
//! an edge-attached pet deliberately hangs one third outside the screen.

use std::fmt;

/// A position on screen, in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Same point with `x` replaced.
    #[inline]
    pub const fn with_x(self, x: i32) -> Self {
        Self { x, y: self.y }
    }

    /// Same point with `y` replaced.
    #[inline]
    pub const fn with_y(self, y: i32) -> Self {
        Self { x: self.x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width × height extent, in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width:  i32,
    pub height: i32,
}

impl Size {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// `true` if either dimension is zero or negative.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
