//! Screen-edge attachment rule.
//!
//! Shared by the falling state's own per-tick check and the pet's post-tick
//! check while idle.  Edges are tested in a fixed order, top, then left,
//! then right, and the first match wins.  On a match the position snaps so
//! that one third of the sprite hangs outside that edge.

use std::fmt;

use pet_core::{Point, Size};

/// Which screen edge the pet clings to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AttachDirection {
    Left,
    Right,
    Top,
}

impl fmt::Display for AttachDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AttachDirection::Left  => "left",
            AttachDirection::Right => "right",
            AttachDirection::Top   => "top",
        })
    }
}

/// Result of a successful edge check.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct EdgeHit {
    pub direction: AttachDirection,
    /// Where the pet must be placed while attached.
    pub snapped:   Point,
}

/// Test `position` against the top, left and right edges of `screen`.
///
/// `sprite` is the current frame's extent and `threshold` the proximity in
/// pixels.  Returns `None` when the pet is clear of every edge.
pub fn detect_edge(position: Point, sprite: Size, screen: Size, threshold: i32) -> Option<EdgeHit> {
    if position.y <= threshold {
        return Some(EdgeHit {
            direction: AttachDirection::Top,
            snapped:   position.with_y(-sprite.height / 3),
        });
    }
    if position.x <= threshold {
        return Some(EdgeHit {
            direction: AttachDirection::Left,
            snapped:   position.with_x(-sprite.width / 3),
        });
    }
    if position.x >= screen.width - sprite.width - threshold {
        return Some(EdgeHit {
            direction: AttachDirection::Right,
            snapped:   position.with_x(screen.width - sprite.width * 2 / 3),
        });
    }
    None
}
