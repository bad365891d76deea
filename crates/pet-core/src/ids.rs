//! Identifier wrappers.

use std::fmt;

/// Opaque handle to one loaded animation image.
///
/// The behavior core never dereferences it; the rendering host maps it
/// back to whatever bitmap it loaded.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameId(pub u32);

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameId({})", self.0)
    }
}
