//! Animation frame handles and the frame library.
//!
//! Rendering is the host's business.  The core only sees opaque
//! [`FrameHandle`]s (an id plus the sprite extent, which the edge rule and the
//! ground line need).  A [`FrameSource`] supplies the frames for each
//! [`AnimationKey`] once; the [`FrameLibrary`] keeps them behind `Arc` so
//! every state activation shares the same slice instead of reloading assets.

use std::sync::Arc;

use pet_core::{FrameId, Size};
use tracing::debug;

// ── FrameHandle ───────────────────────────────────────────────────────────────

/// One opaque animation frame.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FrameHandle {
    pub id:       FrameId,
    pub size:     Size,
    /// Draw horizontally flipped.  Set when right-edge frames are derived
    /// from the left-edge set.
    pub mirrored: bool,
}

impl FrameHandle {
    pub const fn new(id: FrameId, size: Size) -> Self {
        Self { id, size, mirrored: false }
    }

    /// The same image, flipped horizontally.
    pub const fn mirror(self) -> Self {
        Self { id: self.id, size: self.size, mirrored: !self.mirrored }
    }
}

// ── AnimationKey ──────────────────────────────────────────────────────────────

/// Names one animation sequence the asset loader is asked for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AnimationKey {
    Idle,
    Drag,
    Fall,
    AttachLeft,
    AttachRight,
    AttachTop,
    Cookie,
    Play,
    ThunderShock,
}

impl AnimationKey {
    pub const COUNT: usize = 9;

    pub const ALL: [AnimationKey; Self::COUNT] = [
        AnimationKey::Idle,
        AnimationKey::Drag,
        AnimationKey::Fall,
        AnimationKey::AttachLeft,
        AnimationKey::AttachRight,
        AnimationKey::AttachTop,
        AnimationKey::Cookie,
        AnimationKey::Play,
        AnimationKey::ThunderShock,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationKey::Idle         => "idle",
            AnimationKey::Drag         => "drag",
            AnimationKey::Fall         => "fall",
            AnimationKey::AttachLeft   => "attach_left",
            AnimationKey::AttachRight  => "attach_right",
            AnimationKey::AttachTop    => "attach_top",
            AnimationKey::Cookie       => "cookie",
            AnimationKey::Play         => "play",
            AnimationKey::ThunderShock => "thunder_shock",
        }
    }
}

// ── FrameSource ───────────────────────────────────────────────────────────────

/// The asset-loading collaborator.
///
/// Returning an empty `Vec` is allowed: the state then renders nothing.
pub trait FrameSource {
    fn load_frames(&self, key: AnimationKey) -> Vec<FrameHandle>;
}

/// A [`FrameSource`] that hands out fixed-size placeholder frames with the
/// classic per-animation frame counts.
///
/// No right-edge frames are produced; the library mirrors the left-edge set.
#[derive(Copy, Clone, Debug)]
pub struct PlaceholderFrames {
    pub size: Size,
}

impl Default for PlaceholderFrames {
    fn default() -> Self {
        Self { size: Size::new(64, 64) }
    }
}

impl PlaceholderFrames {
    pub fn count_for(key: AnimationKey) -> usize {
        match key {
            AnimationKey::Idle         => 1,
            AnimationKey::Drag         => 6,
            AnimationKey::Fall         => 3,
            AnimationKey::AttachLeft   => 3,
            AnimationKey::AttachRight  => 0,
            AnimationKey::AttachTop    => 2,
            AnimationKey::Cookie       => 3,
            AnimationKey::Play         => 4,
            AnimationKey::ThunderShock => 5,
        }
    }
}

impl FrameSource for PlaceholderFrames {
    fn load_frames(&self, key: AnimationKey) -> Vec<FrameHandle> {
        let base = key.index() as u32 * 16;
        (0..Self::count_for(key) as u32)
            .map(|n| FrameHandle::new(FrameId(base + n), self.size))
            .collect()
    }
}

// ── FrameLibrary ──────────────────────────────────────────────────────────────

/// Frames for every [`AnimationKey`], loaded once and shared by all states.
#[derive(Clone)]
pub struct FrameLibrary {
    sets: [Arc<[FrameHandle]>; AnimationKey::COUNT],
}

impl FrameLibrary {
    /// A library with no frames at all.  Every state renders nothing.
    pub fn empty() -> Self {
        Self { sets: std::array::from_fn(|_| Arc::from(Vec::<FrameHandle>::new())) }
    }

    /// Ask `source` for every animation.
    ///
    /// Right-edge frames fall back to the left-edge set, mirrored.
    pub fn load(source: &dyn FrameSource) -> Self {
        let mut loaded: [Vec<FrameHandle>; AnimationKey::COUNT] =
            std::array::from_fn(|i| source.load_frames(AnimationKey::ALL[i]));

        if loaded[AnimationKey::AttachRight.index()].is_empty() {
            loaded[AnimationKey::AttachRight.index()] = loaded[AnimationKey::AttachLeft.index()]
                .iter()
                .map(|f| f.mirror())
                .collect();
        }

        for key in AnimationKey::ALL {
            debug!(animation = key.name(), frames = loaded[key.index()].len(), "frames loaded");
        }

        Self { sets: loaded.map(Arc::<[FrameHandle]>::from) }
    }

    /// Shared handle to the frames for `key`.
    #[inline]
    pub fn frames(&self, key: AnimationKey) -> Arc<[FrameHandle]> {
        Arc::clone(&self.sets[key.index()])
    }

    #[inline]
    pub fn frame_count(&self, key: AnimationKey) -> usize {
        self.sets[key.index()].len()
    }
}
