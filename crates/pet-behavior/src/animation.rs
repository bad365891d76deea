//! Cyclic frame animation driven by a per-state tick cadence.

use std::sync::Arc;

use crate::FrameHandle;

/// A looping animation: a shared frame slice, the current index, and a
/// tick counter that advances the index every `cadence` ticks.
///
/// Invariant: `index < frames.len()` whenever `frames` is non-empty; with no
/// frames the index stays 0 and [`current`][Self::current] yields `None`.
#[derive(Clone, Debug)]
pub struct Animation {
    frames:  Arc<[FrameHandle]>,
    index:   usize,
    counter: u32,
    cadence: u32,
}

impl Animation {
    pub fn new(frames: Arc<[FrameHandle]>, cadence: u32) -> Self {
        Self { frames, index: 0, counter: 0, cadence: cadence.max(1) }
    }

    /// Count one tick.  Returns `true` if the visible frame changed.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter < self.cadence {
            return false;
        }
        self.counter = 0;
        if self.frames.is_empty() {
            return false;
        }
        let previous = self.index;
        self.index = (self.index + 1) % self.frames.len();
        self.index != previous
    }

    /// The frame to draw, or `None` when nothing was loaded.
    #[inline]
    pub fn current(&self) -> Option<FrameHandle> {
        self.frames.get(self.index).copied()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn cadence(&self) -> u32 {
        self.cadence
    }
}
