//! Mutable per-tick view handed to the active state.

use pet_core::{PetRng, Point, Size, Tick};

use crate::{
    AttachDirection, AttachState, BehaviorState, BehaviorTuning, CookieState, FallState,
    FrameHandle, FrameLibrary, IdleState, PlayState,
};

/// Everything a state may read or write during one
/// [`PetBehavior::advance`][crate::PetBehavior::advance] call.
///
/// The pet builds one per tick.  States move the pet through `position`
/// and request a successor by returning it; they never see the pet itself,
/// so a state cannot be half-replaced while it is still running.
pub struct StepContext<'a> {
    /// Current tick.
    pub tick: Tick,

    /// The pet's position.  Writes take effect immediately.
    pub position: &'a mut Point,

    /// Usable screen area.
    pub screen_bounds: Size,

    /// The pet's RNG; successor states sample their durations from it.
    pub rng: &'a mut PetRng,

    /// Shared animation frames for building successor states.
    pub frames: &'a FrameLibrary,

    pub tuning: &'a BehaviorTuning,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(
        tick:          Tick,
        position:      &'a mut Point,
        screen_bounds: Size,
        rng:           &'a mut PetRng,
        frames:        &'a FrameLibrary,
        tuning:        &'a BehaviorTuning,
    ) -> Self {
        Self { tick, position, screen_bounds, rng, frames, tuning }
    }

    /// Extent of `frame`, or the configured fallback when nothing is loaded.
    #[inline]
    pub fn sprite_size(&self, frame: Option<FrameHandle>) -> Size {
        frame.map_or(self.tuning.fallback_sprite, |f| f.size)
    }

    // ── Successor constructors ────────────────────────────────────────────

    pub fn enter_idle(&mut self) -> BehaviorState {
        BehaviorState::Idle(IdleState::new(self.frames, self.tuning, self.rng))
    }

    pub fn enter_fall(&mut self) -> BehaviorState {
        BehaviorState::Fall(FallState::new(self.frames, self.tuning))
    }

    pub fn enter_attach(&mut self, direction: AttachDirection) -> BehaviorState {
        BehaviorState::Attach(AttachState::new(direction, self.frames, self.tuning, self.rng))
    }

    pub fn enter_cookie(&mut self) -> BehaviorState {
        BehaviorState::Cookie(CookieState::new(self.frames, self.tuning, self.rng))
    }

    pub fn enter_play(&mut self) -> BehaviorState {
        BehaviorState::Play(PlayState::new(self.frames, self.tuning, self.rng))
    }
}
