//! Fixed-length actions: eating, playing, discharging.
//!
//! All three animate for a randomly sampled number of ticks and then return
//! to idle.  The elapsed counter is bumped before the expiry test, so a
//! sampled duration `d` keeps the action on screen for `d` animated ticks
//! and hands over to idle on tick `d + 1`.

use pet_core::PetRng;
use tracing::debug;

use crate::{
    Animation, AnimationKey, BehaviorState, BehaviorTuning, FrameHandle, FrameLibrary,
    PetBehavior, StateKind, StateType, StepContext, TickRange,
};

/// Shared timer + animation for the timed actions.
#[derive(Clone, Debug)]
pub struct TimedAction {
    animation: Animation,
    elapsed:   u32,
    duration:  u32,
}

impl TimedAction {
    fn new(
        key:     AnimationKey,
        cadence: u32,
        range:   TickRange,
        frames:  &FrameLibrary,
        rng:     &mut PetRng,
    ) -> Self {
        let duration = range.sample(rng);
        debug!(action = key.name(), duration, "entering timed action");
        Self {
            animation: Animation::new(frames.frames(key), cadence),
            elapsed:   0,
            duration,
        }
    }

    /// One tick.  Returns `true` once the duration has run out.
    fn step(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed > self.duration {
            return true;
        }
        self.animation.tick();
        false
    }

    #[inline]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }
}

// ── Cookie ────────────────────────────────────────────────────────────────────

/// Eating a cookie.
#[derive(Clone, Debug)]
pub struct CookieState(pub TimedAction);

impl CookieState {
    pub fn new(frames: &FrameLibrary, tuning: &BehaviorTuning, rng: &mut PetRng) -> Self {
        Self(TimedAction::new(
            AnimationKey::Cookie,
            tuning.cookie_cadence,
            tuning.cookie_duration,
            frames,
            rng,
        ))
    }
}

impl PetBehavior for CookieState {
    fn kind(&self) -> StateKind {
        StateKind::Cookie
    }

    fn render_frame(&self) -> Option<FrameHandle> {
        self.0.animation.current()
    }

    fn advance(&mut self, ctx: &mut StepContext<'_>) -> Option<BehaviorState> {
        self.0.step().then(|| ctx.enter_idle())
    }

    fn animation(&self) -> &Animation {
        &self.0.animation
    }
}

impl StateType for CookieState {
    const KIND: StateKind = StateKind::Cookie;
}

// ── Play ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct PlayState(pub TimedAction);

impl PlayState {
    pub fn new(frames: &FrameLibrary, tuning: &BehaviorTuning, rng: &mut PetRng) -> Self {
        Self(TimedAction::new(
            AnimationKey::Play,
            tuning.play_cadence,
            tuning.play_duration,
            frames,
            rng,
        ))
    }
}

impl PetBehavior for PlayState {
    fn kind(&self) -> StateKind {
        StateKind::Play
    }

    fn render_frame(&self) -> Option<FrameHandle> {
        self.0.animation.current()
    }

    fn advance(&mut self, ctx: &mut StepContext<'_>) -> Option<BehaviorState> {
        self.0.step().then(|| ctx.enter_idle())
    }

    fn animation(&self) -> &Animation {
        &self.0.animation
    }
}

impl StateType for PlayState {
    const KIND: StateKind = StateKind::Play;
}

// ── ThunderShock ──────────────────────────────────────────────────────────────

/// Discharging.  Only ever entered on request, never from the idle roll.
#[derive(Clone, Debug)]
pub struct ThunderShockState(pub TimedAction);

impl ThunderShockState {
    pub fn new(frames: &FrameLibrary, tuning: &BehaviorTuning, rng: &mut PetRng) -> Self {
        Self(TimedAction::new(
            AnimationKey::ThunderShock,
            tuning.thunder_shock_cadence,
            tuning.thunder_shock_duration,
            frames,
            rng,
        ))
    }
}

impl PetBehavior for ThunderShockState {
    fn kind(&self) -> StateKind {
        StateKind::ThunderShock
    }

    fn render_frame(&self) -> Option<FrameHandle> {
        self.0.animation.current()
    }

    fn advance(&mut self, ctx: &mut StepContext<'_>) -> Option<BehaviorState> {
        self.0.step().then(|| ctx.enter_idle())
    }

    fn animation(&self) -> &Animation {
        &self.0.animation
    }
}

impl StateType for ThunderShockState {
    const KIND: StateKind = StateKind::ThunderShock;
}
