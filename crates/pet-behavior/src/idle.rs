//! Idle: the default state and the fallback of every timed state.

use pet_core::PetRng;
use tracing::debug;

use crate::{
    Animation, AnimationKey, BehaviorState, BehaviorTuning, FrameHandle, FrameLibrary,
    PetBehavior, StateKind, StateType, StepContext,
};

/// Sits still, animating, until a randomly sampled dwell expires, then
/// rolls for what to do next: eat, play, or keep idling with a fresh dwell.
#[derive(Clone, Debug)]
pub struct IdleState {
    animation: Animation,
    elapsed:   u32,
    dwell:     u32,
}

impl IdleState {
    pub fn new(frames: &FrameLibrary, tuning: &BehaviorTuning, rng: &mut PetRng) -> Self {
        let dwell = tuning.idle_dwell.sample(rng);
        debug!(dwell, "entering idle");
        Self {
            animation: Animation::new(frames.frames(AnimationKey::Idle), tuning.idle_cadence),
            elapsed:   0,
            dwell,
        }
    }

    /// Ticks counted toward the current dwell.
    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Dwell length sampled for this activation (or the last re-roll).
    #[inline]
    pub fn dwell(&self) -> u32 {
        self.dwell
    }
}

impl PetBehavior for IdleState {
    fn kind(&self) -> StateKind {
        StateKind::Idle
    }

    fn render_frame(&self) -> Option<FrameHandle> {
        self.animation.current()
    }

    fn advance(&mut self, ctx: &mut StepContext<'_>) -> Option<BehaviorState> {
        self.animation.tick();

        self.elapsed += 1;
        if self.elapsed <= self.dwell {
            return None;
        }

        let roll = ctx.rng.percent();
        let tuning = ctx.tuning;
        if roll < tuning.cookie_percent {
            Some(ctx.enter_cookie())
        } else if roll < tuning.cookie_percent.saturating_add(tuning.play_percent) {
            Some(ctx.enter_play())
        } else {
            // Keep idling; same frames, new timer.
            self.elapsed = 0;
            self.dwell = tuning.idle_repeat_dwell.sample(ctx.rng);
            debug!(roll, dwell = self.dwell, "idle again");
            None
        }
    }

    fn animation(&self) -> &Animation {
        &self.animation
    }
}

impl StateType for IdleState {
    const KIND: StateKind = StateKind::Idle;
}
