//! Attach: clinging to a screen edge.

use pet_core::{PetRng, Point};
use tracing::debug;

use crate::{
    Animation, AnimationKey, AttachDirection, BehaviorState, BehaviorTuning, FrameHandle,
    FrameLibrary, PetBehavior, StateKind, StateType, StepContext,
};

/// Pins the pet to the position it had on the first tick of this
/// activation, overwriting any outside change every tick, until a randomly
/// sampled duration expires.
#[derive(Clone, Debug)]
pub struct AttachState {
    direction: AttachDirection,
    animation: Animation,
    anchor:    Option<Point>,
    elapsed:   u32,
    duration:  u32,
}

impl AttachState {
    pub fn new(
        direction: AttachDirection,
        frames:    &FrameLibrary,
        tuning:    &BehaviorTuning,
        rng:       &mut PetRng,
    ) -> Self {
        let key = match direction {
            AttachDirection::Left  => AnimationKey::AttachLeft,
            AttachDirection::Right => AnimationKey::AttachRight,
            AttachDirection::Top   => AnimationKey::AttachTop,
        };
        let duration = tuning.attach_duration.sample(rng);
        debug!(%direction, duration, "entering attach");
        Self {
            direction,
            animation: Animation::new(frames.frames(key), tuning.attach_cadence),
            anchor:    None,
            elapsed:   0,
            duration,
        }
    }

    #[inline]
    pub fn direction(&self) -> AttachDirection {
        self.direction
    }

    /// The pinned position, once the first tick has run.
    #[inline]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    #[inline]
    pub fn duration(&self) -> u32 {
        self.duration
    }
}

impl PetBehavior for AttachState {
    fn kind(&self) -> StateKind {
        StateKind::Attach
    }

    fn render_frame(&self) -> Option<FrameHandle> {
        self.animation.current()
    }

    fn advance(&mut self, ctx: &mut StepContext<'_>) -> Option<BehaviorState> {
        let anchor = *self.anchor.get_or_insert(*ctx.position);

        self.elapsed += 1;
        *ctx.position = anchor;

        if self.elapsed > self.duration {
            return Some(ctx.enter_idle());
        }

        self.animation.tick();
        None
    }

    fn animation(&self) -> &Animation {
        &self.animation
    }
}

impl StateType for AttachState {
    const KIND: StateKind = StateKind::Attach;
}
