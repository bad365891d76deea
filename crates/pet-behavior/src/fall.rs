//! Fall: constant-gravity drop to the ground line.
//!
//! Integration is discrete and exact: each tick the velocity grows by
//! `gravity` and the position by the new velocity, so after `n` ticks
//! without landing the velocity is `g·n` and the drop is `g·n(n+1)/2`.

use tracing::debug;

use crate::edge::detect_edge;
use crate::{
    Animation, AnimationKey, BehaviorState, BehaviorTuning, FrameHandle, FrameLibrary,
    PetBehavior, StateKind, StateType, StepContext,
};

#[derive(Clone, Debug)]
pub struct FallState {
    animation: Animation,
    velocity:  i32,
}

impl FallState {
    pub fn new(frames: &FrameLibrary, tuning: &BehaviorTuning) -> Self {
        Self {
            animation: Animation::new(frames.frames(AnimationKey::Fall), tuning.fall_cadence),
            velocity:  0,
        }
    }

    /// Current downward speed, pixels per tick.
    #[inline]
    pub fn velocity(&self) -> i32 {
        self.velocity
    }
}

impl PetBehavior for FallState {
    fn kind(&self) -> StateKind {
        StateKind::Fall
    }

    fn render_frame(&self) -> Option<FrameHandle> {
        self.animation.current()
    }

    fn advance(&mut self, ctx: &mut StepContext<'_>) -> Option<BehaviorState> {
        self.animation.tick();
        let sprite = ctx.sprite_size(self.animation.current());

        // Edges are checked before gravity is applied.
        if let Some(hit) = detect_edge(
            *ctx.position,
            sprite,
            ctx.screen_bounds,
            ctx.tuning.attach_distance,
        ) {
            *ctx.position = hit.snapped;
            return Some(ctx.enter_attach(hit.direction));
        }

        self.velocity += ctx.tuning.gravity;
        let next_y = ctx.position.y + self.velocity;
        let ground = ctx.screen_bounds.height - sprite.height - ctx.tuning.ground_margin;

        if next_y >= ground {
            *ctx.position = ctx.position.with_y(ground);
            debug!(ground, velocity = self.velocity, "landed");
            return Some(ctx.enter_idle());
        }

        *ctx.position = ctx.position.with_y(next_y);
        None
    }

    fn animation(&self) -> &Animation {
        &self.animation
    }
}

impl StateType for FallState {
    const KIND: StateKind = StateKind::Fall;
}
