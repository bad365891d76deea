//! Drag: the user is carrying the pet with the pointer.

use crate::{
    Animation, AnimationKey, BehaviorState, BehaviorTuning, FrameHandle, FrameLibrary,
    PetBehavior, StateKind, StateType, StepContext,
};

/// Animates only.  The host moves the pet while the pointer is down and
/// ends the state with `end_drag`; it never times out.
#[derive(Clone, Debug)]
pub struct DragState {
    animation: Animation,
}

impl DragState {
    pub fn new(frames: &FrameLibrary, tuning: &BehaviorTuning) -> Self {
        Self {
            animation: Animation::new(frames.frames(AnimationKey::Drag), tuning.drag_cadence),
        }
    }
}

impl PetBehavior for DragState {
    fn kind(&self) -> StateKind {
        StateKind::Drag
    }

    fn render_frame(&self) -> Option<FrameHandle> {
        self.animation.current()
    }

    fn advance(&mut self, _ctx: &mut StepContext<'_>) -> Option<BehaviorState> {
        self.animation.tick();
        None
    }

    fn animation(&self) -> &Animation {
        &self.animation
    }
}

impl StateType for DragState {
    const KIND: StateKind = StateKind::Drag;
}
