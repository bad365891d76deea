//! `BehaviorState`: the closed set of states as one enum.

use crate::{
    Animation, AttachState, CookieState, DragState, FallState, FrameHandle, IdleState,
    PetBehavior, PlayState, StateKind, StepContext, ThunderShockState,
};

/// Exactly one of these is active on a pet at any time.  A transition
/// builds a new value and replaces the old one wholesale.
#[derive(Clone, Debug)]
pub enum BehaviorState {
    Idle(IdleState),
    Drag(DragState),
    Fall(FallState),
    Attach(AttachState),
    Cookie(CookieState),
    Play(PlayState),
    ThunderShock(ThunderShockState),
}

impl BehaviorState {
    fn as_behavior(&self) -> &dyn PetBehavior {
        match self {
            BehaviorState::Idle(s)         => s,
            BehaviorState::Drag(s)         => s,
            BehaviorState::Fall(s)         => s,
            BehaviorState::Attach(s)       => s,
            BehaviorState::Cookie(s)       => s,
            BehaviorState::Play(s)         => s,
            BehaviorState::ThunderShock(s) => s,
        }
    }

    fn as_behavior_mut(&mut self) -> &mut dyn PetBehavior {
        match self {
            BehaviorState::Idle(s)         => s,
            BehaviorState::Drag(s)         => s,
            BehaviorState::Fall(s)         => s,
            BehaviorState::Attach(s)       => s,
            BehaviorState::Cookie(s)       => s,
            BehaviorState::Play(s)         => s,
            BehaviorState::ThunderShock(s) => s,
        }
    }

    pub fn as_idle(&self) -> Option<&IdleState> {
        match self {
            BehaviorState::Idle(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_fall(&self) -> Option<&FallState> {
        match self {
            BehaviorState::Fall(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_attach(&self) -> Option<&AttachState> {
        match self {
            BehaviorState::Attach(s) => Some(s),
            _ => None,
        }
    }
}

impl PetBehavior for BehaviorState {
    fn kind(&self) -> StateKind {
        self.as_behavior().kind()
    }

    fn render_frame(&self) -> Option<FrameHandle> {
        self.as_behavior().render_frame()
    }

    fn advance(&mut self, ctx: &mut StepContext<'_>) -> Option<BehaviorState> {
        self.as_behavior_mut().advance(ctx)
    }

    fn animation(&self) -> &Animation {
        self.as_behavior().animation()
    }
}

impl From<IdleState> for BehaviorState {
    fn from(s: IdleState) -> Self {
        BehaviorState::Idle(s)
    }
}

impl From<DragState> for BehaviorState {
    fn from(s: DragState) -> Self {
        BehaviorState::Drag(s)
    }
}

impl From<FallState> for BehaviorState {
    fn from(s: FallState) -> Self {
        BehaviorState::Fall(s)
    }
}

impl From<AttachState> for BehaviorState {
    fn from(s: AttachState) -> Self {
        BehaviorState::Attach(s)
    }
}

impl From<CookieState> for BehaviorState {
    fn from(s: CookieState) -> Self {
        BehaviorState::Cookie(s)
    }
}

impl From<PlayState> for BehaviorState {
    fn from(s: PlayState) -> Self {
        BehaviorState::Play(s)
    }
}

impl From<ThunderShockState> for BehaviorState {
    fn from(s: ThunderShockState) -> Self {
        BehaviorState::ThunderShock(s)
    }
}
