//! The `PetBehavior` trait implemented by every state.

use std::fmt;

use crate::{Animation, BehaviorState, FrameHandle, StepContext};

/// Discriminant of [`BehaviorState`], cheap to copy and compare.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StateKind {
    Idle,
    Drag,
    Fall,
    Attach,
    Cookie,
    Play,
    ThunderShock,
}

impl StateKind {
    pub fn name(self) -> &'static str {
        match self {
            StateKind::Idle         => "idle",
            StateKind::Drag         => "drag",
            StateKind::Fall         => "fall",
            StateKind::Attach       => "attach",
            StateKind::Cookie       => "cookie",
            StateKind::Play         => "play",
            StateKind::ThunderShock => "thunder_shock",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One behavior state of the pet.
///
/// # Contract
///
/// - [`render_frame`][Self::render_frame] is pure: the frame to draw now, or
///   `None` if the state has no frames loaded.
/// - [`advance`][Self::advance] runs one tick of logic.  It may move the pet
///   through `ctx.position`.  Returning `Some(next)` asks the pet to replace
///   this state with `next` wholesale; `None` keeps it active.
///
/// States are created fresh on every transition and dropped when replaced.
pub trait PetBehavior {
    fn kind(&self) -> StateKind;

    fn render_frame(&self) -> Option<FrameHandle>;

    fn advance(&mut self, ctx: &mut StepContext<'_>) -> Option<BehaviorState>;

    /// The state's animation, for inspection.
    fn animation(&self) -> &Animation;
}

/// Implemented by each concrete state struct so hosts can ask
/// `pet.is_in_state::<DragState>()`.
pub trait StateType: PetBehavior {
    const KIND: StateKind;
}
