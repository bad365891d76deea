//! `pet-behavior`: the pet's behavior state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`frames`]    | `FrameHandle`, `AnimationKey`, `FrameSource`, `FrameLibrary`      |
//! | [`animation`] | `Animation`: cyclic frame index with a tick cadence               |
//! | [`tuning`]    | `BehaviorTuning`, `TickRange`                                     |
//! | [`edge`]      | `detect_edge`, `AttachDirection`, `EdgeHit`                       |
//! | [`context`]   | `StepContext<'a>`: mutable per-tick view given to the state       |
//! | [`model`]     | `PetBehavior` trait, `StateType`, `StateKind`                     |
//! | [`state`]     | `BehaviorState` enum over the seven states                        |
//! | [`idle`], [`drag`], [`fall`], [`attach`], [`timed`] | the states themselves       |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                              |
//!
//! # Design notes
//!
//! Each tick the pet builds a [`StepContext`] and calls
//! [`PetBehavior::advance`] on its active state.  The state mutates the
//! position through the context and *returns* its successor instead of
//! installing it, so the pet swaps states only after the old one has
//! finished running.  No tick ever observes a half-switched state, and the
//! state machine needs no locking: ticks are driven from one thread.
//!
//! ```text
//!            ┌──── 50% ───► Cookie ──┐
//!   Idle ────┼──── 40% ───► Play  ───┼──► Idle
//!    ▲  │    └──── 10% ───► Idle     │
//!    │  └── edge ─► Attach ──────────┘
//!    │
//!   Drag ── end_drag ─► Fall ── ground ─► Idle
//!                        └──── edge ───► Attach
//! ```

pub mod animation;
pub mod attach;
pub mod context;
pub mod drag;
pub mod edge;
pub mod error;
pub mod fall;
pub mod frames;
pub mod idle;
pub mod model;
pub mod state;
pub mod timed;
pub mod tuning;


pub use animation::Animation;
pub use attach::AttachState;
pub use context::StepContext;
pub use drag::DragState;
pub use edge::{AttachDirection, EdgeHit, detect_edge};
pub use error::{BehaviorError, BehaviorResult};
pub use fall::FallState;
pub use frames::{AnimationKey, FrameHandle, FrameLibrary, FrameSource, PlaceholderFrames};
pub use idle::IdleState;
pub use model::{PetBehavior, StateKind, StateType};
pub use state::BehaviorState;
pub use timed::{CookieState, PlayState, ThunderShockState, TimedAction};
pub use tuning::{BehaviorTuning, TickRange};
