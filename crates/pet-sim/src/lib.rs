//! `pet-sim`: the pet agent context and its tick loop.
//!
//! # Tick loop
//!
//! ```text
//! every tick (≈33 ms):
//!   ① Reminders: scheduler.check_due(); any fired → observer.on_reminder,
//!                and the pet goes Idle unless Idle or dragged.
//!   ② Advance:   active state runs against a StepContext and may return
//!                its successor, which replaces it wholesale.
//!   ③ Edges:     only while Idle: near Top/Left/Right → snap + Attach.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pet_behavior::PlaceholderFrames;
//! use pet_core::PetConfig;
//! use pet_sim::{NoopObserver, PetBuilder};
//!
//! let mut pet = PetBuilder::new(PetConfig::default())
//!     .frame_source(&PlaceholderFrames::default())
//!     .build()?;
//! pet.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod pet;


pub use builder::PetBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, PetObserver};
pub use pet::Pet;
