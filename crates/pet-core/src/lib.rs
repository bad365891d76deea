//! `pet-core`: foundational types for the `rust_pet` desktop companion.
//!
//! This crate is a dependency of every other `pet-*` crate.  It intentionally
//! has no `pet-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).  It has no error type of its own: nothing here can
//! fail, and configuration is validated by `pet_sim::PetBuilder`.
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`geo`]    | `Point`, `Size` (integer screen pixels)           |
//! | [`ids`]    | `FrameId`                                         |
//! | [`time`]   | `Tick`, `TickClock`, `PetConfig`                  |
//! | [`rng`]    | `PetRng` (seeded, reproducible)                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{Point, Size};
pub use ids::FrameId;
pub use rng::PetRng;
pub use time::{PetConfig, Tick, TickClock};
