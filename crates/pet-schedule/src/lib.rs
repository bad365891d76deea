//! `pet-schedule`: user reminders with storage, due checks and notification.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`reminder`]  | `Reminder`, `ReminderId`                                   |
//! | [`scheduler`] | `ReminderScheduler` (shared, thread-safe collection)       |
//! | [`store`]     | `ReminderStore` trait, `FileReminderStore`, `MemoryReminderStore` |
//! | [`clock`]     | `ReminderClock` trait, `SystemClock`, `ManualClock`        |
//! | [`listener`]  | `ReminderListener` trait, `ListenerId`                     |
//! | [`error`]     | `ReminderError`, `StoreError`, result aliases              |
//!
//! # Firing model
//!
//! ```text
//! check_due():
//!   lock ─► claim enabled reminders with due ≤ now ─► disable ─► save once
//!   unlock ─► notify listeners (one call per fired reminder)
//! ```
//!
//! Because claiming and disabling happen under the same lock, a reminder
//! fires at most once even with several threads calling `check_due`.

pub mod clock;
pub mod error;
pub mod listener;
pub mod reminder;
pub mod scheduler;
pub mod store;

#[cfg(test)]
mod tests;

pub use clock::{ManualClock, ReminderClock, SystemClock};
pub use error::{ReminderError, ReminderResult, StoreError, StoreResult};
pub use listener::{ListenerId, ReminderListener};
pub use reminder::{Reminder, ReminderId};
pub use scheduler::ReminderScheduler;
pub use store::{
    FileReminderStore, MemoryReminderStore, ReminderStore, TIMESTAMP_FORMAT, read_reminders,
    write_reminders,
};
