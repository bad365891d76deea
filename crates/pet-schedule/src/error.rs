use thiserror::Error;

use crate::ReminderId;

/// Failures of a [`ReminderStore`][crate::ReminderStore] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("reminder parse error: {0}")]
    Parse(String),

    /// Raised by test doubles that simulate an unwritable store.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Why a scheduler operation was rejected or only partly succeeded.
#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("reminder content is empty")]
    EmptyContent,

    #[error("reminder {0} not found")]
    NotFound(ReminderId),

    /// Re-enabling a reminder whose due time has already passed.
    #[error("reminder {0} has expired")]
    Expired(ReminderId),

    /// The in-memory change was applied but could not be saved.
    #[error("failed to persist reminders: {0}")]
    Persist(#[from] StoreError),
}

pub type ReminderResult<T> = Result<T, ReminderError>;
