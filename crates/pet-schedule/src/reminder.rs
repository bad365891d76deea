//! The `Reminder` value type and its identifier.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use uuid::Uuid;

/// Unique reminder identifier (random UUID v4).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ReminderId(pub Uuid);

impl ReminderId {
    pub fn new() -> Self {
        ReminderId(Uuid::new_v4())
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for ReminderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(ReminderId)
    }
}

/// A time-triggered note.
///
/// Times are local wall-clock timestamps without a zone, matching what the
/// user typed into the management UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reminder {
    pub id:      ReminderId,
    pub content: String,
    pub due:     NaiveDateTime,
    /// Cleared when the reminder fires; a fired reminder never fires again.
    pub enabled: bool,
    pub created: NaiveDateTime,
}

impl Reminder {
    /// A fresh, enabled reminder with a new id.
    pub fn new(content: impl Into<String>, due: NaiveDateTime, now: NaiveDateTime) -> Self {
        Self {
            id:      ReminderId::new(),
            content: content.into(),
            due,
            enabled: true,
            created: now,
        }
    }

    /// Enabled and at or past its due time.
    #[inline]
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        self.enabled && now >= self.due
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.due.format("%Y-%m-%d %H:%M"), self.content)
    }
}
