//! Due-notification subscribers.

use std::fmt;

use crate::Reminder;

/// Receives every reminder that fires.
///
/// Called after the scheduler has released its collection lock, so a
/// listener may safely call back into the scheduler.
pub trait ReminderListener: Send + Sync {
    fn on_reminder_due(&self, reminder: &Reminder);
}

impl<F> ReminderListener for F
where
    F: Fn(&Reminder) + Send + Sync,
{
    fn on_reminder_due(&self, reminder: &Reminder) {
        self(reminder)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerId({})", self.0)
    }
}
