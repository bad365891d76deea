//! Wall-clock source for due checks.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Duration, Local, NaiveDateTime};

/// Supplies "now" to the scheduler.  Swapped for [`ManualClock`] in tests.
pub trait ReminderClock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

impl<T: ReminderClock + ?Sized> ReminderClock for Arc<T> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Local time from the operating system.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl ReminderClock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock(Mutex<NaiveDateTime>);

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self(Mutex::new(start))
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl ReminderClock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
