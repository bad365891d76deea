//! `ReminderScheduler`: the shared, persisted reminder collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::{
    ListenerId, Reminder, ReminderClock, ReminderError, ReminderId, ReminderListener,
    ReminderResult, ReminderStore, SystemClock,
};

type ListenerList = Vec<(ListenerId, Arc<dyn ReminderListener>)>;

/// Thread-safe owner of all reminders.
///
/// Every mutation happens under one mutex and is followed by a save of the
/// full collection.  A failed save is reported but the in-memory change is
/// kept; the next successful save (or an explicit [`persist`][Self::persist])
/// writes it out.
///
/// [`check_due`][Self::check_due] claims and disables due reminders inside
/// the lock, so concurrent callers never fire the same reminder twice.
/// Listeners run after the lock is released.
pub struct ReminderScheduler {
    reminders:     Mutex<Vec<Reminder>>,
    store:         Box<dyn ReminderStore>,
    clock:         Box<dyn ReminderClock>,
    listeners:     RwLock<ListenerList>,
    next_listener: AtomicU64,
}

impl ReminderScheduler {
    /// Scheduler over `store`, driven by the system clock.
    pub fn new(store: impl ReminderStore + 'static) -> Self {
        Self::with_clock(store, SystemClock)
    }

    /// Scheduler with an explicit clock.
    ///
    /// Loads the store once; a load failure is logged and the scheduler
    /// starts empty.
    pub fn with_clock(
        store: impl ReminderStore + 'static,
        clock: impl ReminderClock + 'static,
    ) -> Self {
        let reminders = match store.load() {
            Ok(r) => {
                debug!(count = r.len(), "reminders loaded");
                r
            }
            Err(e) => {
                warn!(error = %e, "could not load reminders, starting empty");
                Vec::new()
            }
        };
        Self {
            reminders:     Mutex::new(reminders),
            store:         Box::new(store),
            clock:         Box::new(clock),
            listeners:     RwLock::new(Vec::new()),
            next_listener: AtomicU64::new(0),
        }
    }

    /// Current time according to the scheduler's clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    // ── Listeners ─────────────────────────────────────────────────────────

    pub fn subscribe(&self, listener: Arc<dyn ReminderListener>) -> ListenerId {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, listener));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Add an enabled reminder.  Content must contain non-whitespace.
    ///
    /// On [`ReminderError::Persist`] the reminder is still in memory.
    pub fn add(&self, content: &str, due: NaiveDateTime) -> ReminderResult<ReminderId> {
        if content.trim().is_empty() {
            return Err(ReminderError::EmptyContent);
        }
        let reminder = Reminder::new(content, due, self.now());
        let id = reminder.id;
        let mut reminders = self.lock();
        reminders.push(reminder);
        debug!(%id, %due, "reminder added");
        self.save(&reminders)?;
        Ok(id)
    }

    pub fn delete(&self, id: ReminderId) -> ReminderResult<()> {
        let mut reminders = self.lock();
        let pos = reminders
            .iter()
            .position(|r| r.id == id)
            .ok_or(ReminderError::NotFound(id))?;
        reminders.remove(pos);
        debug!(%id, "reminder deleted");
        self.save(&reminders)
    }

    /// Replace content, due time and enabled flag of the reminder with
    /// `updated.id`.  The creation time is kept.
    ///
    /// Like [`toggle_enabled`][Self::toggle_enabled], turning a disabled
    /// reminder back on with a due time that is not in the future is
    /// refused with [`ReminderError::Expired`] and changes nothing.
    pub fn update(&self, updated: &Reminder) -> ReminderResult<()> {
        if updated.content.trim().is_empty() {
            return Err(ReminderError::EmptyContent);
        }
        let now = self.now();
        let mut reminders = self.lock();
        let existing = reminders
            .iter_mut()
            .find(|r| r.id == updated.id)
            .ok_or(ReminderError::NotFound(updated.id))?;
        if !existing.enabled && updated.enabled && updated.due <= now {
            return Err(ReminderError::Expired(updated.id));
        }
        existing.content = updated.content.clone();
        existing.due = updated.due;
        existing.enabled = updated.enabled;
        debug!(id = %updated.id, "reminder updated");
        self.save(&reminders)
    }

    /// Flip the enabled flag and return the new value.
    ///
    /// Re-enabling a reminder whose due time is not in the future is
    /// refused with [`ReminderError::Expired`] and leaves it disabled.
    pub fn toggle_enabled(&self, id: ReminderId) -> ReminderResult<bool> {
        let now = self.now();
        let mut reminders = self.lock();
        let reminder = reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReminderError::NotFound(id))?;
        if !reminder.enabled && reminder.due <= now {
            return Err(ReminderError::Expired(id));
        }
        reminder.enabled = !reminder.enabled;
        let enabled = reminder.enabled;
        debug!(%id, enabled, "reminder toggled");
        self.save(&reminders)?;
        Ok(enabled)
    }

    /// Fire every enabled reminder whose due time has been reached.
    ///
    /// Fired reminders are disabled and saved in one batch, then each
    /// listener is called once per fired reminder.  Returns the fired
    /// reminders in collection order.
    ///
    /// Listeners run after the collection lock is released, so a listener
    /// calling [`snapshot`][Self::snapshot] already sees the reminder
    /// disabled.  Claiming under the lock is what keeps firing at most once.
    /// If the save fails the reminders still stay disabled in memory.
    pub fn check_due(&self) -> Vec<Reminder> {
        let now = self.now();
        let fired: Vec<Reminder> = {
            let mut reminders = self.lock();
            let fired: Vec<Reminder> = reminders
                .iter_mut()
                .filter(|r| r.is_due(now))
                .map(|r| {
                    r.enabled = false;
                    r.clone()
                })
                .collect();
            if !fired.is_empty() && self.save(&reminders).is_err() {
                debug!(count = fired.len(), "fired reminders kept disabled in memory only");
            }
            fired
        };

        if fired.is_empty() {
            return fired;
        }
        let listeners: Vec<Arc<dyn ReminderListener>> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for reminder in &fired {
            info!(id = %reminder.id, due = %reminder.due, content = %reminder.content, "reminder due");
            for listener in &listeners {
                listener.on_reminder_due(reminder);
            }
        }
        fired
    }

    /// Write the current collection to the store.
    pub fn persist(&self) -> ReminderResult<()> {
        let reminders = self.lock();
        self.save(&reminders)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Enabled reminders due within `(now, now + window]`, soonest first.
    pub fn upcoming(&self, window: Duration) -> Vec<Reminder> {
        let now = self.now();
        let horizon = now + window;
        let mut soon: Vec<Reminder> = self
            .lock()
            .iter()
            .filter(|r| r.enabled && r.due > now && r.due <= horizon)
            .cloned()
            .collect();
        soon.sort_by_key(|r| r.due);
        soon
    }

    /// [`upcoming`][Self::upcoming] with a one-hour window.
    pub fn upcoming_hour(&self) -> Vec<Reminder> {
        self.upcoming(Duration::hours(1))
    }

    pub fn get(&self, id: ReminderId) -> Option<Reminder> {
        self.lock().iter().find(|r| r.id == id).cloned()
    }

    /// Copy of every reminder, enabled or not.
    pub fn snapshot(&self) -> Vec<Reminder> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn lock(&self) -> MutexGuard<'_, Vec<Reminder>> {
        self.reminders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn save(&self, reminders: &[Reminder]) -> ReminderResult<()> {
        self.store.save(reminders).map_err(|e| {
            warn!(error = %e, "reminder save failed, keeping in-memory state");
            ReminderError::Persist(e)
        })
    }
}

impl std::fmt::Debug for ReminderScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReminderScheduler")
            .field("reminders", &self.len())
            .finish_non_exhaustive()
    }
}
