//! Pet observer trait for transition logging and reminder display.

use pet_behavior::StateKind;
use pet_core::Tick;
use pet_schedule::Reminder;

/// Callbacks invoked by [`Pet::step`][crate::Pet::step] and friends at key
/// points in the tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: balloon on reminder
///
/// ```rust,ignore
/// struct Balloon;
///
/// impl PetObserver for Balloon {
///     fn on_reminder(&mut self, _tick: Tick, reminder: &Reminder) {
///         println!("⏰ {}", reminder.content);
///     }
/// }
/// ```
pub trait PetObserver {
    /// Called at the very start of each tick, before the reminder check.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per reminder that fired this tick.
    fn on_reminder(&mut self, _tick: Tick, _reminder: &Reminder) {}

    /// Called after the active state has been replaced.
    fn on_transition(&mut self, _tick: Tick, _from: StateKind, _to: StateKind) {}

    /// Called at the end of each tick with the state that is now active.
    fn on_tick_end(&mut self, _tick: Tick, _state: StateKind) {}

    /// Called once after [`Pet::run`][crate::Pet::run] completes.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`PetObserver`] that does nothing.
pub struct NoopObserver;

impl PetObserver for NoopObserver {}
