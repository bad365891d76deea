//! Fluent builder for constructing a [`Pet`].

use std::sync::Arc;

use pet_behavior::{BehaviorState, BehaviorTuning, FrameLibrary, FrameSource, IdleState};
use pet_core::{PetConfig, PetRng};
use pet_schedule::ReminderScheduler;

use crate::{Pet, SimError, SimResult};

/// Fluent builder for [`Pet`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                   |
/// |--------------------|-------------------------------------------|
/// | `.frames(lib)`     | `FrameLibrary::empty()` (renders nothing) |
/// | `.frame_source(s)` | same as above, loaded from `s`            |
/// | `.tuning(t)`       | `BehaviorTuning::default()`               |
/// | `.reminders(s)`    | none; the pet never checks reminders      |
///
/// # Example
///
/// ```rust,ignore
/// let scheduler = Arc::new(ReminderScheduler::new(FileReminderStore::new("reminders.txt")));
/// let mut pet = PetBuilder::new(config)
///     .frame_source(&PlaceholderFrames::default())
///     .reminders(Arc::clone(&scheduler))
///     .build()?;
/// pet.run(&mut NoopObserver);
/// ```
pub struct PetBuilder {
    config:    PetConfig,
    frames:    Option<FrameLibrary>,
    tuning:    Option<BehaviorTuning>,
    reminders: Option<Arc<ReminderScheduler>>,
}

impl PetBuilder {
    pub fn new(config: PetConfig) -> Self {
        Self {
            config,
            frames:    None,
            tuning:    None,
            reminders: None,
        }
    }

    /// Use an already-loaded frame library.
    pub fn frames(mut self, frames: FrameLibrary) -> Self {
        self.frames = Some(frames);
        self
    }

    /// Load every animation from `source` once, up front.
    pub fn frame_source(mut self, source: &dyn FrameSource) -> Self {
        self.frames = Some(FrameLibrary::load(source));
        self
    }

    pub fn tuning(mut self, tuning: BehaviorTuning) -> Self {
        self.tuning = Some(tuning);
        self
    }

    /// Share a reminder scheduler with the pet.  The pet calls
    /// `check_due` once per tick; other threads may keep using it.
    pub fn reminders(mut self, scheduler: Arc<ReminderScheduler>) -> Self {
        self.reminders = Some(scheduler);
        self
    }

    /// Validate inputs and return a pet in a fresh Idle state at
    /// `config.start_position`.
    pub fn build(self) -> SimResult<Pet> {
        // ── Validate ──────────────────────────────────────────────────────
        if self.config.tick_interval_ms == 0 {
            return Err(SimError::Config("tick_interval_ms must be at least 1".into()));
        }
        if self.config.screen_bounds.is_empty() {
            return Err(SimError::Config(format!(
                "screen bounds {} have no area",
                self.config.screen_bounds
            )));
        }
        let tuning = self.tuning.unwrap_or_default();
        tuning.validate()?;

        // ── Initial state ─────────────────────────────────────────────────
        let frames = self.frames.unwrap_or_else(FrameLibrary::empty);
        let mut rng = PetRng::new(self.config.seed);
        let state = BehaviorState::Idle(IdleState::new(&frames, &tuning, &mut rng));

        Ok(Pet {
            clock:         self.config.make_clock(),
            position:      self.config.start_position,
            screen_bounds: self.config.screen_bounds,
            config:        self.config,
            state,
            rng,
            frames,
            tuning,
            reminders:     self.reminders,
        })
    }
}
