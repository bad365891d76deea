//! Tunable constants for every behavior state.
//!
//! Defaults reproduce the classic desktop-pet feel at ~30 Hz.  All durations
//! are in ticks; ranges are half-open `[min, max)`.

use pet_core::{PetRng, Size};

use crate::{BehaviorError, BehaviorResult};

// ── TickRange ─────────────────────────────────────────────────────────────────

/// A half-open range of tick counts, sampled uniformly once per activation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickRange {
    pub min: u32,
    pub max: u32,
}

impl TickRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Draw a value in `[min, max)`.  A degenerate range yields `min`.
    pub fn sample(&self, rng: &mut PetRng) -> u32 {
        if self.max <= self.min {
            self.min
        } else {
            rng.gen_range(self.min..self.max)
        }
    }

    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..self.max).contains(&value)
    }
}

// ── BehaviorTuning ────────────────────────────────────────────────────────────

/// Cadences, dwell ranges, physics constants and edge-attachment geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorTuning {
    // Animation cadences (ticks per frame).
    pub idle_cadence:          u32,
    pub drag_cadence:          u32,
    pub fall_cadence:          u32,
    pub attach_cadence:        u32,
    pub cookie_cadence:        u32,
    pub play_cadence:          u32,
    pub thunder_shock_cadence: u32,

    /// Idle dwell before the first outcome draw of an activation.
    pub idle_dwell:             TickRange,
    /// Dwell after the "keep idling" outcome.
    pub idle_repeat_dwell:      TickRange,
    pub attach_duration:        TickRange,
    pub cookie_duration:        TickRange,
    pub play_duration:          TickRange,
    pub thunder_shock_duration: TickRange,

    /// Chance (out of 100) that an expired idle dwell turns into eating.
    pub cookie_percent: u32,
    /// Chance (out of 100) that it turns into playing.  The remainder keeps idling.
    pub play_percent:   u32,

    /// Velocity increment per falling tick, in pixels.
    pub gravity:         i32,
    /// Proximity to a screen edge that triggers attachment, in pixels.
    pub attach_distance: i32,
    /// Gap kept between the landed sprite and the bottom of the screen.
    pub ground_margin:   i32,
    /// Sprite extent assumed when a state has no frame loaded.
    pub fallback_sprite: Size,
}

impl Default for BehaviorTuning {
    fn default() -> Self {
        Self {
            idle_cadence:          15,
            drag_cadence:          5,
            fall_cadence:          4,
            attach_cadence:        20,
            cookie_cadence:        15,
            play_cadence:          12,
            thunder_shock_cadence: 8,

            idle_dwell:             TickRange::new(100, 200),
            idle_repeat_dwell:      TickRange::new(120, 240),
            attach_duration:        TickRange::new(240, 600),
            cookie_duration:        TickRange::new(90, 180),
            play_duration:          TickRange::new(90, 180),
            thunder_shock_duration: TickRange::new(60, 120),

            cookie_percent: 50,
            play_percent:   40,

            gravity:         8,
            attach_distance: 50,
            ground_margin:   50,
            fallback_sprite: Size::new(64, 64),
        }
    }
}

impl BehaviorTuning {
    /// Reject values that would stall or break the state machine.
    pub fn validate(&self) -> BehaviorResult<()> {
        let cadences = [
            ("idle_cadence", self.idle_cadence),
            ("drag_cadence", self.drag_cadence),
            ("fall_cadence", self.fall_cadence),
            ("attach_cadence", self.attach_cadence),
            ("cookie_cadence", self.cookie_cadence),
            ("play_cadence", self.play_cadence),
            ("thunder_shock_cadence", self.thunder_shock_cadence),
        ];
        for (name, cadence) in cadences {
            if cadence == 0 {
                return Err(BehaviorError::Config(format!("{name} must be at least 1")));
            }
        }

        let ranges = [
            ("idle_dwell", self.idle_dwell),
            ("idle_repeat_dwell", self.idle_repeat_dwell),
            ("attach_duration", self.attach_duration),
            ("cookie_duration", self.cookie_duration),
            ("play_duration", self.play_duration),
            ("thunder_shock_duration", self.thunder_shock_duration),
        ];
        for (name, range) in ranges {
            if range.max <= range.min {
                return Err(BehaviorError::Config(format!(
                    "{name} is empty: [{}, {})",
                    range.min, range.max
                )));
            }
        }

        let weights = self.cookie_percent.checked_add(self.play_percent);
        if weights.is_none_or(|total| total > 100) {
            return Err(BehaviorError::Config(format!(
                "cookie_percent {} + play_percent {} exceeds 100",
                self.cookie_percent, self.play_percent
            )));
        }
        if self.gravity <= 0 {
            return Err(BehaviorError::Config("gravity must be positive".into()));
        }
        if self.attach_distance < 0 || self.ground_margin < 0 {
            return Err(BehaviorError::Config(
                "attach_distance and ground_margin must not be negative".into(),
            ));
        }
        if self.fallback_sprite.is_empty() {
            return Err(BehaviorError::Config(format!(
                "fallback_sprite {} has no area",
                self.fallback_sprite
            )));
        }
        Ok(())
    }
}
