//! Tick-based time model.
//!
//! # Design
//!
//! The pet never reads the wall clock for animation or dwell timing.  The
//! host calls `update` at a roughly fixed cadence (≈ 33 ms, ~30 Hz) and every
//! timer in the behavior core counts ticks, not milliseconds.  `TickClock`
//! holds the nominal mapping used for logging:
//!
//!   elapsed_ms = tick * tick_interval_ms
//!
//! Reminders are the exception: their due times are wall-clock timestamps
//! and live in `pet-schedule`.

use std::fmt;

use crate::{Point, Size};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute tick counter since the pet was created.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Converts between tick counts and nominal elapsed milliseconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    /// Nominal milliseconds between two `update` calls.  Default: 33.
    pub tick_interval_ms: u32,
    /// The current tick, advanced by `TickClock::advance()` each update.
    pub current_tick: Tick,
}

impl TickClock {
    pub fn new(tick_interval_ms: u32) -> Self {
        Self {
            tick_interval_ms,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Nominal milliseconds elapsed since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_interval_ms as u64
    }
}

impl fmt::Display for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed_ms();
        write!(
            f,
            "{} ({:02}:{:02}.{:03})",
            self.current_tick,
            ms / 60_000,
            (ms / 1_000) % 60,
            ms % 1_000
        )
    }
}

// ── PetConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one pet.
///
/// Typically loaded from a JSON file by the host application and passed to
/// `pet_sim::PetBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PetConfig {
    /// Nominal milliseconds between updates.  Default: 33 (~30 Hz).
    pub tick_interval_ms: u32,

    /// Ticks driven by `Pet::run`.  Interactive hosts ignore it and call
    /// `update` from their own timer.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical behavior.
    pub seed: u64,

    /// Usable screen area, read by states for boundary checks.
    pub screen_bounds: Size,

    /// Where the pet appears at startup.
    pub start_position: Point,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 33,
            total_ticks:      1_800,
            seed:             0,
            screen_bounds:    Size::new(1920, 1080),
            start_position:   Point::new(800, 400),
        }
    }
}

impl PetConfig {
    /// The tick at which `Pet::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `TickClock` pre-configured for this pet.
    pub fn make_clock(&self) -> TickClock {
        TickClock::new(self.tick_interval_ms)
    }
}
