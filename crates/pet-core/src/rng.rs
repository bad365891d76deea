//! Deterministic RNG wrapper.
//!
//! Every random decision the pet makes (dwell times, the idle outcome draw,
//! attach durations) goes through one `PetRng` seeded from
//! [`PetConfig::seed`][crate::PetConfig::seed].  The same seed and the same
//! sequence of external inputs always reproduce the same behavior.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by one pet.
///
/// Used only from the tick driver's thread; it is `!Sync` on purpose.
pub struct PetRng(SmallRng);

impl PetRng {
    pub fn new(seed: u64) -> Self {
        PetRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A roll in `0..100`, used for percentage-weighted choices.
    #[inline]
    pub fn percent(&mut self) -> u32 {
        self.0.gen_range(0..100)
    }
}
