//! Deterministic, explicitly seeded RNG for per-day demand generation.
//!
//! # Determinism strategy
//!
//! There is no process-wide random state.  Every consumer owns a `DayRng`
//! seeded from an explicit value, so two runs with the same seed produce the
//! same orders and distance matrices, and tests never interfere with each
//! other.
//!
//! The seed for day `d` of a run is:
//!
//!   seed = global_seed XOR (d * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive day indices uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG used for order generation and random distance matrices.
///
/// Single-threaded by construction; create one wherever randomness is
/// needed rather than sharing.
pub struct DayRng(SmallRng);

impl DayRng {
    pub fn new(seed: u64) -> Self {
        DayRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed for day `day` of a run started with `global_seed`.
    #[inline]
    pub fn day_seed(global_seed: u64, day: u64) -> u64 {
        global_seed ^ day.wrapping_mul(MIXING_CONSTANT)
    }

    /// Shorthand for `DayRng::new(DayRng::day_seed(global_seed, day))`.
    pub fn for_day(global_seed: u64, day: u64) -> Self {
        Self::new(Self::day_seed(global_seed, day))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
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

    /// `true` with probability `p` (clamped to [0, 1]; NaN counts as 0).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
