//! Deterministic random number generation.
//!
//! Wraps PCG (Permuted Congruential Generator) so that every random draw in
//! the animation comes from one injectable, seedable source.
//!
//! # Reproducibility Guarantee
//!
//! Given the same master seed, the scatter clouds of two runs are
//! bitwise-identical across runs and platforms.

use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Deterministic, reproducible random number generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimRng {
    /// Master seed for reproducibility.
    master_seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl SimRng {
    /// Create a new RNG with the given master seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            rng: Pcg64::seed_from_u64(master_seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is kept so the run can be replayed later.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        log::info!("seeding scatter RNG from entropy: seed={seed}");
        Self::new(seed)
    }

    /// Get the master seed.
    #[must_use]
    pub const fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Generate a random f64 in `[min, max)`.
    ///
    /// Reversed bounds are swapped; `min == max` yields `min`.
    pub fn gen_range_f64(&mut self, min: f64, max: f64) -> f64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        lo + (hi - lo) * self.gen_f64()
    }

    /// Generate a uniform angle in [0, 2π).
    pub fn gen_angle(&mut self) -> f64 {
        std::f64::consts::TAU * self.gen_f64()
    }

    /// Generate n random f64 samples in `[min, max)`.
    #[must_use]
    pub fn sample_uniform(&mut self, n: usize, min: f64, max: f64) -> Vec<f64> {
        (0..n).map(|_| self.gen_range_f64(min, max)).collect()
    }
}
