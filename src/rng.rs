//! Randomness source for dataset generation.
//!
//! Wraps `ChaCha8Rng`. The map page wants fresh values every session, so
//! the default is entropy-seeded; tests and reproducible CLI runs seed it
//! explicitly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct FacilityRng(pub ChaCha8Rng);

impl FacilityRng {
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uniform in [0, 1).
    pub fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    /// Uniform integer in [low, high).
    pub fn int_in(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..high)
    }

    /// Uniform float in [low, high), rounded to one decimal.
    pub fn tenths_in(&mut self, low: f64, high: f64) -> f64 {
        round_to(low + self.unit() * (high - low), 1)
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
