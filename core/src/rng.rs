//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through a SimRng the caller constructs
//! from an explicit seed and passes into the generator. This means:
//!   - The same seed reproduces the same trial set, byte for byte.
//!   - Tests can pin exact outputs without global state.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A seeded, caller-owned RNG for a single simulation run.
pub struct SimRng {
    inner: Pcg64Mcg,
}

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Sample from Normal(mean, std) via the Box-Muller transform.
    /// std == 0.0 degenerates to exactly mean and consumes no rolls.
    pub fn normal(&mut self, mean: f64, std: f64) -> f64 {
        if std == 0.0 {
            return mean;
        }
        let u1 = self.next_f64().max(1e-12);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std * z
    }
}
