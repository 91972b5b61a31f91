//! Simulation generator: one batch pass over `n_reps` trials.

use crate::{
    commission::RateSchedule,
    config::{SimConfig, TierConfig},
    error::SimResult,
    rng::SimRng,
    trial::{Trial, TrialSet},
};

pub struct SimulationGenerator {
    config: SimConfig,
    schedule: RateSchedule,
}

impl SimulationGenerator {
    /// Validates the configuration and schedule before any sampling.
    pub fn new(config: SimConfig, schedule: RateSchedule) -> SimResult<Self> {
        config.validate()?;
        schedule.validate()?;
        Ok(Self { config, schedule })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Generate the full trial set. Deterministic for a fixed seed;
    /// `n_reps == 0` yields an empty set.
    pub fn generate(&self, rng: &mut SimRng) -> TrialSet {
        log::debug!(
            "generating {} trials (mean {}, std {})",
            self.config.n_reps,
            self.config.achievement_mean,
            self.config.achievement_std
        );

        let mut trials = TrialSet::with_capacity(self.config.n_reps);
        for _ in 0..self.config.n_reps {
            let achievement_pct = round2(
                rng.normal(self.config.achievement_mean, self.config.achievement_std),
            );
            let tier = self.pick_tier(rng);
            let actual_sales = tier.target_sales * achievement_pct;
            let commission_rate = self.schedule.rate_for(achievement_pct);

            trials.push(Trial {
                target_sales: tier.target_sales,
                achievement_pct,
                actual_sales,
                commission_rate,
                commission_amount: commission_rate * actual_sales,
            });
        }
        trials
    }

    fn pick_tier(&self, rng: &mut SimRng) -> &TierConfig {
        let roll = rng.next_f64();
        let mut cumulative = 0.0;
        for tier in &self.config.tiers {
            cumulative += tier.weight;
            if roll < cumulative {
                return tier;
            }
        }
        // Weights sum to 1 within tolerance; the last tier absorbs any
        // floating-point shortfall. Non-empty per validation.
        self.config.tiers.last().unwrap()
    }
}

/// Achievement percentages are reported at 2 decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
