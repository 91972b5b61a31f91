//! Simulation configuration.
//!
//! All parameters are plain constants carried on [`SimConfig`].
//! Validation is fatal and runs before any sampling begins; a config
//! whose tier weights do not sum to 1 never reaches the generator.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Tolerance for the tier-weight sum check.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// One target-sales tier and its selection probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierConfig {
    pub target_sales: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Mean of the achievement-percentage normal distribution.
    pub achievement_mean: f64,
    /// Standard deviation of the achievement-percentage distribution.
    pub achievement_std: f64,
    /// Number of independent trials per generation pass.
    pub n_reps: usize,
    /// Target tiers, sampled categorically by weight.
    pub tiers: Vec<TierConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            achievement_mean: 1.0,
            achievement_std: 0.1,
            n_reps: 500,
            tiers: vec![
                TierConfig { target_sales: 75_000.0, weight: 0.30 },
                TierConfig { target_sales: 100_000.0, weight: 0.30 },
                TierConfig { target_sales: 200_000.0, weight: 0.20 },
                TierConfig { target_sales: 300_000.0, weight: 0.10 },
                TierConfig { target_sales: 400_000.0, weight: 0.05 },
                TierConfig { target_sales: 500_000.0, weight: 0.05 },
            ],
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        if !self.achievement_std.is_finite() || self.achievement_std < 0.0 {
            return Err(invalid(format!(
                "achievement_std must be finite and non-negative, got {}",
                self.achievement_std
            )));
        }
        if !self.achievement_mean.is_finite() {
            return Err(invalid(format!(
                "achievement_mean must be finite, got {}",
                self.achievement_mean
            )));
        }
        if self.tiers.is_empty() {
            return Err(invalid("tier list is empty".into()));
        }
        for (i, tier) in self.tiers.iter().enumerate() {
            if !tier.target_sales.is_finite() || tier.target_sales <= 0.0 {
                return Err(invalid(format!(
                    "tier {i}: target_sales must be positive, got {}",
                    tier.target_sales
                )));
            }
            if !(0.0..=1.0).contains(&tier.weight) {
                return Err(invalid(format!(
                    "tier {i}: weight must be in [0, 1], got {}",
                    tier.weight
                )));
            }
        }
        let sum: f64 = self.tiers.iter().map(|t| t.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(invalid(format!(
                "tier weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> SimError {
    SimError::InvalidConfig { reason }
}
