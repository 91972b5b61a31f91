//! Tiered commission rate schedule.
//!
//! The rate is a step function of achievement percentage, kept as an
//! explicit ordered breakpoint list rather than nested conditionals.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// One step of the schedule: `rate` applies up to and including
/// `max_achievement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateBreak {
    pub max_achievement: f64,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Breaks in ascending `max_achievement` order.
    pub breaks: Vec<RateBreak>,
    /// Rate past the last break.
    pub top_rate: f64,
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            breaks: vec![
                RateBreak { max_achievement: 0.90, rate: 0.02 },
                RateBreak { max_achievement: 0.99, rate: 0.03 },
            ],
            top_rate: 0.04,
        }
    }
}

impl RateSchedule {
    /// Rate for an achievement percentage. Boundaries are inclusive on
    /// the lower tier: a pct exactly at a break takes that break's rate.
    pub fn rate_for(&self, achievement_pct: f64) -> f64 {
        for brk in &self.breaks {
            if achievement_pct <= brk.max_achievement {
                return brk.rate;
            }
        }
        self.top_rate
    }

    pub fn validate(&self) -> SimResult<()> {
        for pair in self.breaks.windows(2) {
            if pair[1].max_achievement <= pair[0].max_achievement {
                return Err(SimError::InvalidConfig {
                    reason: format!(
                        "rate breaks must be strictly increasing: {} then {}",
                        pair[0].max_achievement, pair[1].max_achievement
                    ),
                });
            }
        }
        Ok(())
    }
}
