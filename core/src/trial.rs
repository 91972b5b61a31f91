//! Per-trial records and the ordered trial set.

use crate::error::SimResult;
use serde::{Deserialize, Serialize};

/// One simulated salesperson-period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    pub target_sales: f64,
    pub achievement_pct: f64,
    pub actual_sales: f64,
    pub commission_rate: f64,
    pub commission_amount: f64,
}

/// Trials in generation order. Trials are i.i.d., so the order carries
/// no meaning beyond insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialSet(Vec<Trial>);

impl TrialSet {
    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }

    pub fn push(&mut self, trial: Trial) {
        self.0.push(trial);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trial> {
        self.0.iter()
    }

    /// First `n` trials, or all of them if the set is shorter.
    pub fn head(&self, n: usize) -> &[Trial] {
        &self.0[..n.min(self.0.len())]
    }

    /// First `n` trials as pretty-printed JSON.
    pub fn head_json(&self, n: usize) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self.head(n))?)
    }
}

impl<'a> IntoIterator for &'a TrialSet {
    type Item = &'a Trial;
    type IntoIter = std::slice::Iter<'a, Trial>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
