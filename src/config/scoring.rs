//! Raw weight configuration.
//!
//! Values are stored exactly as the user wrote them. They are not range
//! checked: normalization accepts any input and falls back to income-only
//! weighting when the sum is degenerate.

use crate::scoring::{WeightSet, DEFAULT_RAW_WEIGHTS};
use serde::{Deserialize, Serialize};

/// Raw (un-normalized) scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawWeights {
    /// Weight for median income (default: 0.4)
    #[serde(default = "default_income_weight")]
    pub income: f64,

    /// Weight for unemployment, inverted before weighting (default: 0.3)
    #[serde(default = "default_unemployment_weight")]
    pub unemployment: f64,

    /// Weight for cost of living, inverted before weighting (default: 0.3)
    #[serde(default = "default_cost_weight")]
    pub cost: f64,
}

impl Default for RawWeights {
    fn default() -> Self {
        Self {
            income: default_income_weight(),
            unemployment: default_unemployment_weight(),
            cost: default_cost_weight(),
        }
    }
}

impl RawWeights {
    /// Replace individual weights with any that were given explicitly.
    pub fn with_overrides(
        self,
        income: Option<f64>,
        unemployment: Option<f64>,
        cost: Option<f64>,
    ) -> Self {
        Self {
            income: income.unwrap_or(self.income),
            unemployment: unemployment.unwrap_or(self.unemployment),
            cost: cost.unwrap_or(self.cost),
        }
    }

    pub fn normalize(&self) -> WeightSet {
        WeightSet::normalize(self.income, self.unemployment, self.cost)
    }
}

pub fn default_income_weight() -> f64 {
    DEFAULT_RAW_WEIGHTS.0
}
pub fn default_unemployment_weight() -> f64 {
    DEFAULT_RAW_WEIGHTS.1
}
pub fn default_cost_weight() -> f64 {
    DEFAULT_RAW_WEIGHTS.2
}
