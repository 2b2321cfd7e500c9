//! Weight normalization for the resilience score.
//!
//! Users choose three independent raw weights (typically from bounded
//! sliders). [`WeightSet::normalize`] turns them into a triple summing to 1.
//! A degenerate input never fails: it falls back to full weight on income.

use serde::Serialize;

/// Maximum allowed deviation of a normalized weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Raw slider defaults for income, unemployment and cost.
pub const DEFAULT_RAW_WEIGHTS: (f64, f64, f64) = (0.4, 0.3, 0.3);

/// Normalized income/unemployment/cost weights.
///
/// Only obtainable through [`WeightSet::normalize`] or [`Default`], so every
/// value in circulation satisfies the sum-to-one invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightSet {
    income: f64,
    unemployment: f64,
    cost: f64,
    #[serde(rename = "fallback_applied")]
    fallback: bool,
}

impl WeightSet {
    /// Normalize three raw weights so they sum to 1.
    ///
    /// Negative and >1 inputs are accepted and divided through like any
    /// other value. When the raw sum is zero or not finite the result is the
    /// default `(1, 0, 0)` triple.
    pub fn normalize(raw_income: f64, raw_unemployment: f64, raw_cost: f64) -> Self {
        let total = raw_income + raw_unemployment + raw_cost;

        if total == 0.0 || !total.is_finite() {
            tracing::warn!(
                raw_income,
                raw_unemployment,
                raw_cost,
                "Degenerate weight sum; falling back to income-only weighting"
            );
            return Self::income_only();
        }

        let weights = Self {
            income: raw_income / total,
            unemployment: raw_unemployment / total,
            cost: raw_cost / total,
            fallback: false,
        };
        tracing::debug!(
            income = weights.income,
            unemployment = weights.unemployment,
            cost = weights.cost,
            "Normalized weights"
        );
        weights
    }

    fn income_only() -> Self {
        Self {
            income: 1.0,
            unemployment: 0.0,
            cost: 0.0,
            fallback: true,
        }
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn unemployment(&self) -> f64 {
        self.unemployment
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn sum(&self) -> f64 {
        self.income + self.unemployment + self.cost
    }

    /// True when the raw input was degenerate and the fallback applied.
    pub fn is_default_fallback(&self) -> bool {
        self.fallback
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.income, self.unemployment, self.cost)
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        let (income, unemployment, cost) = DEFAULT_RAW_WEIGHTS;
        Self::normalize(income, unemployment, cost)
    }
}
