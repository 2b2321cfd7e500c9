//! Insight rule table.
//!
//! Rules are plain data so the table can be inspected, tested and tuned
//! from configuration. Evaluation walks indicators in the fixed order
//! income, unemployment, cost; within one indicator the first matching
//! rule wins.

use super::{join_phrases, BALANCED_INSIGHT};
use crate::core::{IndicatorField, Indicators};
use serde::{Deserialize, Serialize};

/// Strict threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Above(f64),
    Below(f64),
}

impl Comparison {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Comparison::Above(threshold) => value > threshold,
            Comparison::Below(threshold) => value < threshold,
        }
    }
}

/// One `(predicate, phrase)` rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightRule {
    pub field: IndicatorField,
    pub comparison: Comparison,
    pub phrase: &'static str,
}

impl InsightRule {
    pub const fn new(field: IndicatorField, comparison: Comparison, phrase: &'static str) -> Self {
        Self {
            field,
            comparison,
            phrase,
        }
    }

    pub fn matches(&self, indicators: &Indicators) -> bool {
        indicators
            .usable(self.field)
            .is_some_and(|value| self.comparison.matches(value))
    }
}

/// Threshold configuration for the insight rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Income above this is "strong income levels" (default: 0.75)
    #[serde(default = "default_strong_income")]
    pub strong_income: f64,

    /// Income below this is "low income levels" (default: 0.4)
    #[serde(default = "default_low_income")]
    pub low_income: f64,

    /// Unemployment below this is "very low unemployment" (default: 0.3)
    #[serde(default = "default_low_unemployment")]
    pub low_unemployment: f64,

    /// Unemployment above this is "high unemployment" (default: 0.7)
    #[serde(default = "default_high_unemployment")]
    pub high_unemployment: f64,

    /// Cost below this is "affordable cost of living" (default: 0.4)
    #[serde(default = "default_affordable_cost")]
    pub affordable_cost: f64,

    /// Cost above this is "high cost of living" (default: 0.75)
    #[serde(default = "default_high_cost")]
    pub high_cost: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            strong_income: default_strong_income(),
            low_income: default_low_income(),
            low_unemployment: default_low_unemployment(),
            high_unemployment: default_high_unemployment(),
            affordable_cost: default_affordable_cost(),
            high_cost: default_high_cost(),
        }
    }
}

impl InsightThresholds {
    /// Every threshold must be a finite number.
    pub fn validate(&self) -> Result<(), String> {
        let thresholds = [
            ("strong_income", self.strong_income),
            ("low_income", self.low_income),
            ("low_unemployment", self.low_unemployment),
            ("high_unemployment", self.high_unemployment),
            ("affordable_cost", self.affordable_cost),
            ("high_cost", self.high_cost),
        ];

        match thresholds.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(format!("{} threshold {} is not finite", name, value)),
            None => Ok(()),
        }
    }
}

pub fn default_strong_income() -> f64 {
    0.75
}
pub fn default_low_income() -> f64 {
    0.4
}
pub fn default_low_unemployment() -> f64 {
    0.3
}
pub fn default_high_unemployment() -> f64 {
    0.7
}
pub fn default_affordable_cost() -> f64 {
    0.4
}
pub fn default_high_cost() -> f64 {
    0.75
}

/// Ordered rule table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightRuleSet {
    rules: Vec<InsightRule>,
}

impl InsightRuleSet {
    pub fn from_thresholds(t: &InsightThresholds) -> Self {
        use Comparison::{Above, Below};
        use IndicatorField::{Cost, Income, Unemployment};

        Self {
            rules: vec![
                InsightRule::new(Income, Above(t.strong_income), "strong income levels"),
                InsightRule::new(Income, Below(t.low_income), "low income levels"),
                InsightRule::new(Unemployment, Below(t.low_unemployment), "very low unemployment"),
                InsightRule::new(Unemployment, Above(t.high_unemployment), "high unemployment"),
                InsightRule::new(Cost, Below(t.affordable_cost), "affordable cost of living"),
                InsightRule::new(Cost, Above(t.high_cost), "high cost of living"),
            ],
        }
    }

    pub fn rules(&self) -> &[InsightRule] {
        &self.rules
    }

    /// Phrases triggered by the indicators, one per field at most, in field order.
    pub fn phrases(&self, indicators: &Indicators) -> Vec<&'static str> {
        IndicatorField::ALL
            .iter()
            .filter_map(|&field| {
                self.rules
                    .iter()
                    .filter(|rule| rule.field == field)
                    .find(|rule| rule.matches(indicators))
                    .map(|rule| rule.phrase)
            })
            .collect()
    }

    pub fn insight(&self, indicators: &Indicators) -> String {
        join_phrases(&self.phrases(indicators)).unwrap_or_else(|| BALANCED_INSIGHT.to_string())
    }
}

impl Default for InsightRuleSet {
    fn default() -> Self {
        Self::from_thresholds(&InsightThresholds::default())
    }
}
