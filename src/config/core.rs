use serde::{Deserialize, Serialize};

use super::display::DisplayConfig;
use super::scoring::RawWeights;
use crate::insights::{InsightRuleSet, InsightThresholds};

/// Root configuration structure for resilmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResilmapConfig {
    /// Raw scoring weights
    #[serde(default)]
    pub weights: Option<RawWeights>,

    /// Insight rule thresholds
    #[serde(default)]
    pub insights: Option<InsightThresholds>,

    /// Display configuration for terminal output
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

impl ResilmapConfig {
    pub fn weights(&self) -> RawWeights {
        self.weights.unwrap_or_default()
    }

    pub fn insight_thresholds(&self) -> InsightThresholds {
        self.insights.unwrap_or_default()
    }

    pub fn insight_rules(&self) -> InsightRuleSet {
        InsightRuleSet::from_thresholds(&self.insight_thresholds())
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }
}
