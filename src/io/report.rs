//! Serializable snapshot of a pipeline run.

use crate::core::Granularity;
use crate::pipeline::PipelineResult;
use crate::ranking::RankedRegion;
use crate::scoring::{ScoringFailure, WeightSet};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Report handed to JSON consumers.
#[derive(Debug, Clone, Serialize)]
pub struct ResilienceReport {
    pub generated_at: DateTime<Utc>,
    pub granularity: Granularity,
    pub weights: WeightSet,
    pub regions: Vec<RankedRegion>,
    pub failures: Vec<ScoringFailure>,
}

impl ResilienceReport {
    pub fn new(result: &PipelineResult) -> Self {
        Self::at(result, Utc::now())
    }

    pub fn at(result: &PipelineResult, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            granularity: result.granularity,
            weights: result.weights,
            regions: result.ranking.iter().cloned().collect(),
            failures: result.failures.clone(),
        }
    }
}
