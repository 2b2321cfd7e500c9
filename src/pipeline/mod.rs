//! Pure resilience pipeline.
//!
//! ```text
//! RegionCollection + WeightSet
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  run_pipeline()  │ ← InsightRuleSet (params, not env vars)
//! └──────────────────┘
//!        │
//!        ├─→ score_regions()  ← Score each region, isolate failures
//!        └─→ rank_regions()   ← Order, assign ranks, attach insights
//!        │
//!        ▼
//! PipelineResult
//! ```
//!
//! Every weight change re-runs the whole pipeline from the immutable input
//! collection; nothing is patched in place.

pub mod stages;

use crate::core::{Granularity, RegionCollection};
use crate::insights::InsightRuleSet;
use crate::ranking::Ranking;
use crate::scoring::{ScoringFailure, WeightSet};
use serde::Serialize;
use tracing::{debug, info_span, warn};

pub use stages::ranking::rank_regions;
pub use stages::scoring::score_regions;

/// Scored, ranked and annotated regions for one weight set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    pub granularity: Granularity,
    pub weights: WeightSet,
    pub ranking: Ranking,
    /// Regions excluded from the ranking, in collection order.
    pub failures: Vec<ScoringFailure>,
}

impl PipelineResult {
    /// Number of input regions, ranked or not.
    pub fn total_regions(&self) -> usize {
        self.ranking.len() + self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Run the pipeline with the default insight rules.
pub fn run_pipeline(collection: &RegionCollection, weights: &WeightSet) -> PipelineResult {
    run_pipeline_with_rules(collection, weights, &InsightRuleSet::default())
}

/// Score, rank and annotate every region in `collection`.
///
/// Deterministic: the same collection and weights always produce an equal
/// result.
pub fn run_pipeline_with_rules(
    collection: &RegionCollection,
    weights: &WeightSet,
    rules: &InsightRuleSet,
) -> PipelineResult {
    let span = info_span!(
        "resilience_pipeline",
        regions = collection.len(),
        granularity = %collection.granularity()
    );
    let _guard = span.enter();

    let (scored, failures) = score_regions(collection, weights);
    debug!(scored = scored.len(), failed = failures.len(), "Scoring complete");

    for failure in &failures {
        warn!(
            region = %failure.region,
            field = %failure.field,
            "Excluding region with invalid indicator"
        );
    }

    let ranking = rank_regions(scored, rules);
    debug!(ranked = ranking.len(), "Ranking complete");

    PipelineResult {
        granularity: collection.granularity(),
        weights: *weights,
        ranking,
        failures,
    }
}
