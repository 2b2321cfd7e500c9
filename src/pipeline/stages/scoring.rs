//! Scoring stage: score every region, isolating per-region failures.

use crate::core::RegionCollection;
use crate::scoring::{ScoredRegion, ScoringFailure, WeightSet};

/// Score all regions (pure).
///
/// Regions whose score cannot be computed are returned separately, in
/// collection order. A failure never affects another region's score.
pub fn score_regions(
    collection: &RegionCollection,
    weights: &WeightSet,
) -> (Vec<ScoredRegion>, Vec<ScoringFailure>) {
    let mut scored = Vec::with_capacity(collection.len());
    let mut failures = Vec::new();

    for region in collection {
        match ScoredRegion::compute(region.clone(), weights) {
            Ok(result) => scored.push(result),
            Err(failure) => failures.push(failure),
        }
    }

    (scored, failures)
}
