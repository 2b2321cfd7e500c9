//! Ordering rules for scored regions.

use crate::scoring::ScoredRegion;
use std::cmp::Ordering;

/// Score descending, then name ascending.
///
/// `total_cmp` keeps this a total order for every `f64`.
pub fn compare_scored(a: &ScoredRegion, b: &ScoredRegion) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.name().cmp(b.name()))
}

/// Sorts by score descending with name tie-break.
///
/// Pure function - returns new sorted Vec.
pub fn sort_scored(mut regions: Vec<ScoredRegion>) -> Vec<ScoredRegion> {
    regions.sort_by(compare_scored);
    regions
}
