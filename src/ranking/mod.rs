//! Deterministic ranking of scored regions.
//!
//! Regions are ordered by score descending; equal scores are ordered by
//! name ascending so the order is total and reproducible across runs.
//! Ranks are the 1-based positions in that order: contiguous, with no
//! shared ranks even across ties.

mod sort;

pub use sort::{compare_scored, sort_scored};

use crate::errors::{ResilienceError, Result};
use crate::scoring::ScoredRegion;
use im::Vector;
use serde::Serialize;

/// A scored region with its position in the ranking and its insight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRegion {
    pub rank: usize,
    #[serde(flatten)]
    pub scored: ScoredRegion,
    pub insight: String,
}

impl RankedRegion {
    pub fn name(&self) -> &str {
        self.scored.name()
    }

    pub fn score(&self) -> f64 {
        self.scored.score
    }
}

/// Regions in rank order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vector<RankedRegion>,
}

impl Ranking {
    /// Order scored regions and assign ranks, deriving an insight for each.
    pub fn rank_with<F>(regions: Vec<ScoredRegion>, insight: F) -> Self
    where
        F: Fn(&ScoredRegion) -> String,
    {
        let entries = sort_scored(regions)
            .into_iter()
            .enumerate()
            .map(|(index, scored)| RankedRegion {
                rank: index + 1,
                insight: insight(&scored),
                scored,
            })
            .collect();
        Self { entries }
    }

    /// Order scored regions and assign ranks without insights.
    pub fn rank(regions: Vec<ScoredRegion>) -> Self {
        Self::rank_with(regions, |_| String::new())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> im::vector::Iter<'_, RankedRegion> {
        self.entries.iter()
    }

    /// 1-based rank of the named region.
    pub fn position_of(&self, name: &str) -> Result<usize> {
        self.get(name).map(|entry| entry.rank)
    }

    /// Select a ranked region by exact name.
    pub fn get(&self, name: &str) -> Result<&RankedRegion> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| ResilienceError::not_found(name))
    }

    /// The `n` highest-ranked regions, best first. Saturates at the full ranking.
    pub fn top(&self, n: usize) -> Vector<RankedRegion> {
        self.entries.take(n.min(self.entries.len()))
    }

    /// The `n` lowest-ranked regions, kept in rank order (lowest last).
    pub fn bottom(&self, n: usize) -> Vector<RankedRegion> {
        let len = self.entries.len();
        self.entries.skip(len - n.min(len))
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedRegion;
    type IntoIter = im::vector::Iter<'a, RankedRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
