//! Ranking stage: order scored regions and attach insights.

use crate::insights::InsightRuleSet;
use crate::ranking::Ranking;
use crate::scoring::ScoredRegion;

/// Rank scored regions and derive each region's insight (pure).
///
/// Insights are computed from the normalized indicators only, so the rank
/// order has no influence on the text.
pub fn rank_regions(scored: Vec<ScoredRegion>, rules: &InsightRuleSet) -> Ranking {
    Ranking::rank_with(scored, |s| rules.insight(&s.region.indicators))
}
