//! Rule-based natural-language insights.
//!
//! An insight explains what drives a region's score by checking the
//! normalized indicators (not the score) against an ordered rule table.
//! Each indicator contributes at most one phrase; phrases are joined as an
//! Oxford-comma list.
//!
//! ```
//! use resilmap::core::Indicators;
//! use resilmap::insights::InsightRuleSet;
//!
//! let rules = InsightRuleSet::default();
//! assert_eq!(
//!     rules.insight(&Indicators::new(0.8, 0.2, 0.3)),
//!     "strong income levels, very low unemployment, and affordable cost of living."
//! );
//! ```

pub mod join;
pub mod rules;

pub use join::join_phrases;
pub use rules::{Comparison, InsightRule, InsightRuleSet, InsightThresholds};

use crate::core::Indicators;

/// Text used when no rule fires.
pub const BALANCED_INSIGHT: &str = "balanced factors across income, unemployment, and cost.";

/// Insight under the default rule table.
pub fn insight(indicators: &Indicators) -> String {
    InsightRuleSet::default().insight(indicators)
}
