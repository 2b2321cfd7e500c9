//! Resilience score calculation.
//!
//! ```text
//! score = w_income * income
//!       + w_unemployment * (1 - unemployment)
//!       + w_cost * (1 - cost)
//! ```
//!
//! Lower unemployment and lower cost of living both raise resilience, so
//! those two indicators are inverted before weighting. The weighted sum is
//! rounded once, at the end, to [`SCORE_PRECISION`] decimal places. No
//! clamping is applied: out-of-range indicators surface as out-of-range
//! scores.

use super::weights::WeightSet;
use crate::core::{IndicatorField, Indicators, Region};
use crate::errors::{ResilienceError, Result};
use serde::Serialize;

/// Number of decimal places kept in a final score.
pub const SCORE_PRECISION: i32 = 3;

/// Weighted contribution of each indicator to a score.
///
/// The per-indicator terms are unrounded; only `total` is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub income: f64,
    pub unemployment: f64,
    pub cost: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn contribution(&self, field: IndicatorField) -> f64 {
        match field {
            IndicatorField::Income => self.income,
            IndicatorField::Unemployment => self.unemployment,
            IndicatorField::Cost => self.cost,
        }
    }
}

/// A region whose score could not be computed because an indicator was
/// absent or not a finite number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringFailure {
    pub region: String,
    pub field: IndicatorField,
    /// Indicators as loaded, kept so exports can still list the region.
    #[serde(skip)]
    pub indicators: Indicators,
}

impl From<ScoringFailure> for ResilienceError {
    fn from(failure: ScoringFailure) -> Self {
        ResilienceError::invalid_indicator(failure.region, failure.field)
    }
}

/// A region paired with its score under one weight set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRegion {
    pub region: Region,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl ScoredRegion {
    /// Score one region. Fails if any indicator is absent, NaN or infinite.
    pub fn compute(
        region: Region,
        weights: &WeightSet,
    ) -> std::result::Result<Self, ScoringFailure> {
        let breakdown = weighted_terms(&region.name, &region.indicators, weights)?;
        Ok(Self {
            score: breakdown.total,
            breakdown,
            region,
        })
    }

    pub fn name(&self) -> &str {
        &self.region.name
    }
}

/// Round to [`SCORE_PRECISION`] decimal places, half away from zero.
pub fn round_score(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_PRECISION);
    (value * factor).round() / factor
}

fn require(
    name: &str,
    indicators: &Indicators,
    field: IndicatorField,
) -> std::result::Result<f64, ScoringFailure> {
    indicators.usable(field).ok_or_else(|| ScoringFailure {
        region: name.to_string(),
        field,
        indicators: *indicators,
    })
}

fn weighted_terms(
    name: &str,
    indicators: &Indicators,
    weights: &WeightSet,
) -> std::result::Result<ScoreBreakdown, ScoringFailure> {
    let income = require(name, indicators, IndicatorField::Income)?;
    let unemployment = require(name, indicators, IndicatorField::Unemployment)?;
    let cost = require(name, indicators, IndicatorField::Cost)?;

    let income_term = weights.income() * income;
    let unemployment_term = weights.unemployment() * (1.0 - unemployment);
    let cost_term = weights.cost() * (1.0 - cost);

    Ok(ScoreBreakdown {
        income: income_term,
        unemployment: unemployment_term,
        cost: cost_term,
        total: round_score(income_term + unemployment_term + cost_term),
    })
}

/// Compute the weighted contributions and the rounded total.
pub fn breakdown(
    name: &str,
    indicators: &Indicators,
    weights: &WeightSet,
) -> Result<ScoreBreakdown> {
    Ok(weighted_terms(name, indicators, weights)?)
}

/// Resilience score for one region's indicators.
pub fn score(name: &str, indicators: &Indicators, weights: &WeightSet) -> Result<f64> {
    breakdown(name, indicators, weights).map(|b| b.total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        let weights = WeightSet::normalize(0.4, 0.3, 0.3);
        let value = score("Utah", &Indicators::new(0.8, 0.2, 0.3), &weights).unwrap();
        assert_eq!(value, 0.77);
    }

    #[test]
    fn test_inversion_of_unemployment_and_cost() {
        let weights = WeightSet::normalize(0.0, 1.0, 0.0);
        assert_eq!(score("a", &Indicators::new(0.0, 0.0, 1.0), &weights).unwrap(), 1.0);

        let weights = WeightSet::normalize(0.0, 0.0, 1.0);
        assert_eq!(score("a", &Indicators::new(1.0, 1.0, 0.0), &weights).unwrap(), 1.0);
    }

    #[test]
    fn test_rounding_applies_to_total_not_terms() {
        // Each term is 0.0004 (rounds to 0.000 alone); the sum 0.0012 rounds to 0.001.
        let weights = WeightSet::normalize(1.0, 1.0, 1.0);
        let indicators = Indicators::new(0.0012, 0.9988, 0.9988);
        assert_eq!(score("x", &indicators, &weights).unwrap(), 0.001);
    }

    #[test]
    fn test_out_of_range_indicator_is_not_clamped() {
        let weights = WeightSet::normalize(1.0, 0.0, 0.0);
        assert_eq!(score("x", &Indicators::new(1.5, 0.5, 0.5), &weights).unwrap(), 1.5);

        let weights = WeightSet::normalize(0.0, 0.0, 1.0);
        assert_eq!(score("x", &Indicators::new(0.5, 0.5, 1.25), &weights).unwrap(), -0.25);
    }

    #[test]
    fn test_missing_indicator_is_an_error_not_zero() {
        let weights = WeightSet::default();
        let indicators = Indicators {
            income: Some(0.5),
            unemployment: None,
            cost: Some(0.5),
        };
        let err = score("Baker", &indicators, &weights).unwrap_err();
        assert!(matches!(
            err,
            ResilienceError::InvalidIndicator { ref region, field: IndicatorField::Unemployment }
                if region == "Baker"
        ));
    }

    #[test]
    fn test_nan_indicator_is_an_error() {
        let weights = WeightSet::default();
        let indicators = Indicators::new(f64::NAN, 0.5, 0.5);
        let err = score("Clay", &indicators, &weights).unwrap_err();
        assert!(matches!(
            err,
            ResilienceError::InvalidIndicator { field: IndicatorField::Income, .. }
        ));
    }

    #[test]
    fn test_infinite_indicator_is_an_error() {
        let weights = WeightSet::normalize(1.0, 0.0, 0.0);
        let region = Region::new("Ohio", Indicators::new(0.5, f64::INFINITY, 0.5));
        let failure = ScoredRegion::compute(region, &weights).unwrap_err();
        assert_eq!(failure.region, "Ohio");
        assert_eq!(failure.field, IndicatorField::Unemployment);
        assert!(failure.indicators.unemployment.unwrap().is_infinite());
    }

    #[test]
    fn test_breakdown_terms_sum_to_total() {
        let weights = WeightSet::normalize(0.4, 0.3, 0.3);
        let b = breakdown("Utah", &Indicators::new(0.8, 0.2, 0.3), &weights).unwrap();
        assert!((b.income - 0.32).abs() < 1e-12);
        assert!((b.unemployment - 0.24).abs() < 1e-12);
        assert!((b.cost - 0.21).abs() < 1e-12);
        assert_eq!(b.total, round_score(b.income + b.unemployment + b.cost));
    }
}
