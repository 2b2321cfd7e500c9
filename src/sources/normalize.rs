//! Min-max normalization of raw measurements.
//!
//! Raw tables carry median income, unemployment rate and a cost-of-living
//! index in their natural units. Each column is rescaled independently
//! across the regions present: `(x - min) / (max - min)`.

use crate::core::{Granularity, IndicatorField, Indicators, Region, RegionCollection};
use crate::errors::Result;

/// Value assigned to every region when a column has no spread.
pub const FLAT_COLUMN_VALUE: f64 = 0.5;

/// A region with raw (un-normalized) measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRegion {
    pub name: String,
    pub values: Indicators,
}

/// Rescale values into `[0, 1]`. `None`, NaN and infinities stay absent and are
/// ignored when finding the column range.
pub fn min_max(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let present = values.iter().flatten().copied().filter(|v| v.is_finite());
    let (min, max) = present.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;

    values
        .iter()
        .map(|value| {
            value.filter(|v| v.is_finite()).map(|v| {
                if span > 0.0 {
                    (v - min) / span
                } else {
                    FLAT_COLUMN_VALUE
                }
            })
        })
        .collect()
}

fn column(raw: &[RawRegion], field: IndicatorField) -> Vec<Option<f64>> {
    min_max(&raw.iter().map(|r| r.values.get(field)).collect::<Vec<_>>())
}

/// Normalize every raw column and build a collection.
pub fn normalize_raw(granularity: Granularity, raw: Vec<RawRegion>) -> Result<RegionCollection> {
    let income = column(&raw, IndicatorField::Income);
    let unemployment = column(&raw, IndicatorField::Unemployment);
    let cost = column(&raw, IndicatorField::Cost);

    let regions = raw.into_iter().enumerate().map(|(i, r)| {
        Region::new(
            r.name,
            Indicators {
                income: income[i],
                unemployment: unemployment[i],
                cost: cost[i],
            },
        )
    });

    RegionCollection::from_regions(granularity, regions)
}
