//! Factory functions for test data.
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | [`region`] | Region with three present indicators |
//! | [`region_missing`] | Region with one absent indicator |
//! | [`scored`] | Scored region with a fixed score (ranking tests) |
//! | [`sample_states`] | Small five-state collection |
//! | [`CollectionBuilder`] | Build collections fluently |

use crate::core::{Granularity, IndicatorField, Indicators, Region, RegionCollection};
use crate::scoring::{ScoreBreakdown, ScoredRegion};

pub fn region(name: &str, income: f64, unemployment: f64, cost: f64) -> Region {
    Region::new(name, Indicators::new(income, unemployment, cost))
}

/// Region whose `missing` indicator is absent; the other two are 0.5.
pub fn region_missing(name: &str, missing: IndicatorField) -> Region {
    let mut indicators = Indicators::new(0.5, 0.5, 0.5);
    match missing {
        IndicatorField::Income => indicators.income = None,
        IndicatorField::Unemployment => indicators.unemployment = None,
        IndicatorField::Cost => indicators.cost = None,
    }
    Region::new(name, indicators)
}

/// Scored region with an arbitrary score, bypassing the calculator.
pub fn scored(name: &str, score: f64) -> ScoredRegion {
    ScoredRegion {
        region: region(name, 0.5, 0.5, 0.5),
        score,
        breakdown: ScoreBreakdown {
            income: score,
            unemployment: 0.0,
            cost: 0.0,
            total: score,
        },
    }
}

/// Five states with distinct scores under the default weights.
pub fn sample_states() -> RegionCollection {
    CollectionBuilder::states()
        .region("Minnesota", 0.82, 0.25, 0.55)
        .region("Mississippi", 0.10, 0.72, 0.12)
        .region("California", 0.90, 0.68, 0.95)
        .region("Utah", 0.80, 0.20, 0.30)
        .region("Ohio", 0.50, 0.50, 0.50)
        .build()
}

/// Fluent builder for region collections.
///
/// Panics on duplicate names; intended for tests only.
#[derive(Debug)]
pub struct CollectionBuilder {
    granularity: Granularity,
    regions: Vec<Region>,
}

impl CollectionBuilder {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            regions: Vec::new(),
        }
    }

    pub fn states() -> Self {
        Self::new(Granularity::State)
    }

    pub fn counties() -> Self {
        Self::new(Granularity::County)
    }

    pub fn region(mut self, name: &str, income: f64, unemployment: f64, cost: f64) -> Self {
        self.regions.push(region(name, income, unemployment, cost));
        self
    }

    pub fn with(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    pub fn build(self) -> RegionCollection {
        match RegionCollection::from_regions(self.granularity, self.regions) {
            Ok(collection) => collection,
            Err(e) => panic!("invalid test collection: {}", e),
        }
    }
}
