//! Core domain types shared by every stage of the resilience pipeline.
//!
//! Input records ([`Region`], [`Indicators`]) are immutable for the duration
//! of a run. Derived values (score, rank, insight) never live on them; they
//! are produced as new values by the scoring and ranking stages.

pub mod types;

pub use types::{Granularity, IndicatorField};

use crate::errors::{ResilienceError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The three normalized indicators of a region.
///
/// `None` means the upstream source had no usable value. A present value is
/// expected in `[0, 1]` but out-of-range values are carried through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Indicators {
    pub income: Option<f64>,
    pub unemployment: Option<f64>,
    pub cost: Option<f64>,
}

impl Indicators {
    pub fn new(income: f64, unemployment: f64, cost: f64) -> Self {
        Self {
            income: Some(income),
            unemployment: Some(unemployment),
            cost: Some(cost),
        }
    }

    /// Raw access by field, including absent values.
    pub fn get(&self, field: IndicatorField) -> Option<f64> {
        match field {
            IndicatorField::Income => self.income,
            IndicatorField::Unemployment => self.unemployment,
            IndicatorField::Cost => self.cost,
        }
    }

    /// Returns the value only when it is present and finite.
    pub fn usable(&self, field: IndicatorField) -> Option<f64> {
        self.get(field).filter(|v| v.is_finite())
    }

    /// First field (in income, unemployment, cost order) that is absent or non-finite.
    pub fn first_invalid(&self) -> Option<IndicatorField> {
        IndicatorField::ALL
            .into_iter()
            .find(|&field| self.usable(field).is_none())
    }
}

/// A named geographic unit with its normalized indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub indicators: Indicators,
}

impl Region {
    pub fn new(name: impl Into<String>, indicators: Indicators) -> Self {
        Self {
            name: name.into(),
            indicators,
        }
    }
}

/// Insertion-ordered set of regions, unique by exact (case-sensitive) name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionCollection {
    granularity: Granularity,
    regions: Vec<Region>,
    #[serde(skip)]
    names: HashSet<String>,
}

impl RegionCollection {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            regions: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Build a collection from an iterator, failing on the first duplicate name.
    pub fn from_regions(
        granularity: Granularity,
        regions: impl IntoIterator<Item = Region>,
    ) -> Result<Self> {
        let mut collection = Self::new(granularity);
        for region in regions {
            collection.try_push(region)?;
        }
        Ok(collection)
    }

    pub fn try_push(&mut self, region: Region) -> Result<()> {
        if !self.names.insert(region.name.clone()) {
            return Err(ResilienceError::DuplicateRegion { name: region.name });
        }
        self.regions.push(region);
        Ok(())
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn get(&self, name: &str) -> Result<&Region> {
        self.regions
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| ResilienceError::not_found(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }
}

impl<'a> IntoIterator for &'a RegionCollection {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
