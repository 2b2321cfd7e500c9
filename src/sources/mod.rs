//! Indicator sources.
//!
//! The pipeline does not care where indicators come from. State-level and
//! county-level tables, normalized or raw, are interchangeable
//! implementations of [`IndicatorSource`].

pub mod csv;
pub mod normalize;

pub use self::csv::{CsvIndicatorSource, IndicatorScale};
pub use normalize::{min_max, normalize_raw, RawRegion};

use crate::core::{Granularity, RegionCollection};
use crate::errors::Result;

/// Produces a collection of regions with three normalized indicators each.
pub trait IndicatorSource {
    fn granularity(&self) -> Granularity;

    fn load(&self) -> Result<RegionCollection>;
}

/// Source backed by an already-built collection.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    collection: RegionCollection,
}

impl InMemorySource {
    pub fn new(collection: RegionCollection) -> Self {
        Self { collection }
    }
}

impl IndicatorSource for InMemorySource {
    fn granularity(&self) -> Granularity {
        self.collection.granularity()
    }

    fn load(&self) -> Result<RegionCollection> {
        Ok(self.collection.clone())
    }
}
