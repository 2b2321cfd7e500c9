//! Testing helpers for resilmap.
//!
//! Builders for regions, collections and scored regions, plus assertion
//! macros for `Result` values and approximate score comparison. Everything
//! here is pure and in-memory.
//!
//! # Quick Start
//!
//! ```rust
//! use resilmap::testkit::{region, CollectionBuilder};
//! use resilmap::{run_pipeline, WeightSet};
//!
//! let collection = CollectionBuilder::states()
//!     .region("Adams", 0.6, 0.4, 0.5)
//!     .region("Baker", 0.6, 0.4, 0.5)
//!     .build();
//!
//! let result = run_pipeline(&collection, &WeightSet::default());
//! assert_eq!(result.ranking.position_of("Adams").unwrap(), 1);
//! # let _ = region("x", 0.1, 0.2, 0.3);
//! ```

pub mod assertions;
pub mod helpers;

// Note: Assertion macros are exported at crate root via #[macro_export]
pub use helpers::{region, region_missing, sample_states, scored, CollectionBuilder};
