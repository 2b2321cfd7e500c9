// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod geo;
pub mod insights;
pub mod io;
pub mod observability;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod sources;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{Granularity, IndicatorField, Indicators, Region, RegionCollection};

pub use crate::errors::{ResilienceError, Result};

pub use crate::scoring::{breakdown, score, ScoreBreakdown, ScoredRegion, ScoringFailure, WeightSet};

pub use crate::ranking::{RankedRegion, Ranking};

pub use crate::insights::{insight, InsightRuleSet, InsightThresholds};

pub use crate::pipeline::{run_pipeline, run_pipeline_with_rules, PipelineResult};

pub use crate::sources::{CsvIndicatorSource, InMemorySource, IndicatorSource};

pub use crate::io::{create_writer, OutputFormat, OutputWriter, ResilienceReport};
