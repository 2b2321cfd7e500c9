//! CLI command implementations.
//!
//! - **rank**: score a table and print the most and least resilient regions
//! - **show**: detail view for one region
//! - **export**: write the ranked table as CSV or JSON
//! - **init**: write a starter `.resilmap.toml`
//!
//! Every scoring command goes through [`ScoringSession`], which resolves the
//! configuration, loads the table and normalizes the weights.

pub mod export;
pub mod init;
pub mod rank;
pub mod show;

pub use export::{handle_export, ExportConfig};
pub use init::init_config;
pub use rank::{handle_rank, RankConfig};
pub use show::{handle_show, ShowConfig};

use crate::cli::InputArgs;
use crate::config::{load_config, load_config_from, ResilmapConfig};
use crate::core::{Granularity, RegionCollection};
use crate::formatting::FormattingConfig;
use crate::insights::InsightRuleSet;
use crate::pipeline::{run_pipeline_with_rules, PipelineResult};
use crate::scoring::WeightSet;
use crate::sources::{CsvIndicatorSource, IndicatorSource};
use anyhow::{Context, Result};

/// Inputs resolved from flags, config file and the indicator table.
#[derive(Debug, Clone)]
pub struct ScoringSession {
    pub config: ResilmapConfig,
    pub collection: RegionCollection,
    pub weights: WeightSet,
    pub rules: InsightRuleSet,
}

impl ScoringSession {
    pub fn prepare(input: &InputArgs) -> Result<Self> {
        let config = match &input.config {
            Some(path) => load_config_from(path)?,
            None => load_config(),
        };

        let granularity = if input.county {
            Granularity::County
        } else {
            Granularity::State
        };
        let source = if input.raw {
            CsvIndicatorSource::raw(&input.csv, granularity)
        } else {
            CsvIndicatorSource::new(&input.csv, granularity)
        };
        let collection = source
            .load()
            .with_context(|| format!("Failed to load indicators from {}", input.csv.display()))?;

        let weights = config
            .weights()
            .with_overrides(input.w_income, input.w_unemployment, input.w_cost)
            .normalize();
        let rules = config.insight_rules();

        Ok(Self {
            config,
            collection,
            weights,
            rules,
        })
    }

    pub fn run(&self) -> PipelineResult {
        run_pipeline_with_rules(&self.collection, &self.weights, &self.rules)
    }
}

/// Resolve color handling from the `--plain` flag, the config file and the environment.
pub fn formatting_for(plain: bool, config: &ResilmapConfig) -> FormattingConfig {
    if plain || config.display().plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

fn configure_output(formatting: &FormattingConfig) {
    if formatting.use_color() {
        colored::control::set_override(true);
    } else {
        colored::control::set_override(false);
    }
}
