//! Configuration for resilmap.
//!
//! Settings are read from `.resilmap.toml`, discovered by walking up from
//! the current directory, or from an explicit path. Every section is
//! optional; absent sections use defaults. Command-line flags override
//! file values at the command layer.

mod core;
mod display;
mod loader;
mod scoring;

pub use self::core::ResilmapConfig;
pub use display::{default_bottom, default_top, DisplayConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use scoring::{
    default_cost_weight, default_income_weight, default_unemployment_weight, RawWeights,
};

// Insight thresholds live with the rules they parameterize
pub use crate::insights::InsightThresholds;
