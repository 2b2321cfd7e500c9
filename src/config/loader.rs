use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ResilmapConfig;
use crate::errors::{ResilienceError, Result};
use crate::insights::InsightThresholds;

/// File name searched for in the current directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".resilmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<ResilmapConfig, String> {
    let mut config = toml::from_str::<ResilmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    // Non-finite thresholds would make every comparison false; use defaults instead
    if let Some(ref thresholds) = config.insights {
        if let Err(e) = thresholds.validate() {
            log::warn!("Invalid insight thresholds: {}. Using defaults.", e);
            config.insights = Some(InsightThresholds::default());
        }
    }

    Ok(config)
}

/// Try loading config from a specific path, warning on parse failures
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ResilmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover `.resilmap.toml` from the current directory upward.
///
/// Never fails: unreadable or invalid files are logged and skipped.
pub fn load_config() -> ResilmapConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return ResilmapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ResilmapConfig::default()
        })
}

/// Load an explicitly named config file. Missing or invalid files are errors.
pub fn load_config_from(path: &Path) -> Result<ResilmapConfig> {
    let contents =
        read_config_file(path).map_err(|e| ResilienceError::config(path, e.to_string()))?;
    parse_and_validate_config(&contents).map_err(|e| ResilienceError::config(path, e))
}
