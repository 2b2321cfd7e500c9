//! Error types for resilience scoring operations.
//!
//! Every failure the library can report is a [`ResilienceError`]. Scoring
//! failures are local to one region and never abort a batch; the pipeline
//! collects them alongside the successful results.
//!
//! # Example
//!
//! ```rust
//! use resilmap::errors::ResilienceError;
//! use resilmap::core::IndicatorField;
//!
//! let err = ResilienceError::invalid_indicator("Ohio", IndicatorField::Cost);
//! assert_eq!(err.to_string(), "invalid indicator cost_norm for region 'Ohio'");
//! ```

use crate::core::IndicatorField;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for resilmap operations
#[derive(Debug, Error)]
pub enum ResilienceError {
    /// An indicator value was absent or not a finite number
    #[error("invalid indicator {field} for region '{region}'")]
    InvalidIndicator { region: String, field: IndicatorField },

    /// A region name was looked up but is not in the collection or ranking
    #[error("region '{name}' not found")]
    NotFound { name: String },

    /// Two regions in one collection share a name
    #[error("duplicate region '{name}'")]
    DuplicateRegion { name: String },

    /// The indicator source could not be read or did not have the expected shape
    #[error("indicator source {}: {message}", .path.display())]
    Source { path: PathBuf, message: String },

    /// Configuration file errors
    #[error("configuration {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// Wrapped I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ResilienceError {
    pub fn invalid_indicator(region: impl Into<String>, field: IndicatorField) -> Self {
        Self::InvalidIndicator {
            region: region.into(),
            field,
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn source_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Source {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResilienceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_indicator_message_names_region_and_field() {
        let err = ResilienceError::invalid_indicator("Adams", IndicatorField::Unemployment);
        assert_eq!(
            err.to_string(),
            "invalid indicator unemployment_norm for region 'Adams'"
        );
    }

    #[test]
    fn test_source_error_includes_path() {
        let err = ResilienceError::source_error("data/states.csv", "missing column Cost_Norm");
        assert_eq!(
            err.to_string(),
            "indicator source data/states.csv: missing column Cost_Norm"
        );
    }

    #[test]
    fn test_io_error_is_transparent() {
        let err: ResilienceError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, ResilienceError::Io(_)));
        assert_eq!(err.to_string(), "denied");
    }
}
