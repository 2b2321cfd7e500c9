use serde::{Deserialize, Serialize};

/// Display configuration for output formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Regions in the "most resilient" view (default: 5)
    #[serde(default = "default_top")]
    pub top: usize,

    /// Regions in the "least resilient" view (default: 5)
    #[serde(default = "default_bottom")]
    pub bottom: usize,

    /// Disable colored output
    #[serde(default)]
    pub plain: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top: default_top(),
            bottom: default_bottom(),
            plain: false,
        }
    }
}

pub fn default_top() -> usize {
    5
}

pub fn default_bottom() -> usize {
    5
}
