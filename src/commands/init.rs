use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Resilmap Configuration

# Raw weights; normalized to sum to 1 before scoring.
# Unemployment and cost are inverted (lower is more resilient).
[weights]
income = 0.4
unemployment = 0.3
cost = 0.3

# Thresholds on normalized [0, 1] indicators for the one-line insight.
[insights]
strong_income = 0.75
low_income = 0.4
low_unemployment = 0.3
high_unemployment = 0.7
affordable_cost = 0.4
high_cost = 0.75

[display]
top = 5
bottom = 5
plain = false
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if io::file_exists(path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(path, DEFAULT_CONFIG)
}
