use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    pub fn use_color(&self) -> bool {
        self.color.should_use_color()
    }
}

/// Qualitative band of a resilience score, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Moderate,
    Low,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 0.66 {
            Self::High
        } else if score >= 0.33 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Format a score with three decimals, colored by band when enabled.
pub fn format_score(score: f64, config: &FormattingConfig) -> String {
    let text = format!("{:.3}", score);
    if !config.use_color() {
        return text;
    }
    match ScoreBand::of(score) {
        ScoreBand::High => text.green().to_string(),
        ScoreBand::Moderate => text.yellow().to_string(),
        ScoreBand::Low => text.red().to_string(),
    }
}

pub fn header(text: &str, config: &FormattingConfig) -> String {
    if config.use_color() {
        text.blue().bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn warning(text: &str, config: &FormattingConfig) -> String {
    if config.use_color() {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}
