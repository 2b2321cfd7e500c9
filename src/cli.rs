use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Ranked table with a score and rank column per region
    Csv,
    /// Full report including weights, breakdowns and failures
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "resilmap")]
#[command(about = "Economic resilience scoring and ranking for US states and counties", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every command that scores a table.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Indicator table (CSV)
    pub csv: PathBuf,

    /// Treat rows as counties instead of states
    #[arg(long)]
    pub county: bool,

    /// Table holds raw measurements (Median_Income, Unemployment_Rate, Cost_Index)
    #[arg(long)]
    pub raw: bool,

    /// Configuration file (defaults to .resilmap.toml discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Raw weight for income
    #[arg(long, allow_negative_numbers = true)]
    pub w_income: Option<f64>,

    /// Raw weight for unemployment
    #[arg(long, allow_negative_numbers = true)]
    pub w_unemployment: Option<f64>,

    /// Raw weight for cost of living
    #[arg(long, allow_negative_numbers = true)]
    pub w_cost: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and rank every region in a table
    Rank {
        #[command(flatten)]
        input: InputArgs,

        /// Number of most resilient regions to show
        #[arg(long)]
        top: Option<usize>,

        /// Number of least resilient regions to show
        #[arg(long)]
        bottom: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Show the score, rank and breakdown of a single region
    Show {
        #[command(flatten)]
        input: InputArgs,

        /// Exact region name
        name: String,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Write the ranked table for map rendering or further analysis
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
