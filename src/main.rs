use anyhow::Result;
use clap::Parser;
use resilmap::cli::{Cli, Commands};
use resilmap::commands::{ExportConfig, RankConfig, ShowConfig};

fn main() -> Result<()> {
    resilmap::observability::install_panic_hook();

    let cli = Cli::parse();
    resilmap::observability::init_logging(cli.verbosity);

    match cli.command {
        Commands::Rank {
            input,
            top,
            bottom,
            plain,
        } => resilmap::commands::handle_rank(RankConfig {
            input,
            top,
            bottom,
            plain,
        }),
        Commands::Show { input, name, plain } => {
            resilmap::commands::handle_show(ShowConfig { input, name, plain })
        }
        Commands::Export {
            input,
            format,
            output,
        } => resilmap::commands::handle_export(ExportConfig {
            input,
            format,
            output,
        }),
        Commands::Init { force } => resilmap::commands::init_config(force),
    }
}
