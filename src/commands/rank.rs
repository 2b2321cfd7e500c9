use super::{configure_output, formatting_for, ScoringSession};
use crate::cli::InputArgs;
use crate::io::writers::{create_writer, OutputFormat, OutputWriter};
use anyhow::Result;

pub struct RankConfig {
    pub input: InputArgs,
    pub top: Option<usize>,
    pub bottom: Option<usize>,
    pub plain: bool,
}

pub fn handle_rank(config: RankConfig) -> Result<()> {
    let session = ScoringSession::prepare(&config.input)?;
    let formatting = formatting_for(config.plain, &session.config);
    configure_output(&formatting);

    let mut display = session.config.display();
    display.top = config.top.unwrap_or(display.top);
    display.bottom = config.bottom.unwrap_or(display.bottom);

    let result = session.run();
    let stdout = std::io::stdout();
    let mut writer = create_writer(OutputFormat::Terminal, stdout.lock(), display, formatting);
    writer.write_result(&result)
}
