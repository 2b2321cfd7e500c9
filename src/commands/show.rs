use super::{configure_output, formatting_for, ScoringSession};
use crate::cli::InputArgs;
use crate::errors::ResilienceError;
use crate::io::writers::TerminalWriter;
use anyhow::Result;

pub struct ShowConfig {
    pub input: InputArgs,
    pub name: String,
    pub plain: bool,
}

pub fn handle_show(config: ShowConfig) -> Result<()> {
    let session = ScoringSession::prepare(&config.input)?;
    let formatting = formatting_for(config.plain, &session.config);
    configure_output(&formatting);

    // Unknown names and unscorable regions get distinct errors
    let region = session.collection.get(&config.name)?;
    if let Some(field) = region.indicators.first_invalid() {
        return Err(ResilienceError::invalid_indicator(&config.name, field).into());
    }

    let result = session.run();
    let entry = result.ranking.get(&config.name)?;

    let stdout = std::io::stdout();
    let mut writer = TerminalWriter::new(stdout.lock(), session.config.display(), formatting);
    writer.write_region_detail(entry, result.ranking.len(), &result.weights)
}
