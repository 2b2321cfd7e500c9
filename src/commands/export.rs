use super::ScoringSession;
use crate::cli::{ExportFormat, InputArgs};
use crate::formatting::FormattingConfig;
use crate::io::writers::{create_writer, OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct ExportConfig {
    pub input: InputArgs,
    pub format: ExportFormat,
    pub output: Option<PathBuf>,
}

fn output_format(format: ExportFormat) -> OutputFormat {
    match format {
        ExportFormat::Csv => OutputFormat::Csv,
        ExportFormat::Json => OutputFormat::Json,
    }
}

pub fn handle_export(config: ExportConfig) -> Result<()> {
    let session = ScoringSession::prepare(&config.input)?;
    let result = session.run();

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(std::io::stdout().lock()),
    };

    // Machine-readable formats ignore display and color settings
    let mut writer = create_writer(
        output_format(config.format),
        sink,
        session.config.display(),
        FormattingConfig::plain(),
    );
    writer.write_result(&result)?;

    if let Some(path) = &config.output {
        tracing::info!(
            "Exported {} regions to {}",
            result.ranking.len(),
            path.display()
        );
    }
    Ok(())
}
