pub mod csv;
pub mod json;
pub mod terminal;

pub use self::csv::CsvWriter;
pub use json::JsonWriter;
pub use terminal::TerminalWriter;

use crate::config::DisplayConfig;
use crate::formatting::FormattingConfig;
use crate::pipeline::PipelineResult;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_result(&mut self, result: &PipelineResult) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    display: DisplayConfig,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Csv => Box::new(CsvWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, display, formatting)),
    }
}
