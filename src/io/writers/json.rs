use crate::io::report::ResilienceReport;
use crate::io::writers::OutputWriter;
use crate::pipeline::PipelineResult;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(&mut self, report: &ResilienceReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_result(&mut self, result: &PipelineResult) -> anyhow::Result<()> {
        self.write_report(&ResilienceReport::new(result))
    }
}
