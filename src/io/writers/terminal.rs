use crate::config::DisplayConfig;
use crate::core::IndicatorField;
use crate::formatting::{format_score, header, warning, FormattingConfig, ScoreBand};
use crate::io::writers::OutputWriter;
use crate::pipeline::PipelineResult;
use crate::ranking::RankedRegion;
use crate::scoring::WeightSet;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
    display: DisplayConfig,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, display: DisplayConfig, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            display,
            formatting,
        }
    }

    /// Detail view for a single ranked region.
    pub fn write_region_detail(
        &mut self,
        entry: &RankedRegion,
        total: usize,
        weights: &WeightSet,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", header(entry.name(), &self.formatting))?;
        writeln!(
            self.writer,
            "  Resilience score: {} (#{} out of {})",
            format_score(entry.score(), &self.formatting),
            entry.rank,
            total
        )?;

        let mut table = self.table();
        table.set_header(vec!["Indicator", "Normalized", "Weight", "Contribution"]);
        for field in IndicatorField::ALL {
            let value = entry
                .scored
                .region
                .indicators
                .get(field)
                .map(|v| format!("{:.3}", v))
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                Cell::new(field.label()),
                Cell::new(value).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}", weight_of(weights, field)))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{:+.3}", entry.scored.breakdown.contribution(field)))
                    .set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer, "  Insight: {}", entry.insight)?;
        Ok(())
    }

    fn write_summary(&mut self, result: &PipelineResult) -> anyhow::Result<()> {
        let title = format!(
            "Economic resilience ranking ({} {} ranked)",
            result.ranking.len(),
            result.granularity.plural()
        );
        writeln!(self.writer, "{}", header(&title, &self.formatting))?;
        writeln!(
            self.writer,
            "Weights: income {:.2}, unemployment {:.2}, cost {:.2}",
            result.weights.income(),
            result.weights.unemployment(),
            result.weights.cost()
        )?;
        if result.weights.is_default_fallback() {
            let note = "Weights summed to zero; scoring on income alone.";
            writeln!(self.writer, "{}", warning(note, &self.formatting))?;
        }
        Ok(())
    }

    fn write_section<'a>(
        &mut self,
        title: &str,
        entries: impl IntoIterator<Item = &'a RankedRegion>,
        name_column: &str,
    ) -> anyhow::Result<()> {
        let mut table = self.table();
        table.set_header(vec!["Rank", name_column, "Score", "Insight"]);
        for entry in entries {
            table.add_row(vec![
                Cell::new(entry.rank).set_alignment(CellAlignment::Right),
                Cell::new(entry.name()),
                self.score_cell(entry.score()),
                Cell::new(&entry.insight),
            ]);
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", header(title, &self.formatting))?;
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_failures(&mut self, result: &PipelineResult) -> anyhow::Result<()> {
        if !result.has_failures() {
            return Ok(());
        }
        writeln!(self.writer)?;
        let title = format!("{} region(s) could not be scored:", result.failures.len());
        writeln!(self.writer, "{}", warning(&title, &self.formatting))?;
        for failure in &result.failures {
            writeln!(
                self.writer,
                "  - {}: missing or invalid {}",
                failure.region,
                failure.field.column()
            )?;
        }
        Ok(())
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        if self.formatting.use_color() {
            table.load_preset(UTF8_FULL).enforce_styling();
        } else {
            table.load_preset(ASCII_FULL).force_no_tty();
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    fn score_cell(&self, score: f64) -> Cell {
        let cell = Cell::new(format!("{:.3}", score)).set_alignment(CellAlignment::Right);
        if !self.formatting.use_color() {
            return cell;
        }
        cell.fg(match ScoreBand::of(score) {
            ScoreBand::High => Color::Green,
            ScoreBand::Moderate => Color::Yellow,
            ScoreBand::Low => Color::Red,
        })
    }
}

fn weight_of(weights: &WeightSet, field: IndicatorField) -> f64 {
    match field {
        IndicatorField::Income => weights.income(),
        IndicatorField::Unemployment => weights.unemployment(),
        IndicatorField::Cost => weights.cost(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_result(&mut self, result: &PipelineResult) -> anyhow::Result<()> {
        self.write_summary(result)?;

        if result.ranking.is_empty() {
            writeln!(self.writer, "No regions could be ranked.")?;
        } else {
            let name_column = result.granularity.name_column();
            self.write_section("Full ranking", &result.ranking, name_column)?;
            let top = result.ranking.top(self.display.top);
            let bottom = result.ranking.bottom(self.display.bottom);
            self.write_section("Most resilient", &top, name_column)?;
            self.write_section("Least resilient", &bottom, name_column)?;
        }

        self.write_failures(result)
    }
}
