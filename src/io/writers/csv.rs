//! Ranked-table export for map renderers and spreadsheets.
//!
//! One row per region: ranked regions first in rank order, then regions
//! that could not be scored, with empty score and rank cells. State exports
//! gain a trailing `State_Abbr` column (empty when the name is not a US state).

use crate::core::{Granularity, IndicatorField, Indicators};
use crate::geo::state_abbreviation;
use crate::io::writers::OutputWriter;
use crate::pipeline::PipelineResult;
use crate::ranking::RankedRegion;
use crate::scoring::ScoringFailure;
use std::io::Write;

pub const SCORE_COLUMN: &str = "Resilience_Score";
pub const RANK_COLUMN: &str = "Rank";
pub const ABBREVIATION_COLUMN: &str = "State_Abbr";

pub struct CsvWriter<W: Write> {
    writer: ::csv::Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: ::csv::Writer::from_writer(writer),
        }
    }

    fn header(granularity: Granularity) -> Vec<&'static str> {
        let mut columns = vec![granularity.name_column()];
        columns.extend(IndicatorField::ALL.iter().map(|field| field.column()));
        columns.extend([SCORE_COLUMN, RANK_COLUMN]);
        if granularity == Granularity::State {
            columns.push(ABBREVIATION_COLUMN);
        }
        columns
    }

    fn row(
        granularity: Granularity,
        name: &str,
        indicators: &Indicators,
        placement: Option<(f64, usize)>,
    ) -> Vec<String> {
        let mut row = vec![name.to_string()];
        row.extend(IndicatorField::ALL.iter().map(|&field| {
            indicators
                .get(field)
                .map(|value| value.to_string())
                .unwrap_or_default()
        }));
        match placement {
            Some((score, rank)) => row.extend([score.to_string(), rank.to_string()]),
            None => row.extend([String::new(), String::new()]),
        }
        if granularity == Granularity::State {
            row.push(state_abbreviation(name).unwrap_or_default().to_string());
        }
        row
    }

    fn ranked_row(granularity: Granularity, entry: &RankedRegion) -> Vec<String> {
        Self::row(
            granularity,
            entry.name(),
            &entry.scored.region.indicators,
            Some((entry.score(), entry.rank)),
        )
    }

    fn failed_row(granularity: Granularity, failure: &ScoringFailure) -> Vec<String> {
        Self::row(granularity, &failure.region, &failure.indicators, None)
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_result(&mut self, result: &PipelineResult) -> anyhow::Result<()> {
        self.writer.write_record(Self::header(result.granularity))?;
        for entry in &result.ranking {
            self.writer
                .write_record(Self::ranked_row(result.granularity, entry))?;
        }
        for failure in &result.failures {
            self.writer
                .write_record(Self::failed_row(result.granularity, failure))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
