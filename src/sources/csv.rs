//! CSV indicator tables.
//!
//! Expected layout (normalized scale, state granularity):
//!
//! ```text
//! State,Income_Norm,Unemployment_Norm,Cost_Norm
//! Utah,0.8,0.2,0.3
//! ```
//!
//! County tables use a `County` name column. Raw tables use
//! `Median_Income`, `Unemployment_Rate` and `Cost_Index` and are min-max
//! normalized on load. Extra columns are ignored. An empty or non-numeric
//! cell is read as an absent indicator, never as zero.

use super::normalize::{normalize_raw, RawRegion};
use super::IndicatorSource;
use crate::core::{Granularity, IndicatorField, Indicators, Region, RegionCollection};
use crate::errors::{ResilienceError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Whether indicator columns are already normalized or need rescaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorScale {
    #[default]
    Normalized,
    Raw,
}

impl IndicatorScale {
    fn column(&self, field: IndicatorField) -> &'static str {
        match self {
            IndicatorScale::Normalized => field.column(),
            IndicatorScale::Raw => field.raw_column(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsvIndicatorSource {
    path: PathBuf,
    granularity: Granularity,
    scale: IndicatorScale,
}

/// Positions of the required columns in the header row.
struct ColumnIndex {
    name: usize,
    fields: [usize; 3],
}

impl CsvIndicatorSource {
    /// Table with normalized indicator columns.
    pub fn new(path: impl Into<PathBuf>, granularity: Granularity) -> Self {
        Self {
            path: path.into(),
            granularity,
            scale: IndicatorScale::Normalized,
        }
    }

    /// Table with raw measurement columns, normalized on load.
    pub fn raw(path: impl Into<PathBuf>, granularity: Granularity) -> Self {
        Self {
            scale: IndicatorScale::Raw,
            ..Self::new(path, granularity)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scale(&self) -> IndicatorScale {
        self.scale
    }

    /// Parse a table from any reader. `load` uses this with the file.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<RegionCollection> {
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(::csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| self.error(format!("unreadable header row: {}", e)))?
            .clone();
        let index = self.column_index(&headers)?;

        let mut rows = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record =
                record.map_err(|e| self.error(format!("row {}: {}", line + 2, e)))?;
            let name = record.get(index.name).unwrap_or_default().to_string();
            if name.is_empty() {
                return Err(self.error(format!("row {}: empty region name", line + 2)));
            }
            let [income, unemployment, cost] = index.fields.map(|i| parse_cell(record.get(i)));
            rows.push(RawRegion {
                name,
                values: Indicators {
                    income,
                    unemployment,
                    cost,
                },
            });
        }

        log::debug!(
            "Read {} rows from {} ({:?} scale)",
            rows.len(),
            self.path.display(),
            self.scale
        );

        match self.scale {
            IndicatorScale::Raw => normalize_raw(self.granularity, rows),
            IndicatorScale::Normalized => RegionCollection::from_regions(
                self.granularity,
                rows.into_iter().map(|r| Region::new(r.name, r.values)),
            ),
        }
    }

    fn column_index(&self, headers: &::csv::StringRecord) -> Result<ColumnIndex> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| self.error(format!("missing column {}", column)))
        };

        Ok(ColumnIndex {
            name: find(self.granularity.name_column())?,
            fields: [
                find(self.scale.column(IndicatorField::Income))?,
                find(self.scale.column(IndicatorField::Unemployment))?,
                find(self.scale.column(IndicatorField::Cost))?,
            ],
        })
    }

    fn error(&self, message: String) -> ResilienceError {
        ResilienceError::source_error(&self.path, message)
    }
}

fn parse_cell(cell: Option<&str>) -> Option<f64> {
    cell.filter(|c| !c.is_empty())
        .and_then(|c| c.parse::<f64>().ok())
}

impl IndicatorSource for CsvIndicatorSource {
    fn granularity(&self) -> Granularity {
        self.granularity
    }

    fn load(&self) -> Result<RegionCollection> {
        let file = std::fs::File::open(&self.path)
            .map_err(|e| self.error(format!("cannot open: {}", e)))?;
        self.read_from(std::io::BufReader::new(file))
    }
}
