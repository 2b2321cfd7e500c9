use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three normalized indicators feeding the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorField {
    Income,
    Unemployment,
    Cost,
}

impl IndicatorField {
    /// Evaluation order used by scoring and insight rules.
    pub const ALL: [IndicatorField; 3] = [
        IndicatorField::Income,
        IndicatorField::Unemployment,
        IndicatorField::Cost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorField::Income => "income_norm",
            IndicatorField::Unemployment => "unemployment_norm",
            IndicatorField::Cost => "cost_norm",
        }
    }

    /// Column header for normalized values in indicator tables.
    pub fn column(&self) -> &'static str {
        match self {
            IndicatorField::Income => "Income_Norm",
            IndicatorField::Unemployment => "Unemployment_Norm",
            IndicatorField::Cost => "Cost_Norm",
        }
    }

    /// Column header for raw (un-normalized) measurements.
    pub fn raw_column(&self) -> &'static str {
        match self {
            IndicatorField::Income => "Median_Income",
            IndicatorField::Unemployment => "Unemployment_Rate",
            IndicatorField::Cost => "Cost_Index",
        }
    }

    /// Human-readable label for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorField::Income => "Income",
            IndicatorField::Unemployment => "Unemployment",
            IndicatorField::Cost => "Cost of Living",
        }
    }
}

impl fmt::Display for IndicatorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic level of the regions in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    State,
    County,
}

impl Granularity {
    /// Name column header in indicator tables and exports.
    pub fn name_column(&self) -> &'static str {
        match self {
            Granularity::State => "State",
            Granularity::County => "County",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Granularity::State => "states",
            Granularity::County => "counties",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::State => f.write_str("state"),
            Granularity::County => f.write_str("county"),
        }
    }
}
