//! Output format abstraction.

use std::io::Write;

use chrono::NaiveDateTime;
use finlens_types::{ChartKind, PricePoint, Series};
use serde::Serialize;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json, Self::Ndjson]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One row of chart data, carrying only the fields the chart kind draws.
///
/// Line and bar charts plot the close; candles need the full OHLC set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow<'a> {
    /// Sample time.
    pub timestamp: NaiveDateTime,
    /// Axis label.
    pub label: &'a str,
    /// Opening price (candles only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    /// Highest price (candles only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    /// Lowest price (candles only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: u64,
}

impl<'a> ChartRow<'a> {
    /// Projects a point onto the fields `chart` needs.
    #[must_use]
    pub fn project(point: &'a PricePoint, chart: ChartKind) -> Self {
        let ohlc = chart.needs_ohlc();
        Self {
            timestamp: point.timestamp,
            label: &point.label,
            open: ohlc.then_some(point.open),
            high: ohlc.then_some(point.high),
            low: ohlc.then_some(point.low),
            close: point.close,
            volume: point.volume,
        }
    }

    /// Projects every point of a series.
    pub fn rows(series: &'a Series, chart: ChartKind) -> impl Iterator<Item = Self> + 'a {
        series
            .points
            .iter()
            .map(move |point| Self::project(point, chart))
    }
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes a series with the columns `chart` draws.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_series<W: Write + Send>(
        &self,
        series: &Series,
        chart: ChartKind,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
