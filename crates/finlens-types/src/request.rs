//! Series requests and chart kinds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::TimeRange;

/// A view's request for a synthetic series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesRequest {
    /// Symbol used to label the series. Has no effect on generated values.
    pub symbol: String,
    /// Range that determines point count, spacing and label format.
    pub range: TimeRange,
}

impl SeriesRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(symbol: impl Into<String>, range: TimeRange) -> Self {
        Self {
            symbol: symbol.into(),
            range,
        }
    }

    /// Creates a request from a raw range label, falling back to `MAX`.
    #[must_use]
    pub fn from_label(symbol: impl Into<String>, range_label: &str) -> Self {
        Self::new(symbol, TimeRange::from_label(range_label))
    }
}

/// Chart rendering selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Close price as a line.
    #[default]
    Line,
    /// Close price as bars.
    Bar,
    /// Open/high/low/close candles.
    Candle,
}

impl ChartKind {
    /// Returns the kind as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Candle => "candle",
        }
    }

    /// Returns true if the chart needs the full OHLC body of each sample.
    #[must_use]
    pub const fn needs_ohlc(&self) -> bool {
        matches!(self, Self::Candle)
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "bar" | "bars" => Ok(Self::Bar),
            "candle" | "candles" | "candlestick" => Ok(Self::Candle),
            _ => Err(ChartKindParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid chart kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid chart kind '{0}', expected one of: line, bar, candle")]
pub struct ChartKindParseError(String);
