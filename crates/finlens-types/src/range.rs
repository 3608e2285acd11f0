//! Chart time range selector.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Time range selectable on the dashboard chart.
///
/// Unrecognized labels resolve to [`TimeRange::Max`] through
/// [`TimeRange::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeRange {
    /// Current trading session, 09:30 to 16:00.
    #[serde(rename = "1D")]
    OneDay,
    /// Last seven days.
    #[serde(rename = "1W")]
    OneWeek,
    /// Last month.
    #[serde(rename = "1M")]
    OneMonth,
    /// Last three months.
    #[serde(rename = "3M")]
    ThreeMonths,
    /// Last six months.
    #[serde(rename = "6M")]
    SixMonths,
    /// Last year.
    #[serde(rename = "1Y")]
    OneYear,
    /// Last five years.
    #[serde(rename = "5Y")]
    FiveYears,
    /// Last ten years.
    #[default]
    #[serde(rename = "MAX")]
    Max,
}

impl TimeRange {
    /// Returns the range as its dashboard label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::FiveYears => "5Y",
            Self::Max => "MAX",
        }
    }

    /// Returns true for the single-session intraday range.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        matches!(self, Self::OneDay)
    }

    /// Resolves a label leniently, falling back to [`TimeRange::Max`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::Max)
    }

    /// Returns all ranges in dashboard order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OneDay,
            Self::OneWeek,
            Self::OneMonth,
            Self::ThreeMonths,
            Self::SixMonths,
            Self::OneYear,
            Self::FiveYears,
            Self::Max,
        ]
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = TimeRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1D" => Ok(Self::OneDay),
            "1W" => Ok(Self::OneWeek),
            "1M" => Ok(Self::OneMonth),
            "3M" => Ok(Self::ThreeMonths),
            "6M" => Ok(Self::SixMonths),
            "1Y" => Ok(Self::OneYear),
            "5Y" => Ok(Self::FiveYears),
            "MAX" | "ALL" => Ok(Self::Max),
            _ => Err(TimeRangeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid range label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRangeParseError(String);

impl std::fmt::Display for TimeRangeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid range '{}', expected one of: 1D, 1W, 1M, 3M, 6M, 1Y, 5Y, MAX",
            self.0
        )
    }
}

impl std::error::Error for TimeRangeParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_parse() {
        assert_eq!("1D".parse::<TimeRange>().unwrap(), TimeRange::OneDay);
        assert_eq!("6m".parse::<TimeRange>().unwrap(), TimeRange::SixMonths);
        assert_eq!("max".parse::<TimeRange>().unwrap(), TimeRange::Max);
        assert!("2W".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_from_label_falls_back_to_max() {
        assert_eq!(TimeRange::from_label("10Y"), TimeRange::Max);
        assert_eq!(TimeRange::from_label(""), TimeRange::Max);
        assert_eq!(TimeRange::from_label("1y"), TimeRange::OneYear);
    }

    #[test]
    fn test_labels_round_trip_through_display() {
        for range in TimeRange::all() {
            assert_eq!(range.to_string().parse::<TimeRange>().unwrap(), *range);
        }
    }

    #[test]
    fn test_serde_uses_dashboard_labels() {
        let json = serde_json::to_string(&TimeRange::FiveYears).unwrap();
        assert_eq!(json, "\"5Y\"");
    }
}
