//! Ordered price series.

use serde::{Deserialize, Serialize};

use crate::{PricePoint, TimeRange};

/// Ordered price samples for one symbol over one range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Symbol the series is labeled with.
    pub symbol: String,
    /// Range the series covers.
    pub range: TimeRange,
    /// Samples in chronological order.
    pub points: Vec<PricePoint>,
}

impl Series {
    /// Creates a new series.
    #[must_use]
    pub fn new(symbol: impl Into<String>, range: TimeRange, points: Vec<PricePoint>) -> Self {
        Self {
            symbol: symbol.into(),
            range,
            points,
        }
    }

    /// Returns the number of samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first sample.
    #[must_use]
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Returns the last sample.
    #[must_use]
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Absolute change from the first open to the last close.
    #[must_use]
    pub fn change(&self) -> Option<f64> {
        Some(self.last()?.close - self.first()?.open)
    }

    /// Percent change from the first open to the last close.
    #[must_use]
    pub fn change_percent(&self) -> Option<f64> {
        let open = self.first()?.open;
        if open == 0.0 {
            return None;
        }
        Some(self.change()? / open * 100.0)
    }

    /// Highest high over the series.
    #[must_use]
    pub fn period_high(&self) -> Option<f64> {
        self.points.iter().map(|p| p.high).reduce(f64::max)
    }

    /// Lowest low over the series.
    #[must_use]
    pub fn period_low(&self) -> Option<f64> {
        self.points.iter().map(|p| p.low).reduce(f64::min)
    }

    /// Sum of volumes over the series.
    #[must_use]
    pub fn total_volume(&self) -> u64 {
        self.points.iter().map(|p| p.volume).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, open: f64, high: f64, low: f64, close: f64) -> PricePoint {
        let timestamp = NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        PricePoint::new(timestamp, format!("05/{day:02}"), open, high, low, close, 100_000)
    }

    #[test]
    fn test_change_over_series() {
        let series = Series::new(
            "AAPL",
            TimeRange::OneWeek,
            vec![
                point(1, 100.0, 102.0, 99.0, 101.0),
                point(2, 101.0, 106.0, 100.5, 105.0),
            ],
        );

        assert!((series.change().unwrap() - 5.0).abs() < 1e-10);
        assert!((series.change_percent().unwrap() - 5.0).abs() < 1e-10);
        assert_eq!(series.period_high(), Some(106.0));
        assert_eq!(series.period_low(), Some(99.0));
        assert_eq!(series.total_volume(), 200_000);
    }

    #[test]
    fn test_empty_series() {
        let series = Series::new("AAPL", TimeRange::Max, Vec::new());
        assert!(series.is_empty());
        assert!(series.change().is_none());
        assert!(series.period_high().is_none());
    }
}
