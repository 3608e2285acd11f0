//! Benchmark fixtures for finlens.

use chrono::{NaiveDate, NaiveDateTime};
use finlens_lib::prelude::*;

/// Fixed anchor so every run samples the same calendar window.
#[must_use]
pub fn anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .and_then(|day| day.and_hms_opt(12, 0, 0))
        .unwrap_or_default()
}

/// A narrative shaped like a service response, `sections` sections long.
#[must_use]
pub fn analysis_text(sections: usize) -> String {
    let mut text = String::from("Revenue growth of 14% driven by services.\n");
    for i in 0..sections {
        text.push_str(&format!(
            "### Section {i}\nOperating margin improved across segments in region {i}.\n"
        ));
    }
    text.push_str("Key challenges:\n");
    for i in 0..sections {
        text.push_str(&format!("Rebalance supplier exposure in region {i}\n"));
    }
    text
}

/// A metrics listing with `lines` bullet lines.
#[must_use]
pub fn metrics_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("- Metric {i}: {}.{:02}M", 100 + i, i % 100))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A seeded series for the given range.
///
/// # Panics
///
/// Panics if the fixed anchor cannot host the range window.
#[must_use]
pub fn seeded_series(range: TimeRange) -> Series {
    SeriesGenerator::seeded(42)
        .generate_at(&SeriesRequest::new("AAPL", range), anchor())
        .expect("fixed anchor hosts every range")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures() {
        assert_eq!(metrics_text(3).lines().count(), 3);
        assert!(analysis_text(2).contains("challenges"));
        assert_eq!(seeded_series(TimeRange::OneDay).len(), 78);
    }
}
