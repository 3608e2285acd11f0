//! Display utilities and output formatting for the finlens CLI.

use anyhow::Result;
use finlens_lib::prelude::*;
use std::io::Write;

/// Write a series in the given format.
pub(crate) fn write_series<W: Write + Send>(
    series: &Series,
    chart: ChartKind,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Csv => CsvFormatter::new().write_series(series, chart, writer)?,
        OutputFormat::Json => JsonFormatter::new().write_series(series, chart, writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_series(series, chart, writer)?,
    }
    Ok(())
}

/// Format a volume with K/M suffixes.
pub(crate) fn format_volume(volume: u64) -> String {
    const K: f64 = 1_000.0;
    const M: f64 = K * 1_000.0;
    const B: f64 = M * 1_000.0;

    let v = volume as f64;
    if v >= B {
        format!("{:.2}B", v / B)
    } else if v >= M {
        format!("{:.2}M", v / M)
    } else if v >= K {
        format!("{:.1}K", v / K)
    } else {
        volume.to_string()
    }
}

/// Print a section heading with an underline.
fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(title.len()));
}

/// Print an analysis outcome section by section.
pub(crate) fn print_analysis(outcome: &AnalysisOutcome) {
    let result = &outcome.result;

    if outcome.is_mock() {
        println!("Demo mode: the analysis service could not be reached, showing sample results.");
    }
    println!("Document: {}", outcome.file_name);
    if let Some(task_id) = &outcome.task_id {
        println!("Task:     {task_id} ({} status checks)", outcome.polls);
    }
    println!("Sentiment: {}", result.sentiment);

    heading("Summary");
    println!("{}", result.summary);

    heading("Complete Analysis");
    println!("{}", result.analysis_results.trim_end());

    heading("Financial Metrics");
    println!("{}", result.financial_metrics.trim_end());

    heading("Key Insights");
    for (i, insight) in result.key_insights.iter().enumerate() {
        println!("{:>2}. {insight}", i + 1);
    }

    heading("Recommendations");
    for recommendation in &result.recommendations {
        println!(" - {recommendation}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(950), "950");
        assert_eq!(format_volume(420_000), "420.0K");
        assert_eq!(format_volume(12_500_000), "12.50M");
        assert_eq!(format_volume(3_000_000_000), "3.00B");
    }

    #[test]
    fn test_write_series_to_file() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let point = PricePoint::new(timestamp, "09:30", 150.0, 151.0, 149.5, 150.5, 1_000);
        let series = Series::new("AAPL", TimeRange::OneDay, vec![point]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aapl.ndjson");
        let file = std::fs::File::create(&path).unwrap();
        write_series(&series, ChartKind::Candle, OutputFormat::Ndjson, file).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(written.contains("\"open\":150.0"));
    }
}
