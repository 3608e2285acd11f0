//! Quote command implementation.
//!
//! Shows a watchlist quote along with statistics of freshly generated
//! synthetic series for the short ranges.

use crate::display::format_volume;
use anyhow::{Context, Result};
use finlens_lib::prelude::*;

const SUMMARY_RANGES: [TimeRange; 3] = [TimeRange::OneDay, TimeRange::OneWeek, TimeRange::OneMonth];

/// Show quote details and range statistics for a symbol.
pub(crate) fn show_quote(symbol: &str) -> Result<()> {
    let quote = Watchlist::global()
        .get(symbol)
        .with_context(|| format!("Unknown symbol: {symbol}"))?;

    println!("Symbol:  {}", quote.symbol());
    println!("Name:    {}", quote.name());
    println!("Price:   {:.2}", quote.price());
    println!(
        "Change:  {} {}",
        quote.signed_change(),
        if quote.is_up() { "up" } else { "down" }
    );

    let mut generator = SeriesGenerator::from_entropy();

    println!("\nSynthetic Series:");
    println!(
        "{:<8} {:>7} {:>10} {:>10} {:>10} {:>10}",
        "RANGE", "POINTS", "LOW", "HIGH", "CHANGE", "VOLUME"
    );
    println!("{}", "-".repeat(60));

    for range in SUMMARY_RANGES {
        let series = generator.generate(&SeriesRequest::new(quote.symbol(), range))?;
        println!(
            "{:<8} {:>7} {:>10.2} {:>10.2} {:>9.2}% {:>10}",
            range.as_str(),
            series.len(),
            series.period_low().unwrap_or_default(),
            series.period_high().unwrap_or_default(),
            series.change_percent().unwrap_or_default(),
            format_volume(series.total_volume()),
        );
    }

    println!("\nNote: Series values are simulated and differ on every run.");
    Ok(())
}
