//! Series command implementation.
//!
//! Generates a synthetic price series and writes it to stdout or a file.

use crate::display::write_series;
use anyhow::{Context, Result};
use finlens_lib::prelude::*;
use inquire::Select;
use std::fs::File;
use std::io::{BufWriter, IsTerminal};
use std::path::PathBuf;
use tracing::warn;

/// Generate a series for a symbol and write it out.
pub(crate) fn series(
    symbol: Option<&str>,
    range_label: &str,
    chart: ChartKind,
    format: OutputFormat,
    output: Option<PathBuf>,
    seed: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let symbol = match symbol {
        Some(symbol) => symbol.trim().to_uppercase(),
        None => pick_symbol()?,
    };
    if Watchlist::global().get(&symbol).is_none() {
        warn!(%symbol, "symbol is not on the watchlist");
    }

    let request = SeriesRequest::new(symbol, parse_range(range_label));
    let series = match seed {
        Some(seed) => SeriesGenerator::seeded(seed).generate(&request)?,
        None => SeriesGenerator::from_entropy().generate(&request)?,
    };

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            write_series(&series, chart, format, BufWriter::new(file))?;
            if !quiet {
                eprintln!(
                    "Wrote {} {} points for {} to {}",
                    series.len(),
                    series.range,
                    series.symbol,
                    path.display()
                );
            }
        }
        None => write_series(&series, chart, format, BufWriter::new(std::io::stdout()))?,
    }

    Ok(())
}

/// Resolve a range label, falling back to the full history for unknown labels.
pub(crate) fn parse_range(label: &str) -> TimeRange {
    label.parse().unwrap_or_else(|err| {
        warn!(%err, "unrecognized range, using MAX");
        TimeRange::Max
    })
}

/// Ask for a symbol on a terminal, otherwise use the default one.
fn pick_symbol() -> Result<String> {
    let watchlist = Watchlist::global();

    if !std::io::stdin().is_terminal() {
        return watchlist
            .default_symbol()
            .map(|quote| quote.symbol().to_string())
            .context("Watchlist is empty");
    }

    let options: Vec<String> = watchlist
        .all()
        .map(|quote| format!("{} | {}", quote.symbol(), quote.name()))
        .collect();

    let selection = Select::new("Select a symbol:", options)
        .prompt()
        .context("Symbol selection cancelled")?;

    // The symbol is the part before " | "
    let symbol = selection
        .split(" | ")
        .next()
        .context("Invalid selection format")?;
    Ok(symbol.to_string())
}
