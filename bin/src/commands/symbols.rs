//! Symbols command implementation.
//!
//! Lists the watchlist with optional search filtering.

use anyhow::Result;
use finlens_lib::prelude::*;

/// List watchlist symbols, optionally filtered by a search pattern.
pub(crate) fn list_symbols(search: Option<&str>) -> Result<()> {
    let watchlist = Watchlist::global();

    let quotes: Vec<_> = match search {
        Some(pattern) => watchlist.search(pattern),
        None => watchlist.all().collect(),
    };

    if quotes.is_empty() {
        println!("No symbols found.");
        return Ok(());
    }

    println!("{:<8} {:<24} {:>10} {:>18}", "SYMBOL", "NAME", "PRICE", "CHANGE");
    println!("{}", "-".repeat(63));

    for quote in &quotes {
        println!(
            "{:<8} {:<24} {:>10.2} {:>18}",
            quote.symbol(),
            quote.name(),
            quote.price(),
            quote.signed_change()
        );
    }

    println!("\nTotal: {} symbols", quotes.len());
    Ok(())
}
