//! Dashboard watchlist registry for finlens.
//!
//! The watchlist is the fixed set of symbols the dashboard offers, each with
//! its last quote. Series generation accepts any symbol; the watchlist only
//! drives selection and display.
//!
//! # Example
//!
//! ```
//! use finlens_watchlist::Watchlist;
//!
//! let watchlist = Watchlist::global();
//!
//! if let Some(quote) = watchlist.get("aapl") {
//!     println!("{}: {:.2}", quote.name(), quote.price());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finlens/finlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::OnceLock;

use finlens_types::{FinlensError, Quote};

/// The watchlist JSON embedded at compile time.
const WATCHLIST_JSON: &str = include_str!("../data/watchlist.json");

/// Global watchlist instance.
static WATCHLIST: OnceLock<Watchlist> = OnceLock::new();

/// Ordered registry of dashboard symbols.
#[derive(Debug)]
pub struct Watchlist {
    quotes: Vec<Quote>,
}

impl Watchlist {
    /// Returns the global watchlist.
    ///
    /// The watchlist is loaded lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        WATCHLIST.get_or_init(Self::load)
    }

    /// Loads quotes from the embedded JSON data.
    fn load() -> Self {
        let quotes: Vec<Quote> =
            serde_json::from_str(WATCHLIST_JSON).expect("Invalid watchlist.json");
        Self { quotes }
    }

    /// Builds a watchlist from explicit quotes, keeping their order.
    #[must_use]
    pub const fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// Looks up a quote by symbol (case-insensitive).
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Quote> {
        self.quotes
            .iter()
            .find(|q| q.symbol().eq_ignore_ascii_case(symbol))
    }

    /// Looks up a quote by symbol, failing for symbols not on the watchlist.
    ///
    /// # Errors
    ///
    /// Returns [`FinlensError::UnknownSymbol`] if the symbol is not listed.
    pub fn require(&self, symbol: &str) -> Result<&Quote, FinlensError> {
        self.get(symbol)
            .ok_or_else(|| FinlensError::UnknownSymbol(symbol.to_string()))
    }

    /// Returns all quotes in display order.
    pub fn all(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }

    /// Returns the symbol selected when the dashboard opens.
    #[must_use]
    pub fn default_symbol(&self) -> Option<&Quote> {
        self.quotes.first()
    }

    /// Returns the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if the watchlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Searches by symbol or name substring (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&Quote> {
        let pattern = pattern.trim().to_lowercase();
        self.quotes
            .iter()
            .filter(|q| {
                q.symbol().to_lowercase().contains(&pattern)
                    || q.name().to_lowercase().contains(&pattern)
            })
            .collect()
    }

    /// Returns all symbols in display order.
    pub fn symbols(&self) -> Vec<&str> {
        self.quotes.iter().map(Quote::symbol).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watchlist_loads() {
        let watchlist = Watchlist::global();
        assert_eq!(watchlist.len(), 5);
        assert_eq!(
            watchlist.symbols(),
            vec!["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"]
        );
    }

    #[test]
    fn test_get_case_insensitive() {
        let watchlist = Watchlist::global();
        assert!(watchlist.get("aapl").is_some());
        assert!(watchlist.get("Msft").is_some());
        assert!(watchlist.get("NFLX").is_none());
    }

    #[test]
    fn test_require_unknown() {
        let watchlist = Watchlist::global();
        let err = watchlist.require("NFLX").unwrap_err();
        assert!(matches!(err, FinlensError::UnknownSymbol(s) if s == "NFLX"));
    }

    #[test]
    fn test_search_by_name_or_symbol() {
        let watchlist = Watchlist::global();

        let results = watchlist.search("amazon");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].symbol(), "AMZN");

        let results = watchlist.search("inc");
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_default_symbol() {
        let watchlist = Watchlist::global();
        assert_eq!(watchlist.default_symbol().unwrap().symbol(), "AAPL");
    }
}
