//! Watchlist quote.

use serde::{Deserialize, Serialize};

/// A watchlist entry with its last price and daily change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    symbol: String,
    name: String,
    price: f64,
    change: f64,
    change_percent: f64,
}

impl Quote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        change: f64,
        change_percent: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            change,
            change_percent,
        }
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the company name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the last price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Returns the absolute daily change.
    #[must_use]
    pub const fn change(&self) -> f64 {
        self.change
    }

    /// Returns the percent daily change.
    #[must_use]
    pub const fn change_percent(&self) -> f64 {
        self.change_percent
    }

    /// Returns true if the quote is flat or up on the day.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }

    /// Formats the change as `+1.25 (+0.67%)`.
    #[must_use]
    pub fn signed_change(&self) -> String {
        let sign = |v: f64| if v > 0.0 { "+" } else { "" };
        format!(
            "{}{:.2} ({}{:.2}%)",
            sign(self.change),
            self.change,
            sign(self.change_percent),
            self.change_percent
        )
    }
}
