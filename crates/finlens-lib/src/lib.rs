//! Core of the finlens financial dashboard.
//!
//! This is a facade crate that re-exports functionality from the finlens
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use finlens_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let symbol = Watchlist::global().default_symbol().map_or("AAPL", Quote::symbol);
//!     let request = SeriesRequest::new(symbol, TimeRange::OneMonth);
//!     let series = SeriesGenerator::from_entropy().generate(&request)?;
//!     println!("{} points, last close {:?}", series.len(), series.last().map(|p| p.close));
//!
//!     let poller = AnalysisPoller::new(HttpBackend::with_defaults()?, AnalysisConfig::default());
//!     let outcome = poller.run(&Document::from_path("Q3_earnings_report.pdf").await?).await?;
//!     println!("{}", outcome.result.summary);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finlens/finlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use finlens_types::*;

pub use finlens_watchlist::Watchlist;

#[cfg(feature = "series")]
pub use finlens_series::{RangePolicy, SeriesGenerator};

#[cfg(feature = "analysis")]
pub use finlens_analysis::{
    AnalysisBackend, AnalysisConfig, AnalysisError, AnalysisOutcome, AnalysisPoller,
    AnalysisSession, BackendError, DEFAULT_BASE_URL, Document, DocumentKind, HttpBackend,
    PollerState, ResultSource, SessionSnapshot, extract, mock, snapshot_stream,
};

#[cfg(feature = "format")]
pub use finlens_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use finlens_lib::prelude::*;
/// ```
pub mod prelude {
    pub use finlens_types::{
        AnalysisResult, ChartKind, FinlensError, PricePoint, Quote, Result, Sentiment, Series,
        SeriesRequest, TaskId, TimeRange,
    };

    pub use finlens_watchlist::Watchlist;

    #[cfg(feature = "series")]
    pub use finlens_series::SeriesGenerator;

    #[cfg(feature = "analysis")]
    pub use finlens_analysis::{
        AnalysisConfig, AnalysisError, AnalysisOutcome, AnalysisPoller, AnalysisSession,
        Document, HttpBackend, PollerState, ResultSource,
    };

    #[cfg(feature = "format")]
    pub use finlens_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
