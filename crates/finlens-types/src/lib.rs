//! Core types for the finlens market dashboard toolkit.
//!
//! This crate provides the data structures shared by the other finlens crates:
//!
//! - [`PricePoint`] - One OHLCV sample of a synthetic series
//! - [`Series`] - Ordered price samples for a symbol and range
//! - [`TimeRange`] - Chart range selector (1D through MAX)
//! - [`SeriesRequest`] - Symbol and range requested by a view
//! - [`ChartKind`] - Line, bar or candle rendering selector
//! - [`Quote`] - Watchlist entry with last price and change
//! - [`AnalysisResult`] - Display-ready document analysis

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finlens/finlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod error;
mod point;
mod quote;
mod range;
mod request;
mod series;

pub use analysis::{AnalysisResult, Sentiment, TaskId, TaskStatus};
pub use error::{FinlensError, Result};
pub use point::PricePoint;
pub use quote::Quote;
pub use range::{TimeRange, TimeRangeParseError};
pub use request::{ChartKind, ChartKindParseError, SeriesRequest};
pub use series::Series;
