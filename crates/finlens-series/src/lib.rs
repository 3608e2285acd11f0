//! Synthetic OHLCV series generation for finlens.
//!
//! - [`RangePolicy`] - Window, spacing and label format for each range
//! - [`SeriesGenerator`] - Random-walk generator with an injectable random source

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finlens/finlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod generator;
mod schedule;

pub use generator::{BASE_PRICE_RANGE, SeriesGenerator, VOLATILITY, VOLUME_RANGE};
pub use schedule::{
    LabelStyle, Lookback, MARKET_CLOSE, MARKET_OPEN, RangePolicy, SampleTimes, Step,
};
