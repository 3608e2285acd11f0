//! Output formatters for finlens.
//!
//! - [`CsvFormatter`] - CSV or TSV series
//! - [`JsonFormatter`] - JSON array or NDJSON series, and analysis reports

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finlens/finlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::CsvFormatter;
pub use formatter::{ChartRow, FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
