//! Error types for finlens.

use thiserror::Error;

use crate::TimeRange;

/// Result type alias for finlens operations.
pub type Result<T> = std::result::Result<T, FinlensError>;

/// Errors shared across the finlens crates.
#[derive(Error, Debug)]
pub enum FinlensError {
    /// Symbol is not part of the watchlist.
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    /// The series window could not be placed on the calendar.
    #[error("Cannot build a {range} series ending at {anchor}")]
    DateOutOfRange {
        /// The requested range.
        range: TimeRange,
        /// The anchor time the window was computed from.
        anchor: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
