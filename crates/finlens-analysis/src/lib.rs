//! Document analysis submission and polling for finlens.
//!
//! - [`AnalysisConfig`] - Endpoint, timing and fallback settings
//! - [`Document`] - A validated upload
//! - [`AnalysisBackend`] - Seam over the remote service; [`HttpBackend`] talks HTTP
//! - [`extract`] - Grammar turning service text into an [`AnalysisResult`]
//! - [`mock`] - Canned results used when the service is unreachable
//! - [`AnalysisPoller`] - Drives one document to a terminal state
//! - [`AnalysisSession`] - Owns the current task and cancels it on replacement
//!
//! [`AnalysisResult`]: finlens_types::AnalysisResult

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finlens/finlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod backend;
mod client;
mod config;
mod document;
mod error;
pub mod extract;
pub mod mock;
mod poller;
mod session;
pub mod url;

#[cfg(test)]
mod testing;

pub use backend::{AnalysisBackend, SubmitResponse, TaskReport};
pub use client::HttpBackend;
pub use config::{AnalysisConfig, DEFAULT_BASE_URL};
pub use document::{Document, DocumentKind};
pub use error::{AnalysisError, BackendError};
pub use poller::{AnalysisOutcome, AnalysisPoller, PollerState, ResultSource};
pub use session::{AnalysisSession, SessionSnapshot, snapshot_stream};
