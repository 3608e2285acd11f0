//! Error types for document analysis.

use std::time::Duration;

use finlens_types::TaskId;
use thiserror::Error;

/// Errors from a single call to the analysis service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The service could not be reached (connection refused, timeout).
    #[error("analysis service unreachable: {0}")]
    Unreachable(String),

    /// The service answered with an error status.
    #[error("analysis service returned status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
    },

    /// The request could not be built locally.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The service answered with a body that could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Terminal failures of an analysis task.
///
/// A submission that cannot reach the service is absorbed into the canned
/// fallback unless fallback is disabled, in which case it surfaces as
/// [`AnalysisError::Submission`].
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Submission failed and the canned fallback is disabled.
    #[error("submission failed: {0}")]
    Submission(#[source] BackendError),

    /// The document or request was rejected before reaching the network.
    #[error("invalid analysis request: {0}")]
    Request(String),

    /// A status poll failed in transport.
    #[error("failed to poll task {task_id}: {source}")]
    PollTransport {
        /// The task being polled.
        task_id: TaskId,
        /// The underlying backend error.
        source: BackendError,
    },

    /// The service reported the task as failed.
    #[error("analysis task {task_id} failed")]
    RemoteTaskFailed {
        /// The failed task.
        task_id: TaskId,
    },

    /// The task was still pending when the poll budget ran out.
    #[error("task {task_id} still pending after {attempts} polls ({elapsed:?})")]
    PollTimeout {
        /// The task being polled.
        task_id: TaskId,
        /// Number of polls made.
        attempts: u32,
        /// Time spent polling.
        elapsed: Duration,
    },

    /// The task was cancelled before finishing.
    #[error("analysis cancelled")]
    Cancelled,

    /// The task panicked.
    #[error("analysis task aborted: {0}")]
    Aborted(String),
}

impl AnalysisError {
    /// Returns the message shown to the user for this failure.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Submission(_) => "Analysis service is unavailable.",
            Self::Request(_) => "Failed to submit document for analysis. Please try again.",
            Self::PollTransport { .. } => "Failed to retrieve analysis results. Please try again.",
            Self::RemoteTaskFailed { .. } => {
                "Analysis failed. Please try again with a different document."
            }
            Self::PollTimeout { .. } => {
                "Analysis is taking longer than expected. Please try again later."
            }
            Self::Cancelled => "Analysis was cancelled.",
            Self::Aborted(_) => "Analysis stopped unexpectedly. Please try again.",
        }
    }
}
