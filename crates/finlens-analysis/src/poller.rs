//! Drives one document through submission, polling and fallback.

use std::fmt;

use finlens_types::{AnalysisResult, TaskId, TaskStatus};
use serde::Serialize;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};

use crate::{
    AnalysisBackend, AnalysisConfig, AnalysisError, BackendError, Document, TaskReport, extract,
    mock,
};

/// Where a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    /// Derived from a completed remote task.
    Remote,
    /// Canned result substituted after a failed submission.
    Mock,
}

impl ResultSource {
    /// Returns the source as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Mock => "mock",
        }
    }
}

/// Lifecycle of one analysis task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PollerState {
    /// Nothing submitted.
    #[default]
    Idle,
    /// Upload in flight.
    Submitting,
    /// Waiting on the remote task.
    Polling {
        /// The remote task.
        task_id: TaskId,
        /// Number of the poll about to be made, starting at 1.
        attempt: u32,
    },
    /// Submission failed; a canned result is being prepared.
    MockFallback,
    /// A result is available.
    Completed {
        /// Where the result came from.
        source: ResultSource,
    },
    /// The task ended in an error.
    Failed {
        /// User-facing message.
        message: String,
    },
}

impl PollerState {
    /// Returns true for `Completed` and `Failed`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Failed { .. })
    }

    /// Returns the state as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Polling { .. } => "polling",
            Self::MockFallback => "mock_fallback",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for PollerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Polling { task_id, attempt } => write!(f, "polling {task_id} (#{attempt})"),
            Self::Completed { source } => write!(f, "completed ({})", source.as_str()),
            Self::Failed { message } => write!(f, "failed: {message}"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Result of a finished analysis task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    /// Remote task id; `None` for mock results.
    pub task_id: Option<TaskId>,
    /// Name of the submitted file.
    pub file_name: String,
    /// Where the result came from.
    pub source: ResultSource,
    /// Number of status polls made.
    pub polls: u32,
    /// The derived result.
    pub result: AnalysisResult,
}

impl AnalysisOutcome {
    /// Returns true if the result is canned.
    #[must_use]
    pub const fn is_mock(&self) -> bool {
        matches!(self.source, ResultSource::Mock)
    }
}

/// Submits a document and polls until the task reaches a terminal state.
#[derive(Debug, Clone)]
pub struct AnalysisPoller<B> {
    backend: B,
    config: AnalysisConfig,
}

impl<B: AnalysisBackend> AnalysisPoller<B> {
    /// Creates a poller over the given backend.
    #[must_use]
    pub const fn new(backend: B, config: AnalysisConfig) -> Self {
        Self { backend, config }
    }

    /// Returns the poller configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Returns the backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs the task to completion.
    ///
    /// # Errors
    ///
    /// See [`AnalysisPoller::run_with`].
    pub async fn run(&self, document: &Document) -> Result<AnalysisOutcome, AnalysisError> {
        self.run_with(document, |_| {}).await
    }

    /// Runs the task to completion, reporting every state transition.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::Request`] if the request could not be built
    /// - [`AnalysisError::Submission`] if submission failed with fallback disabled
    /// - [`AnalysisError::PollTransport`] if a status poll failed
    /// - [`AnalysisError::RemoteTaskFailed`] if the service reported failure
    /// - [`AnalysisError::PollTimeout`] if the poll budget ran out
    pub async fn run_with<F>(
        &self,
        document: &Document,
        mut on_state: F,
    ) -> Result<AnalysisOutcome, AnalysisError>
    where
        F: FnMut(PollerState) + Send,
    {
        let result = self.drive(document, &mut on_state).await;
        match &result {
            Ok(outcome) => on_state(PollerState::Completed {
                source: outcome.source,
            }),
            Err(err) => {
                warn!(file = document.file_name(), error = %err, "analysis failed");
                on_state(PollerState::Failed {
                    message: err.user_message().to_string(),
                });
            }
        }
        result
    }

    async fn drive<F>(
        &self,
        document: &Document,
        on_state: &mut F,
    ) -> Result<AnalysisOutcome, AnalysisError>
    where
        F: FnMut(PollerState) + Send,
    {
        on_state(PollerState::Submitting);
        info!(file = document.file_name(), bytes = document.len(), "submitting document");

        let task_id = match self.backend.submit(document).await {
            Ok(task_id) => task_id,
            Err(BackendError::InvalidRequest(reason)) => {
                return Err(AnalysisError::Request(reason));
            }
            Err(err) if self.config.mock_fallback => {
                warn!(error = %err, "analysis service unavailable, using canned result");
                on_state(PollerState::MockFallback);
                sleep(self.config.mock_delay).await;
                return Ok(AnalysisOutcome {
                    task_id: None,
                    file_name: document.file_name().to_string(),
                    source: ResultSource::Mock,
                    polls: 0,
                    result: mock::mock_result(document.file_name()),
                });
            }
            Err(err) => return Err(AnalysisError::Submission(err)),
        };

        info!(%task_id, "task accepted");
        let (report, polls) = self.poll(&task_id, on_state).await?;

        Ok(AnalysisOutcome {
            task_id: Some(task_id),
            file_name: document.file_name().to_string(),
            source: ResultSource::Remote,
            polls,
            result: extract::derive_result(
                report.analysis_results.as_deref().unwrap_or_default(),
                report.financial_metrics.as_deref().unwrap_or_default(),
            ),
        })
    }

    /// Polls until the task completes, returning the final report and the
    /// number of polls made.
    async fn poll<F>(
        &self,
        task_id: &TaskId,
        on_state: &mut F,
    ) -> Result<(TaskReport, u32), AnalysisError>
    where
        F: FnMut(PollerState) + Send,
    {
        let started = Instant::now();
        let mut attempt = 0;

        loop {
            attempt += 1;
            on_state(PollerState::Polling {
                task_id: task_id.clone(),
                attempt,
            });

            let report = self
                .backend
                .task_status(task_id)
                .await
                .map_err(|source| AnalysisError::PollTransport {
                    task_id: task_id.clone(),
                    source,
                })?;

            match report.status {
                TaskStatus::Completed => {
                    info!(%task_id, polls = attempt, "task completed");
                    return Ok((report, attempt));
                }
                TaskStatus::Failed => {
                    return Err(AnalysisError::RemoteTaskFailed {
                        task_id: task_id.clone(),
                    });
                }
                TaskStatus::Pending => {}
            }

            let elapsed = started.elapsed();
            let out_of_attempts = self
                .config
                .max_poll_attempts
                .is_some_and(|max| attempt >= max);
            let past_deadline = self
                .config
                .poll_deadline
                .is_some_and(|deadline| elapsed + self.config.poll_interval > deadline);
            if out_of_attempts || past_deadline {
                return Err(AnalysisError::PollTimeout {
                    task_id: task_id.clone(),
                    attempts: attempt,
                    elapsed,
                });
            }

            debug!(%task_id, attempt, "task pending");
            sleep(self.config.poll_interval).await;
        }
    }
}
