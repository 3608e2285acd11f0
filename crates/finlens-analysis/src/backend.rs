//! Seam over the remote analysis service.

use std::sync::Arc;

use async_trait::async_trait;
use finlens_types::{TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

use crate::{BackendError, Document};

/// Body returned by the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Identifier of the created task.
    pub task_id: TaskId,
}

/// Body returned by the task status endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReport {
    /// Reported status; anything unrecognized is treated as pending.
    #[serde(default)]
    pub status: TaskStatus,
    /// Narrative analysis text, present once completed.
    #[serde(default)]
    pub analysis_results: Option<String>,
    /// Metrics text, present once completed.
    #[serde(default)]
    pub financial_metrics: Option<String>,
}

impl TaskReport {
    /// A report for a task still in progress.
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    /// A report for a completed task.
    #[must_use]
    pub fn completed(analysis_results: impl Into<String>, financial_metrics: impl Into<String>) -> Self {
        Self {
            status: TaskStatus::Completed,
            analysis_results: Some(analysis_results.into()),
            financial_metrics: Some(financial_metrics.into()),
        }
    }

    /// A report for a failed task.
    #[must_use]
    pub fn failed() -> Self {
        Self {
            status: TaskStatus::Failed,
            ..Self::default()
        }
    }
}

/// Operations the poller needs from an analysis service.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Uploads a document and returns the created task's identifier.
    async fn submit(&self, document: &Document) -> Result<TaskId, BackendError>;

    /// Fetches the current status of a task.
    async fn task_status(&self, task_id: &TaskId) -> Result<TaskReport, BackendError>;
}

#[async_trait]
impl<B: AnalysisBackend + ?Sized> AnalysisBackend for Arc<B> {
    async fn submit(&self, document: &Document) -> Result<TaskId, BackendError> {
        (**self).submit(document).await
    }

    async fn task_status(&self, task_id: &TaskId) -> Result<TaskReport, BackendError> {
        (**self).task_status(task_id).await
    }
}
