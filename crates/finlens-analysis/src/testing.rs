//! Scripted backend for poller and session tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use finlens_types::TaskId;

use crate::{AnalysisBackend, BackendError, Document, TaskReport};

/// How the scripted backend answers a submission.
#[derive(Debug, Clone)]
pub(crate) enum SubmitScript {
    Accept(&'static str),
    Unreachable,
    Rejected(u16),
    Invalid,
}

/// Backend that replays a fixed script.
///
/// Status polls pop from the queue; an empty queue reports pending.
#[derive(Debug)]
pub(crate) struct ScriptedBackend {
    submit: SubmitScript,
    reports: Mutex<VecDeque<Result<TaskReport, BackendError>>>,
    submits: AtomicU32,
    polls: AtomicU32,
}

impl ScriptedBackend {
    pub(crate) fn new(submit: SubmitScript) -> Self {
        Self {
            submit,
            reports: Mutex::new(VecDeque::new()),
            submits: AtomicU32::new(0),
            polls: AtomicU32::new(0),
        }
    }

    pub(crate) fn accepting(task_id: &'static str) -> Self {
        Self::new(SubmitScript::Accept(task_id))
    }

    pub(crate) fn unreachable() -> Self {
        Self::new(SubmitScript::Unreachable)
    }

    pub(crate) fn with_reports(
        self,
        reports: impl IntoIterator<Item = Result<TaskReport, BackendError>>,
    ) -> Self {
        self.reports.lock().unwrap().extend(reports);
        self
    }

    pub(crate) fn submits(&self) -> u32 {
        self.submits.load(Ordering::SeqCst)
    }

    pub(crate) fn polls(&self) -> u32 {
        self.polls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisBackend for ScriptedBackend {
    async fn submit(&self, _document: &Document) -> Result<TaskId, BackendError> {
        self.submits.fetch_add(1, Ordering::SeqCst);
        match &self.submit {
            SubmitScript::Accept(id) => Ok(TaskId::new(*id)),
            SubmitScript::Unreachable => {
                Err(BackendError::Unreachable("connection refused".to_string()))
            }
            SubmitScript::Rejected(status) => Err(BackendError::Rejected { status: *status }),
            SubmitScript::Invalid => Err(BackendError::InvalidRequest("bad header".to_string())),
        }
    }

    async fn task_status(&self, _task_id: &TaskId) -> Result<TaskReport, BackendError> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        self.reports
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(TaskReport::pending()))
    }
}

pub(crate) fn document(file_name: &str) -> Document {
    Document::new(file_name, b"quarterly numbers".to_vec()).unwrap()
}
