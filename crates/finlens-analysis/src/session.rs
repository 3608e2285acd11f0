//! Ownership of the current analysis task.
//!
//! A session runs at most one task at a time. Submitting a new document
//! aborts the previous task before the new one starts, and every state update
//! is tagged with the task that produced it, so a replaced task can never
//! overwrite its successor's state.

use std::sync::Arc;

use futures::Stream;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use crate::{AnalysisBackend, AnalysisError, AnalysisOutcome, AnalysisPoller, Document, PollerState};

/// State of the session's current task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Session-local id of the task this state belongs to.
    pub task: Option<Uuid>,
    /// Lifecycle state of that task.
    pub state: PollerState,
}

#[derive(Debug)]
struct TaskHandle {
    id: Uuid,
    join: JoinHandle<Result<AnalysisOutcome, AnalysisError>>,
}

/// Owns the current analysis task and publishes its state.
#[derive(Debug)]
pub struct AnalysisSession<B> {
    poller: Arc<AnalysisPoller<B>>,
    state: Arc<watch::Sender<SessionSnapshot>>,
    current: Option<TaskHandle>,
}

impl<B: AnalysisBackend + 'static> AnalysisSession<B> {
    /// Creates an idle session.
    #[must_use]
    pub fn new(poller: AnalysisPoller<B>) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self {
            poller: Arc::new(poller),
            state: Arc::new(state),
            current: None,
        }
    }

    /// Starts analysing a document, cancelling any task in flight.
    ///
    /// Returns the session-local id of the new task.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Aborted`] when called outside a Tokio runtime;
    /// the session is left untouched.
    pub fn submit(&mut self, document: Document) -> Result<Uuid, AnalysisError> {
        let runtime = Handle::try_current().map_err(|e| AnalysisError::Aborted(e.to_string()))?;
        self.cancel();

        let id = Uuid::new_v4();
        self.state.send_replace(SessionSnapshot {
            task: Some(id),
            state: PollerState::Idle,
        });
        debug!(task = %id, file = document.file_name(), "starting analysis task");

        let poller = Arc::clone(&self.poller);
        let state = Arc::clone(&self.state);
        let join = runtime.spawn(async move {
            poller
                .run_with(&document, |next| publish(&state, id, next))
                .await
        });

        self.current = Some(TaskHandle { id, join });
        Ok(id)
    }

    /// Aborts the current task and resets the session to idle.
    ///
    /// A task that already finished keeps its terminal snapshot. Returns true
    /// if a task was still running.
    pub fn cancel(&mut self) -> bool {
        let Some(handle) = self.current.take() else {
            return false;
        };
        if handle.join.is_finished() {
            return false;
        }
        handle.join.abort();
        self.state.send_replace(SessionSnapshot::default());
        debug!(task = %handle.id, "cancelled analysis task");
        true
    }

    /// Waits for the current task to finish.
    ///
    /// Returns `None` if no task is current.
    pub async fn wait(&mut self) -> Option<Result<AnalysisOutcome, AnalysisError>> {
        let handle = self.current.as_mut()?;
        let joined = (&mut handle.join).await;
        self.current = None;

        Some(joined.unwrap_or_else(|err| {
            if err.is_cancelled() {
                Err(AnalysisError::Cancelled)
            } else {
                Err(AnalysisError::Aborted(err.to_string()))
            }
        }))
    }

    /// Subscribes to state updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    /// Returns the latest state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    /// Returns the id of the current task.
    #[must_use]
    pub fn current_task(&self) -> Option<Uuid> {
        self.current.as_ref().map(|handle| handle.id)
    }

    /// Returns the poller driving each task.
    #[must_use]
    pub fn poller(&self) -> &AnalysisPoller<B> {
        &self.poller
    }
}

impl<B> Drop for AnalysisSession<B> {
    fn drop(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.join.abort();
        }
    }
}

/// Applies a state update only if `task` is still the session's task.
fn publish(state: &watch::Sender<SessionSnapshot>, task: Uuid, next: PollerState) {
    state.send_if_modified(|snapshot| {
        if snapshot.task != Some(task) {
            return false;
        }
        snapshot.state = next;
        true
    });
}

/// Turns a subscription into a stream of snapshots.
///
/// Yields each change after subscription; ends when the session and its task
/// are gone.
pub fn snapshot_stream(
    receiver: watch::Receiver<SessionSnapshot>,
) -> impl Stream<Item = SessionSnapshot> {
    futures::stream::unfold(receiver, |mut receiver| async move {
        receiver.changed().await.ok()?;
        let snapshot = receiver.borrow_and_update().clone();
        Some((snapshot, receiver))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedBackend, document};
    use crate::{AnalysisConfig, ResultSource, TaskReport};
    use futures::StreamExt;
    use std::time::Duration;
    use tokio::time::sleep;

    fn unbounded() -> AnalysisConfig {
        AnalysisConfig::default()
            .with_max_poll_attempts(None)
            .with_poll_deadline(None)
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_completes() {
        let backend = ScriptedBackend::accepting("task-1").with_reports([
            Ok(TaskReport::pending()),
            Ok(TaskReport::completed("Margins improved", "- Margin: 23%")),
        ]);
        let mut session = AnalysisSession::new(AnalysisPoller::new(backend, unbounded()));

        let id = session.submit(document("q3.pdf")).unwrap();
        assert_eq!(session.current_task(), Some(id));

        let outcome = session.wait().await.unwrap().unwrap();
        assert_eq!(outcome.source, ResultSource::Remote);
        assert_eq!(outcome.polls, 2);
        assert_eq!(session.current_task(), None);
        assert_eq!(
            session.snapshot(),
            SessionSnapshot {
                task: Some(id),
                state: PollerState::Completed {
                    source: ResultSource::Remote
                },
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_replaces_running_task() {
        let backend = Arc::new(ScriptedBackend::accepting("task-2"));
        let mut session =
            AnalysisSession::new(AnalysisPoller::new(Arc::clone(&backend), unbounded()));

        let first = session.submit(document("first.pdf")).unwrap();
        sleep(Duration::from_secs(1)).await;
        assert_eq!(backend.polls(), 1);

        let second = session.submit(document("second.pdf")).unwrap();
        assert_ne!(first, second);
        sleep(Duration::from_secs(9)).await;

        // first: one poll at t=0; second: polls at t=1, 3, 5, 7, 9
        assert_eq!(backend.polls(), 6);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.task, Some(second));
        assert!(matches!(snapshot.state, PollerState::Polling { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_polling() {
        let backend = Arc::new(ScriptedBackend::accepting("task-3"));
        let mut session =
            AnalysisSession::new(AnalysisPoller::new(Arc::clone(&backend), unbounded()));

        session.submit(document("q3.pdf")).unwrap();
        sleep(Duration::from_secs(1)).await;

        assert!(session.cancel());
        assert!(!session.cancel());
        assert_eq!(session.snapshot(), SessionSnapshot::default());
        assert!(session.wait().await.is_none());

        let polls = backend.polls();
        sleep(Duration::from_secs(10)).await;
        assert_eq!(backend.polls(), polls);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_completion_keeps_snapshot() {
        let backend = ScriptedBackend::accepting("task-4")
            .with_reports([Ok(TaskReport::completed("Margins improved", "- Margin: 23%"))]);
        let mut session = AnalysisSession::new(AnalysisPoller::new(backend, unbounded()));

        let id = session.submit(document("q3.pdf")).unwrap();
        sleep(Duration::from_secs(1)).await;

        assert!(!session.cancel());
        assert_eq!(session.current_task(), None);
        assert_eq!(
            session.snapshot(),
            SessionSnapshot {
                task: Some(id),
                state: PollerState::Completed {
                    source: ResultSource::Remote
                },
            }
        );
    }

    #[test]
    fn test_submit_outside_runtime() {
        let backend = ScriptedBackend::accepting("task-7");
        let mut session = AnalysisSession::new(AnalysisPoller::new(backend, unbounded()));

        let err = session.submit(document("q3.pdf")).unwrap_err();
        assert!(matches!(err, AnalysisError::Aborted(_)));
        assert_eq!(session.current_task(), None);
        assert_eq!(session.snapshot(), SessionSnapshot::default());
    }

    #[test]
    fn test_stale_publish_ignored() {
        let current = Uuid::new_v4();
        let stale = Uuid::new_v4();
        let (state, _) = watch::channel(SessionSnapshot {
            task: Some(current),
            state: PollerState::Submitting,
        });

        publish(&state, stale, PollerState::MockFallback);
        assert_eq!(state.borrow().state, PollerState::Submitting);

        publish(&state, current, PollerState::MockFallback);
        assert_eq!(state.borrow().state, PollerState::MockFallback);
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_stream_reaches_terminal_state() {
        let mut session =
            AnalysisSession::new(AnalysisPoller::new(ScriptedBackend::unreachable(), unbounded()));
        let receiver = session.subscribe();
        let id = session.submit(document("notes.txt")).unwrap();

        let mut stream = std::pin::pin!(snapshot_stream(receiver));
        let mut last = None;
        while let Some(snapshot) = stream.next().await {
            let done = snapshot.state.is_terminal();
            last = Some(snapshot);
            if done {
                break;
            }
        }

        let last = last.unwrap();
        assert_eq!(last.task, Some(id));
        assert_eq!(
            last.state,
            PollerState::Completed {
                source: ResultSource::Mock
            }
        );
        assert!(session.wait().await.unwrap().unwrap().is_mock());
    }
}
