//! Analyze command implementation.
//!
//! Submits a document to the analysis service, follows the task with a
//! spinner, then prints the result or writes it as a JSON report.

use crate::display::print_analysis;
use anyhow::{Context, Result, anyhow};
use finlens_lib::prelude::*;
use finlens_lib::{SessionSnapshot, snapshot_stream};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Command-line settings for one analysis run.
#[derive(Debug)]
pub(crate) struct AnalyzeOptions {
    pub(crate) api_url: String,
    pub(crate) poll_interval: u64,
    pub(crate) max_polls: u32,
    pub(crate) deadline: u64,
    pub(crate) no_mock: bool,
    pub(crate) json: Option<PathBuf>,
}

impl AnalyzeOptions {
    /// Build the poller configuration. Zero limits mean unbounded.
    pub(crate) fn config(&self) -> AnalysisConfig {
        AnalysisConfig::default()
            .with_base_url(self.api_url.clone())
            .with_poll_interval(Duration::from_secs(self.poll_interval))
            .with_max_poll_attempts((self.max_polls > 0).then_some(self.max_polls))
            .with_poll_deadline((self.deadline > 0).then(|| Duration::from_secs(self.deadline)))
            .with_mock_fallback(!self.no_mock)
    }
}

/// Analyze a document and report the result.
pub(crate) async fn analyze(file: &Path, options: AnalyzeOptions, quiet: bool) -> Result<()> {
    let document = Document::from_path(file).await.map_err(user_error)?;

    let config = options.config();
    let backend = HttpBackend::new(config.clone())?;
    let mut session = AnalysisSession::new(AnalysisPoller::new(backend, config));

    let progress = spinner(quiet);
    let updates = snapshot_stream(session.subscribe());
    let id = session.submit(document).map_err(user_error)?;
    info!(task = %id, file = %file.display(), "analysis started");

    let follower = {
        let progress = progress.clone();
        tokio::spawn(async move {
            let mut updates = std::pin::pin!(updates);
            while let Some(SessionSnapshot { state, .. }) = updates.next().await {
                progress.set_message(describe(&state));
                if state.is_terminal() {
                    break;
                }
            }
        })
    };

    let finished = tokio::select! {
        result = session.wait() => result,
        _ = tokio::signal::ctrl_c() => None,
    };
    follower.abort();
    progress.finish_and_clear();

    let Some(result) = finished else {
        session.cancel();
        return Err(user_error(AnalysisError::Cancelled));
    };
    let outcome = result.map_err(user_error)?;

    match options.json {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            JsonFormatter::new()
                .with_pretty(true)
                .write_analysis(&outcome, BufWriter::new(file))?;
            if !quiet {
                if outcome.is_mock() {
                    eprintln!("Demo mode: the analysis service could not be reached.");
                }
                eprintln!("Report written to {}", path.display());
            }
        }
        None => print_analysis(&outcome),
    }

    Ok(())
}

/// Pair the user-facing message with the technical cause.
fn user_error(err: AnalysisError) -> anyhow::Error {
    anyhow!("{} ({err})", err.user_message())
}

fn spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("Invalid progress template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Spinner text for a poller state.
pub(crate) fn describe(state: &PollerState) -> String {
    match state {
        PollerState::Idle => "Preparing document".to_string(),
        PollerState::Submitting => "Uploading document".to_string(),
        PollerState::Polling { task_id, attempt } => {
            format!("Analyzing (task {task_id}, check #{attempt})")
        }
        PollerState::MockFallback => "Service unavailable, preparing demo results".to_string(),
        PollerState::Completed { .. } => "Analysis complete".to_string(),
        PollerState::Failed { message } => message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> AnalyzeOptions {
        AnalyzeOptions {
            api_url: "http://localhost:9000".to_string(),
            poll_interval: 5,
            max_polls: 0,
            deadline: 120,
            no_mock: true,
            json: None,
        }
    }

    #[test]
    fn test_options_config() {
        let config = options().config();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.max_poll_attempts, None);
        assert_eq!(config.poll_deadline, Some(Duration::from_secs(120)));
        assert!(!config.mock_fallback);
    }

    #[test]
    fn test_describe_polling() {
        let state = PollerState::Polling {
            task_id: TaskId::new("a1b2"),
            attempt: 4,
        };
        assert_eq!(describe(&state), "Analyzing (task a1b2, check #4)");
    }
}
