//! HTTP backend for the analysis service.

use std::time::Duration;

use async_trait::async_trait;
use finlens_types::TaskId;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::url::{analyze_url, task_url};
use crate::{AnalysisBackend, AnalysisConfig, BackendError, Document, SubmitResponse, TaskReport};

/// Talks to the analysis service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: AnalysisConfig,
}

impl HttpBackend {
    /// Creates a backend with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: AnalysisConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a backend with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(AnalysisConfig::default())
    }

    /// Returns the backend configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn form(document: &Document) -> Result<Form, BackendError> {
        let part = Part::bytes(document.bytes().to_vec())
            .file_name(document.file_name().to_string())
            .mime_str(document.kind().mime())
            .map_err(|e| BackendError::InvalidRequest(e.to_string()))?;
        Ok(Form::new().part("file", part))
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn submit(&self, document: &Document) -> Result<TaskId, BackendError> {
        let url = analyze_url(&self.config.base_url);
        debug!(%url, file = document.file_name(), bytes = document.len(), "submitting document");

        let response = self
            .client
            .post(&url)
            .multipart(Self::form(document)?)
            .send()
            .await
            .map_err(classify)?
            .error_for_status()
            .map_err(classify)?;

        let body: SubmitResponse = response.json().await.map_err(classify)?;
        Ok(body.task_id)
    }

    async fn task_status(&self, task_id: &TaskId) -> Result<TaskReport, BackendError> {
        let url = task_url(&self.config.base_url, task_id.as_str())?;
        debug!(%url, %task_id, "polling task");

        self.client
            .get(url)
            .send()
            .await
            .map_err(classify)?
            .error_for_status()
            .map_err(classify)?
            .json()
            .await
            .map_err(classify)
    }
}

/// Maps a reqwest error onto the backend error kinds.
fn classify(error: reqwest::Error) -> BackendError {
    if let Some(status) = error.status() {
        BackendError::Rejected {
            status: status.as_u16(),
        }
    } else if error.is_builder() {
        BackendError::InvalidRequest(error.to_string())
    } else if error.is_decode() {
        BackendError::Decode(error.to_string())
    } else {
        BackendError::Unreachable(error.to_string())
    }
}
