//! Document analysis data model.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Overall tone of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Growth or improvement language dominates.
    Positive,
    /// Decline or risk language dominates.
    Negative,
    /// Neither.
    #[default]
    Neutral,
}

impl Sentiment {
    /// Returns the sentiment as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display-ready result of a document analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// One-paragraph summary.
    pub summary: String,
    /// Full analysis text, sections headed by `###`.
    pub analysis_results: String,
    /// Financial metrics text, one metric per line.
    pub financial_metrics: String,
    /// Key insights in display order.
    pub key_insights: Vec<String>,
    /// Overall tone.
    pub sentiment: Sentiment,
    /// Recommendations in display order.
    pub recommendations: Vec<String>,
}

/// Opaque task identifier assigned by the analysis service.
///
/// Deserializes from a JSON string or number; numbers keep their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(id) => Ok(Self(id)),
            serde_json::Value::Number(id) => Ok(Self(id.to_string())),
            other => Err(D::Error::custom(format!(
                "task id must be a string or number, got {other}"
            ))),
        }
    }
}

impl TaskId {
    /// Wraps a service-assigned identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task status as observed by polling.
///
/// Only `completed` and `failed` are terminal. Every other status string the
/// service reports is treated as pending, including `null` and non-string
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Queued or still processing.
    #[default]
    Pending,
    /// Finished with a payload.
    Completed,
    /// Finished without a payload.
    Failed,
}

impl TaskStatus {
    /// Maps a raw service status string.
    #[must_use]
    pub fn from_remote(status: &str) -> Self {
        match status {
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Pending,
        }
    }

    /// Returns true if the status is terminal.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Returns the status as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl From<String> for TaskStatus {
    fn from(status: String) -> Self {
        Self::from_remote(&status)
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw.as_str().map_or(Self::Pending, Self::from_remote))
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
