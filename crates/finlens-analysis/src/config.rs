//! Analysis client configuration.

use std::time::Duration;

/// Default analysis service address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Configuration for submitting and polling analysis tasks.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Base URL of the analysis service.
    pub base_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// Delay between status polls.
    pub poll_interval: Duration,
    /// Maximum number of status polls, if bounded.
    ///
    /// An accepted task is always polled at least once, so `Some(0)` behaves
    /// like `Some(1)`.
    pub max_poll_attempts: Option<u32>,
    /// Maximum time spent polling one task, if bounded.
    pub poll_deadline: Option<Duration>,
    /// Substitute a canned result when submission cannot reach the service.
    pub mock_fallback: bool,
    /// Simulated latency before a canned result is returned.
    pub mock_delay: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_secs(2),
            max_poll_attempts: Some(150),
            poll_deadline: Some(Duration::from_secs(600)),
            mock_fallback: true,
            mock_delay: Duration::from_secs(3),
            user_agent: format!("finlens/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AnalysisConfig {
    /// Sets the service base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the delay between status polls.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the maximum number of status polls (`None` for unbounded).
    ///
    /// `Some(0)` is raised to `Some(1)`: an accepted task gets one poll.
    #[must_use]
    pub const fn with_max_poll_attempts(mut self, attempts: Option<u32>) -> Self {
        self.max_poll_attempts = match attempts {
            Some(0) => Some(1),
            other => other,
        };
        self
    }

    /// Sets the polling deadline (`None` for unbounded).
    #[must_use]
    pub const fn with_poll_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.poll_deadline = deadline;
        self
    }

    /// Enables or disables the canned-result fallback.
    #[must_use]
    pub const fn with_mock_fallback(mut self, enabled: bool) -> Self {
        self.mock_fallback = enabled;
        self
    }

    /// Sets the simulated latency of the canned-result fallback.
    #[must_use]
    pub const fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = delay;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AnalysisConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.mock_delay, Duration::from_secs(3));
        assert_eq!(config.max_poll_attempts, Some(150));
        assert!(config.mock_fallback);
        assert!(config.user_agent.starts_with("finlens/"));
    }

    #[test]
    fn test_zero_max_poll_attempts_means_one() {
        let config = AnalysisConfig::default().with_max_poll_attempts(Some(0));
        assert_eq!(config.max_poll_attempts, Some(1));

        let config = config.with_max_poll_attempts(None);
        assert_eq!(config.max_poll_attempts, None);
    }

    #[test]
    fn test_config_builders() {
        let config = AnalysisConfig::default()
            .with_base_url("http://analysis.local:9000")
            .with_poll_interval(Duration::from_millis(250))
            .with_max_poll_attempts(None)
            .with_mock_fallback(false);

        assert_eq!(config.base_url, "http://analysis.local:9000");
        assert_eq!(config.poll_interval, Duration::from_millis(250));
        assert!(config.max_poll_attempts.is_none());
        assert!(!config.mock_fallback);
    }
}
