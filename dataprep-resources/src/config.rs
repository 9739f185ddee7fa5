//! Remote client configuration.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Default per-call attempt timeout.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(28);

/// Default service endpoint: a local emulator or signing proxy.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:4566";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("attempt timeout must be greater than zero")]
    ZeroTimeout,

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Settings for the process-wide remote client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub attempt_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            user_agent: format!("dataprep-resources/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Check the settings and return the parsed endpoint.
    pub fn validate(&self) -> Result<Url, ConfigError> {
        if self.attempt_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };

        let url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme {}", other))),
        }
        if url.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }
        Ok(url)
    }
}
