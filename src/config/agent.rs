//! Remote agent runtime configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the remote conversational agent runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Base URL of the agent runtime
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key for the agent runtime, if it requires one
    pub api_key: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// How long a fetched agent state stays trustworthy before the service
    /// falls back to the last persisted step
    #[serde(default = "default_staleness_tolerance")]
    pub staleness_tolerance_secs: i64,
}

impl AgentConfig {
    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate agent configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidAgentUrl);
        }
        if self.staleness_tolerance_secs <= 0 {
            return Err(ValidationError::InvalidStalenessTolerance);
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            staleness_tolerance_secs: default_staleness_tolerance(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_max_retries() -> u32 {
    2
}

fn default_staleness_tolerance() -> i64 {
    30
}
