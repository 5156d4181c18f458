//! Conversation-memory service configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the hosted conversation-memory service.
///
/// Optional: when no API key is configured the memory adapter becomes a
/// logged no-op, matching how the platform behaves without the service.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Base URL of the memory service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key; absent disables the integration
    pub api_key: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl MemoryConfig {
    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when the integration is configured.
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate memory configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidMemoryUrl);
        }
        Ok(())
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.getzep.com".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_config_disabled_without_key() {
        let config = MemoryConfig::default();
        assert!(!config.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = MemoryConfig {
            base_url: "memory.local".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
