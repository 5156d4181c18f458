//! HTTP adapter for the remote conversational agent runtime.
//!
//! Speaks the agent runtime's session API: messages are POSTed onto the
//! session, state is polled with a GET. Transient failures are retried with
//! exponential backoff before surfacing as gateway errors.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{AgentGateway, AgentStateReport, ChatRole};

/// Configuration for the agent gateway.
#[derive(Debug, Clone)]
pub struct AgentGatewayConfig {
    /// Base URL of the agent runtime.
    pub base_url: String,
    /// API key, if the runtime requires one.
    api_key: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl AgentGatewayConfig {
    /// Creates a new configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(15),
            max_retries: 2,
        }
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: Secret<String>) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

#[derive(Serialize)]
struct OutgoingMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Agent runtime gateway over HTTP.
pub struct HttpAgentGateway {
    config: AgentGatewayConfig,
    client: Client,
}

impl HttpAgentGateway {
    /// Creates a new gateway with the given configuration.
    pub fn new(config: AgentGatewayConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn messages_url(&self, user_id: &UserId) -> String {
        format!("{}/sessions/{}/messages", self.config.base_url, user_id)
    }

    fn state_url(&self, user_id: &UserId) -> String {
        format!("{}/sessions/{}/state", self.config.base_url, user_id)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => req.bearer_auth(key.expose_secret()),
            None => req,
        }
    }

    /// Runs a request with retries on transport errors and 5xx responses.
    async fn with_retries<F, Fut>(&self, mut attempt_fn: F) -> Result<reqwest::Response, DomainError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                sleep(Duration::from_millis(200 * 2u64.pow(attempt - 1))).await;
            }

            match attempt_fn().await {
                Ok(response) if response.status().is_server_error() => {
                    last_error = Some(DomainError::new(
                        ErrorCode::AgentUnavailable,
                        format!("Agent runtime returned {}", response.status()),
                    ));
                }
                Ok(response) if !response.status().is_success() => {
                    return Err(DomainError::new(
                        ErrorCode::AgentUnavailable,
                        format!("Agent runtime returned {}", response.status()),
                    ));
                }
                Ok(response) => return Ok(response),
                Err(e) => last_error = Some(DomainError::network(e)),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "retry loop without attempts")
        }))
    }
}

#[async_trait]
impl AgentGateway for HttpAgentGateway {
    async fn send_message(
        &self,
        user_id: &UserId,
        role: ChatRole,
        text: &str,
    ) -> Result<(), DomainError> {
        let role = match role {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::System => "system",
        };
        let url = self.messages_url(user_id);

        self.with_retries(|| {
            self.authorize(self.client.post(&url))
                .json(&OutgoingMessage { role, content: text })
                .send()
        })
        .await?;

        Ok(())
    }

    async fn fetch_state(&self, user_id: &UserId) -> Result<AgentStateReport, DomainError> {
        let url = self.state_url(user_id);

        let response = self
            .with_retries(|| self.authorize(self.client.get(&url)).send())
            .await?;

        response.json::<AgentStateReport>().await.map_err(|e| {
            DomainError::new(
                ErrorCode::AgentUnavailable,
                format!("Malformed agent state payload: {}", e),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_sets_fields() {
        let config = AgentGatewayConfig::new("http://localhost:8000")
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(4);

        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 4);
    }

    #[test]
    fn urls_embed_the_session_id() {
        let gateway = HttpAgentGateway::new(AgentGatewayConfig::new("http://agent"));
        let user = UserId::new("usr_42").unwrap();

        assert_eq!(gateway.messages_url(&user), "http://agent/sessions/usr_42/messages");
        assert_eq!(gateway.state_url(&user), "http://agent/sessions/usr_42/state");
    }
}
