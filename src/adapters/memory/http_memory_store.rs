//! HTTP adapter for the hosted conversation-memory service.
//!
//! Transcript lines and profile facts are pushed as messages so the service's
//! own fact extraction can index them for the agent.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{ChatRole, MemoryStore};

/// Configuration for the memory store adapter.
#[derive(Debug, Clone)]
pub struct MemoryStoreConfig {
    pub base_url: String,
    api_key: Secret<String>,
    pub timeout: Duration,
}

impl MemoryStoreConfig {
    /// Creates a new configuration.
    pub fn new(base_url: impl Into<String>, api_key: Secret<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
struct MemoryMessage<'a> {
    role: &'static str,
    content: &'a str,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    metadata: HashMap<String, serde_json::Value>,
}

#[derive(Serialize)]
struct MemoryPayload<'a> {
    messages: Vec<MemoryMessage<'a>>,
}

/// Memory service client over HTTP.
pub struct HttpMemoryStore {
    config: MemoryStoreConfig,
    client: Client,
}

impl HttpMemoryStore {
    /// Creates a new memory store client.
    pub fn new(config: MemoryStoreConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn memory_url(&self, user_id: &UserId) -> String {
        format!("{}/api/v2/users/{}/memory", self.config.base_url, user_id)
    }

    async fn push(&self, user_id: &UserId, payload: &MemoryPayload<'_>) -> Result<(), DomainError> {
        let response = self
            .client
            .post(self.memory_url(user_id))
            .header(
                "Authorization",
                format!("Api-Key {}", self.config.api_key.expose_secret()),
            )
            .json(payload)
            .send()
            .await
            .map_err(DomainError::network)?;

        if !response.status().is_success() {
            return Err(DomainError::new(
                ErrorCode::NetworkFailure,
                format!("Memory service returned {}", response.status()),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MemoryStore for HttpMemoryStore {
    async fn record_transcript(
        &self,
        user_id: &UserId,
        role: ChatRole,
        content: &str,
        metadata: &HashMap<String, serde_json::Value>,
    ) -> Result<(), DomainError> {
        let role = match role {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::System => "system",
        };
        let payload = MemoryPayload {
            messages: vec![MemoryMessage {
                role,
                content,
                metadata: metadata.clone(),
            }],
        };
        self.push(user_id, &payload).await
    }

    async fn record_fact(&self, user_id: &UserId, fact: &str) -> Result<(), DomainError> {
        // Facts ride in as system messages to trigger fact extraction.
        let payload = MemoryPayload {
            messages: vec![MemoryMessage {
                role: "system",
                content: fact,
                metadata: HashMap::new(),
            }],
        };
        self.push(user_id, &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_url_embeds_user_id() {
        let config = MemoryStoreConfig::new("https://api.getzep.com", Secret::new("k".into()));
        let store = HttpMemoryStore::new(config);
        let user = UserId::new("usr_7").unwrap();

        assert_eq!(
            store.memory_url(&user),
            "https://api.getzep.com/api/v2/users/usr_7/memory"
        );
    }
}
