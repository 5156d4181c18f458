//! No-op memory store used when the integration is not configured.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{ChatRole, MemoryStore};

/// Discards everything, logging at debug so local runs stay inspectable.
pub struct NoopMemoryStore;

#[async_trait]
impl MemoryStore for NoopMemoryStore {
    async fn record_transcript(
        &self,
        user_id: &UserId,
        role: ChatRole,
        content: &str,
        _metadata: &HashMap<String, serde_json::Value>,
    ) -> Result<(), DomainError> {
        tracing::debug!(user_id = %user_id, ?role, content, "memory disabled, transcript dropped");
        Ok(())
    }

    async fn record_fact(&self, user_id: &UserId, fact: &str) -> Result<(), DomainError> {
        tracing::debug!(user_id = %user_id, fact, "memory disabled, fact dropped");
        Ok(())
    }
}
