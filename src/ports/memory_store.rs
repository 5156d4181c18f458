//! MemoryStore port for the external conversation-memory service.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::agent_gateway::ChatRole;

/// Sink for conversation transcripts and profile facts.
///
/// Backed by a hosted memory service the agent reads from. Calls are
/// best-effort from the caller's point of view, but the port still returns
/// `Result` so failures can be logged instead of silently vanishing.
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Records one transcript line.
    async fn record_transcript(
        &self,
        user_id: &UserId,
        role: ChatRole,
        content: &str,
        metadata: &HashMap<String, serde_json::Value>,
    ) -> Result<(), DomainError>;

    /// Records a natural-language fact derived from a profile item.
    async fn record_fact(&self, user_id: &UserId, fact: &str) -> Result<(), DomainError>;
}
