//! AgentGateway port for the remote conversational agent runtime.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, UserId};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// The step/field state the agent runtime reports for a session.
///
/// `current_step` is the raw number as reported; clamping and the monotonic
/// guard are applied by the domain mirror, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStateReport {
    pub current_step: i64,
    #[serde(default)]
    pub session_active: bool,
}

/// Boundary to the remotely-hosted conversational agent.
///
/// The agent is the single writer of step progression: answers are appended
/// as chat messages, and state flows back only through `fetch_state`.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Appends a chat message to the user's agent session.
    async fn send_message(
        &self,
        user_id: &UserId,
        role: ChatRole,
        text: &str,
    ) -> Result<(), DomainError>;

    /// Fetches the agent's current view of the session state.
    async fn fetch_state(&self, user_id: &UserId) -> Result<AgentStateReport, DomainError>;
}
