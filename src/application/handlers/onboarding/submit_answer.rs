//! SubmitAnswer - Command handler forwarding an answer to the agent runtime.
//!
//! An answer arrives as a quick-option selection, free text, or a voice
//! transcription; all three are appended to the agent session as a user chat
//! message. The agent decides whether the answer completes the step; the
//! handler only reports back whatever step the agent acknowledges.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::onboarding::OnboardingStep;
use crate::ports::{AgentGateway, ChatRole, MemoryStore};

use crate::application::handlers::transcript::{LogTranscriptCommand, LogTranscriptHandler};

/// Command carrying one user answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub user_id: UserId,
    pub text: String,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Result of submitting an answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    /// The step the agent reported after the message, when reachable.
    pub acknowledged_step: Option<OnboardingStep>,
}

/// Handler forwarding answers to the agent.
pub struct SubmitAnswerHandler {
    gateway: Arc<dyn AgentGateway>,
    transcripts: Arc<LogTranscriptHandler>,
}

impl SubmitAnswerHandler {
    pub fn new(gateway: Arc<dyn AgentGateway>, memory: Arc<dyn MemoryStore>) -> Self {
        Self {
            gateway,
            transcripts: Arc::new(LogTranscriptHandler::new(memory)),
        }
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<SubmitAnswerResult, DomainError> {
        if cmd.text.trim().is_empty() {
            return Err(DomainError::validation("text", "Answer cannot be empty"));
        }

        self.gateway
            .send_message(&cmd.user_id, ChatRole::User, &cmd.text)
            .await?;

        // Transcript logging is best-effort and gated; a failure never loses
        // the answer that was already delivered to the agent.
        let log = LogTranscriptCommand {
            user_id: Some(cmd.user_id.clone()),
            role: ChatRole::User,
            content: cmd.text.clone(),
            metadata: cmd.metadata.clone(),
        };
        if let Err(e) = self.transcripts.handle(log).await {
            tracing::warn!(user_id = %cmd.user_id, error = %e, "transcript logging failed");
        }

        let acknowledged_step = match self.gateway.fetch_state(&cmd.user_id).await {
            Ok(report) => Some(OnboardingStep::from_number(report.current_step)),
            Err(e) => {
                tracing::warn!(user_id = %cmd.user_id, error = %e, "agent state fetch failed after answer");
                None
            }
        };

        Ok(SubmitAnswerResult { acknowledged_step })
    }
}
