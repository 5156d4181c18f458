//! LogTranscript - Command handler for conversation transcript lines.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{ChatRole, MemoryStore};

/// Minimum content length (in characters) worth recording. Shorter fragments
/// are voice-transcription noise ("um", "ok") and are dropped.
const MIN_CONTENT_CHARS: usize = 6;

/// Command to record one transcript line.
#[derive(Debug, Clone)]
pub struct LogTranscriptCommand {
    pub user_id: Option<UserId>,
    pub role: ChatRole,
    pub content: String,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Whether the line was recorded or filtered by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTranscriptOutcome {
    Recorded,
    Skipped,
}

/// Handler for transcript logging.
///
/// Lines are only recorded for identified users with content longer than five
/// characters; everything else is skipped without error.
pub struct LogTranscriptHandler {
    memory: Arc<dyn MemoryStore>,
}

impl LogTranscriptHandler {
    pub fn new(memory: Arc<dyn MemoryStore>) -> Self {
        Self { memory }
    }

    pub async fn handle(
        &self,
        cmd: LogTranscriptCommand,
    ) -> Result<LogTranscriptOutcome, DomainError> {
        let Some(user_id) = cmd.user_id else {
            return Ok(LogTranscriptOutcome::Skipped);
        };
        if cmd.content.chars().count() < MIN_CONTENT_CHARS {
            return Ok(LogTranscriptOutcome::Skipped);
        }

        self.memory
            .record_transcript(&user_id, cmd.role, &cmd.content, &cmd.metadata)
            .await?;
        Ok(LogTranscriptOutcome::Recorded)
    }
}
