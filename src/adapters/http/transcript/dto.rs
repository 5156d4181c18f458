//! HTTP DTOs for transcript endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::application::handlers::transcript::LogTranscriptOutcome;
use crate::ports::ChatRole;

/// Request to record one transcript line.
///
/// `userId` is optional: anonymous visitors chat too, their lines are just
/// not persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogTranscriptRequest {
    pub user_id: Option<String>,
    pub role: ChatRole,
    pub content: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Response reporting whether the line was recorded.
#[derive(Debug, Clone, Serialize)]
pub struct LogTranscriptResponse {
    pub outcome: &'static str,
}

impl From<LogTranscriptOutcome> for LogTranscriptResponse {
    fn from(outcome: LogTranscriptOutcome) -> Self {
        Self {
            outcome: match outcome {
                LogTranscriptOutcome::Recorded => "recorded",
                LogTranscriptOutcome::Skipped => "skipped",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_with_role() {
        let json = r#"{"userId": "usr_1", "role": "user", "content": "hello there"}"#;
        let req: LogTranscriptRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.role, ChatRole::User);
        assert_eq!(req.content, "hello there");
    }

    #[test]
    fn request_allows_missing_user() {
        let json = r#"{"role": "assistant", "content": "welcome"}"#;
        let req: LogTranscriptRequest = serde_json::from_str(json).unwrap();
        assert!(req.user_id.is_none());
    }

    #[test]
    fn outcome_maps_to_wire_words() {
        let response: LogTranscriptResponse = LogTranscriptOutcome::Skipped.into();
        assert_eq!(response.outcome, "skipped");
    }
}
