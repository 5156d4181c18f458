//! HTTP DTOs for onboarding endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::application::handlers::onboarding::OnboardingView;
use crate::domain::onboarding::{OnboardingState, ProgressView};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for the state endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateParams {
    pub user_id: String,
    #[serde(default = "default_first_name")]
    pub first_name: String,
}

fn default_first_name() -> String {
    "there".to_string()
}

/// Request carrying one answer (quick option, free text, or voice transcript).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub user_id: String,
    pub text: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full wizard view for one session.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingViewResponse {
    pub current_step: u8,
    pub is_complete: bool,
    pub state: OnboardingState,
    pub progress: ProgressView,
    pub step_title: String,
    pub step_message: String,
    pub quick_options: Vec<String>,
    pub greeting: String,
    pub instructions: String,
    pub agent_synced: bool,
}

impl From<OnboardingView> for OnboardingViewResponse {
    fn from(view: OnboardingView) -> Self {
        Self {
            current_step: view.state.current_step.number(),
            is_complete: view.state.is_complete(),
            progress: view.progress,
            step_title: view.step_title.to_string(),
            step_message: view.step_message.to_string(),
            quick_options: view.quick_options,
            greeting: view.greeting,
            instructions: view.agent_instructions,
            agent_synced: view.agent_synced,
            state: view.state,
        }
    }
}

/// Response after submitting an answer.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledged_step: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_params_default_the_first_name() {
        let params: StateParams = serde_json::from_str(r#"{"userId": "usr_1"}"#).unwrap();
        assert_eq!(params.first_name, "there");
    }

    #[test]
    fn answer_request_deserializes_camel_case() {
        let json = r#"{"userId": "usr_1", "text": "Job Search"}"#;
        let req: SubmitAnswerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_id, "usr_1");
        assert_eq!(req.text, "Job Search");
    }

    #[test]
    fn answer_response_omits_absent_step() {
        let response = SubmitAnswerResponse {
            success: true,
            acknowledged_step: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("acknowledged_step"));
    }
}
