//! HTTP handlers for onboarding endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::onboarding::{
    GetOnboardingStateHandler, GetOnboardingStateQuery, SubmitAnswerCommand, SubmitAnswerHandler,
};
use crate::domain::foundation::UserId;

use super::super::error::{domain_error_response, ErrorResponse};
use super::dto::{
    OnboardingViewResponse, StateParams, SubmitAnswerRequest, SubmitAnswerResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct OnboardingHandlers {
    state_handler: Arc<GetOnboardingStateHandler>,
    answer_handler: Arc<SubmitAnswerHandler>,
}

impl OnboardingHandlers {
    pub fn new(
        state_handler: Arc<GetOnboardingStateHandler>,
        answer_handler: Arc<SubmitAnswerHandler>,
    ) -> Self {
        Self {
            state_handler,
            answer_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/onboarding/state - Assemble the wizard view for a session
pub async fn get_state(
    State(handlers): State<OnboardingHandlers>,
    Query(params): Query<StateParams>,
) -> Response {
    let user_id = match UserId::new(params.user_id) {
        Ok(id) => id,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let query = GetOnboardingStateQuery {
        user_id,
        first_name: params.first_name,
    };

    match handlers.state_handler.handle(query).await {
        Ok(view) => {
            let response: OnboardingViewResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/onboarding/answer - Forward one answer to the agent
pub async fn submit_answer(
    State(handlers): State<OnboardingHandlers>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Response {
    let user_id = match UserId::new(req.user_id) {
        Ok(id) => id,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let cmd = SubmitAnswerCommand {
        user_id,
        text: req.text,
        metadata: req.metadata,
    };

    match handlers.answer_handler.handle(cmd).await {
        Ok(result) => {
            let response = SubmitAnswerResponse {
                success: true,
                acknowledged_step: result.acknowledged_step.map(|s| s.number()),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
