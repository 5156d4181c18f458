//! HTTP routes for onboarding endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_state, submit_answer, OnboardingHandlers};

/// Creates the onboarding router with all endpoints.
pub fn onboarding_routes(handlers: OnboardingHandlers) -> Router {
    Router::new()
        .route("/state", get(get_state))
        .route("/answer", post(submit_answer))
        .with_state(handlers)
}
