//! HTTP routes for transcript endpoints.

use axum::{routing::post, Router};

use super::handlers::{log_transcript, TranscriptHandlers};

/// Creates the transcript router.
pub fn transcript_routes(handlers: TranscriptHandlers) -> Router {
    Router::new()
        .route("/", post(log_transcript))
        .with_state(handlers)
}
