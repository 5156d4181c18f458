//! HTTP handlers for transcript endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::transcript::{LogTranscriptCommand, LogTranscriptHandler};
use crate::domain::foundation::UserId;

use super::super::error::{domain_error_response, ErrorResponse};
use super::dto::{LogTranscriptRequest, LogTranscriptResponse};

#[derive(Clone)]
pub struct TranscriptHandlers {
    log_handler: Arc<LogTranscriptHandler>,
}

impl TranscriptHandlers {
    pub fn new(log_handler: Arc<LogTranscriptHandler>) -> Self {
        Self { log_handler }
    }
}

/// POST /api/transcripts - Record one transcript line
pub async fn log_transcript(
    State(handlers): State<TranscriptHandlers>,
    Json(req): Json<LogTranscriptRequest>,
) -> Response {
    let user_id = match req.user_id {
        Some(raw) => match UserId::new(raw) {
            Ok(id) => Some(id),
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(e.to_string())),
                )
                    .into_response()
            }
        },
        None => None,
    };

    let cmd = LogTranscriptCommand {
        user_id,
        role: req.role,
        content: req.content,
        metadata: req.metadata,
    };

    match handlers.log_handler.handle(cmd).await {
        Ok(outcome) => {
            let response: LogTranscriptResponse = outcome.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
