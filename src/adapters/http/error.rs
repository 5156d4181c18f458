//! HTTP error mapping shared by all endpoint modules.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Maps a domain error onto an HTTP response.
///
/// Gateway failures surface as 502 so callers can distinguish "the agent is
/// down" from "this service is broken"; nothing is silently swallowed.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::ItemNotFound | ErrorCode::ProfileNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat
        | ErrorCode::InvalidStateTransition => StatusCode::BAD_REQUEST,
        ErrorCode::NetworkFailure | ErrorCode::AgentUnavailable | ErrorCode::StaleAgentState => {
            StatusCode::BAD_GATEWAY
        }
        ErrorCode::OnboardingComplete => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = ErrorResponse {
        code: error.code.to_string(),
        message: error.message,
        details: None,
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = domain_error_response(DomainError::item_not_found("abc"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response =
            domain_error_response(DomainError::validation("value", "cannot be empty"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn gateway_failures_map_to_502() {
        let response = domain_error_response(DomainError::network("timed out"));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = domain_error_response(DomainError::new(
            ErrorCode::AgentUnavailable,
            "agent down",
        ));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn database_errors_map_to_500() {
        let response = domain_error_response(DomainError::new(
            ErrorCode::DatabaseError,
            "connection refused",
        ));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
