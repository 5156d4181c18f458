//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::profile::{
    DeleteProfileItemCommand, DeleteProfileItemHandler, GetProfileSummaryHandler,
    GetProfileSummaryQuery, ListProfileItemsHandler, ListProfileItemsQuery,
    UpsertProfileItemCommand, UpsertProfileItemHandler,
};
use crate::domain::foundation::{ProfileItemId, UserId};

use super::super::error::{domain_error_response, ErrorResponse};
use super::dto::{
    DeleteItemParams, DeleteItemResponse, ItemListResponse, ListItemsParams,
    ProfileSummaryResponse, UpsertItemRequest, UpsertItemResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProfileHandlers {
    upsert_handler: Arc<UpsertProfileItemHandler>,
    delete_handler: Arc<DeleteProfileItemHandler>,
    list_handler: Arc<ListProfileItemsHandler>,
    summary_handler: Arc<GetProfileSummaryHandler>,
}

impl ProfileHandlers {
    pub fn new(
        upsert_handler: Arc<UpsertProfileItemHandler>,
        delete_handler: Arc<DeleteProfileItemHandler>,
        list_handler: Arc<ListProfileItemsHandler>,
        summary_handler: Arc<GetProfileSummaryHandler>,
    ) -> Self {
        Self {
            upsert_handler,
            delete_handler,
            list_handler,
            summary_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/profile - Upsert one profile item
pub async fn upsert_item(
    State(handlers): State<ProfileHandlers>,
    Json(req): Json<UpsertItemRequest>,
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

    let cmd = UpsertProfileItemCommand {
        user_id,
        item_type: req.item_type,
        value: req.value,
        metadata: req.metadata,
        confirmed: req.confirmed,
    };

    match handlers.upsert_handler.handle(cmd).await {
        Ok(result) => {
            let response = UpsertItemResponse {
                success: true,
                item: result.item.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/profile - List a user's profile items
pub async fn list_items(
    State(handlers): State<ProfileHandlers>,
    Query(params): Query<ListItemsParams>,
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

    match handlers
        .list_handler
        .handle(ListProfileItemsQuery { user_id })
        .await
    {
        Ok(items) => {
            let response = ItemListResponse {
                items: items.into_iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/profile/summary - Grouped profile panel with wizard checklist
pub async fn get_summary(
    State(handlers): State<ProfileHandlers>,
    Query(params): Query<ListItemsParams>,
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

    match handlers
        .summary_handler
        .handle(GetProfileSummaryQuery { user_id })
        .await
    {
        Ok(view) => {
            let response: ProfileSummaryResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/profile - Delete one profile item (id and userId as query params)
pub async fn delete_item(
    State(handlers): State<ProfileHandlers>,
    Query(params): Query<DeleteItemParams>,
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
    let item_id = match params.id.parse::<ProfileItemId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid item ID")),
            )
                .into_response()
        }
    };

    let cmd = DeleteProfileItemCommand { user_id, item_id };

    match handlers.delete_handler.handle(cmd).await {
        Ok(result) => {
            let response = DeleteItemResponse {
                success: true,
                deleted_id: result.deleted_id.to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
