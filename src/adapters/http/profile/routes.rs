//! HTTP routes for profile endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{delete_item, get_summary, list_items, upsert_item, ProfileHandlers};

/// Creates the profile router with all endpoints.
pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/", post(upsert_item))
        .route("/", get(list_items))
        .route("/", delete(delete_item))
        .route("/summary", get(get_summary))
        .with_state(handlers)
}
