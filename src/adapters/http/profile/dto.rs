//! HTTP DTOs for profile endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::profile::{ItemType, ProfileItem};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to upsert one profile item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertItemRequest {
    pub user_id: String,
    pub item_type: ItemType,
    pub value: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub confirmed: bool,
}

/// Query parameters identifying the owner for a list request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsParams {
    pub user_id: String,
}

/// Query parameters identifying one item to delete.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemParams {
    pub id: String,
    pub user_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One profile item as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileItemResponse {
    pub id: String,
    pub item_type: ItemType,
    pub value: String,
    pub metadata: HashMap<String, serde_json::Value>,
    pub confirmed: bool,
}

impl From<ProfileItem> for ProfileItemResponse {
    fn from(item: ProfileItem) -> Self {
        Self {
            id: item.id.to_string(),
            item_type: item.item_type,
            value: item.value,
            metadata: item.metadata,
            confirmed: item.confirmed,
        }
    }
}

/// Response for the item list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ItemListResponse {
    pub items: Vec<ProfileItemResponse>,
}

/// Response for a successful upsert.
#[derive(Debug, Clone, Serialize)]
pub struct UpsertItemResponse {
    pub success: bool,
    pub item: ProfileItemResponse,
}

/// Response for a successful delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteItemResponse {
    pub success: bool,
    pub deleted_id: String,
}

/// One wizard checklist row in the summary response.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistRowResponse {
    pub item_type: String,
    pub label: &'static str,
    pub icon: &'static str,
    pub step: u8,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub confirmed: bool,
}

impl From<crate::application::handlers::profile::ChecklistRow> for ChecklistRowResponse {
    fn from(row: crate::application::handlers::profile::ChecklistRow) -> Self {
        Self {
            item_type: row.item_type,
            label: row.label,
            icon: row.icon,
            step: row.step,
            status: row.status,
            value: row.value,
            confirmed: row.confirmed,
        }
    }
}

/// One display group in the summary response.
#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub item_type: String,
    pub label: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub items: Vec<ProfileItemResponse>,
}

impl From<crate::application::handlers::profile::GroupRow> for GroupResponse {
    fn from(row: crate::application::handlers::profile::GroupRow) -> Self {
        Self {
            item_type: row.item_type,
            label: row.label,
            icon: row.icon,
            accent: row.accent,
            items: row.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response for the grouped profile summary endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummaryResponse {
    pub empty: bool,
    pub current_step: u8,
    pub checklist: Vec<ChecklistRowResponse>,
    pub groups: Vec<GroupResponse>,
    pub hint: &'static str,
}

impl From<crate::application::handlers::profile::ProfileSummaryView> for ProfileSummaryResponse {
    fn from(view: crate::application::handlers::profile::ProfileSummaryView) -> Self {
        Self {
            empty: view.empty,
            current_step: view.current_step.number(),
            checklist: view.checklist.into_iter().map(Into::into).collect(),
            groups: view.groups.into_iter().map(Into::into).collect(),
            hint: view.hint,
        }
    }
}
