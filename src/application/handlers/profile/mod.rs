//! Profile item command and query handlers.

mod delete_item;
mod get_profile_summary;
mod list_items;
mod upsert_item;

pub use delete_item::{DeleteProfileItemCommand, DeleteProfileItemHandler, DeleteProfileItemResult};
pub use get_profile_summary::{
    ChecklistRow, GetProfileSummaryHandler, GetProfileSummaryQuery, GroupRow, ProfileSummaryView,
};
pub use list_items::{ListProfileItemsHandler, ListProfileItemsQuery};
pub use upsert_item::{
    UpsertProfileItemCommand, UpsertProfileItemHandler, UpsertProfileItemResult,
};
