//! Profile domain - typed answer items and their display reduction.

mod grouping;
mod item;

pub use grouping::{
    group_items, wizard_checklist, ChecklistField, CompletionHint, FieldStatus, GroupedProfile,
    ItemGroup,
};
pub use item::{ItemDisplay, ItemType, ProfileItem};
