//! Grouping reducer for profile display.
//!
//! Folds a flat item list into display groups keyed by item type, plus the
//! five-field wizard checklist. Read-only: items are never mutated here;
//! edits and deletes go through the repository and a re-fetch.

use crate::domain::onboarding::OnboardingStep;
use crate::domain::profile::{ItemType, ProfileItem};

/// A display group: one item type and the items sharing it, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGroup<'a> {
    pub item_type: ItemType,
    pub items: Vec<&'a ProfileItem>,
}

/// One row of the wizard checklist.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistField<'a> {
    pub item_type: ItemType,
    pub step: OnboardingStep,
    pub item: Option<&'a ProfileItem>,
    pub status: FieldStatus,
}

/// Visual status of a checklist field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Answered,
    Current,
    Pending,
}

/// Cosmetic nudge shown under the profile panel. Display-only; nothing gates on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionHint {
    FreshStart,
    KeepGoing,
    LookingGood,
}

/// The grouped view of a profile item list.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupedProfile<'a> {
    /// No items yet: render the empty-state placeholder, not an error.
    Empty,
    Populated {
        groups: Vec<ItemGroup<'a>>,
        hint: CompletionHint,
    },
}

/// Groups items by type, preserving first-seen type order and insertion order
/// within each group. Idempotent: the same input always yields the same output.
pub fn group_items(items: &[ProfileItem]) -> GroupedProfile<'_> {
    if items.is_empty() {
        return GroupedProfile::Empty;
    }

    let mut groups: Vec<ItemGroup<'_>> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.item_type == item.item_type) {
            Some(group) => group.items.push(item),
            None => groups.push(ItemGroup {
                item_type: item.item_type.clone(),
                items: vec![item],
            }),
        }
    }

    GroupedProfile::Populated {
        groups,
        hint: completion_hint(items.len()),
    }
}

/// Builds the five-field wizard checklist against the current step.
pub fn wizard_checklist<'a>(
    items: &'a [ProfileItem],
    current_step: OnboardingStep,
) -> Vec<ChecklistField<'a>> {
    ItemType::wizard_fields()
        .iter()
        .map(|field_type| {
            let step = field_type
                .wizard_step()
                .expect("wizard_fields only contains step-mapped types");
            let item = items.iter().find(|i| &i.item_type == field_type);
            let status = if item.is_some() {
                FieldStatus::Answered
            } else if step == current_step {
                FieldStatus::Current
            } else {
                FieldStatus::Pending
            };
            ChecklistField {
                item_type: field_type.clone(),
                step,
                item,
                status,
            }
        })
        .collect()
}

fn completion_hint(count: usize) -> CompletionHint {
    match count {
        0 => CompletionHint::FreshStart,
        1..=2 => CompletionHint::KeepGoing,
        _ => CompletionHint::LookingGood,
    }
}

impl CompletionHint {
    /// Returns the canned message for this hint.
    pub fn message(&self) -> &'static str {
        match self {
            CompletionHint::FreshStart => "A fresh start! Answer the first question to begin.",
            CompletionHint::KeepGoing => "Keep going! A few more answers unlock better matches.",
            CompletionHint::LookingGood => "Looking good! Your profile is taking shape.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(item_type: ItemType, value: &str) -> ProfileItem {
        ProfileItem::new(item_type, value).unwrap()
    }

    #[test]
    fn empty_list_renders_empty_state_not_error() {
        assert_eq!(group_items(&[]), GroupedProfile::Empty);
    }

    #[test]
    fn shared_type_groups_together_in_insertion_order() {
        let items = vec![item(ItemType::Skill, "Go"), item(ItemType::Skill, "Rust")];
        let GroupedProfile::Populated { groups, .. } = group_items(&items) else {
            panic!("expected populated grouping");
        };

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].item_type, ItemType::Skill);
        let values: Vec<_> = groups[0].items.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, vec!["Go", "Rust"]);
    }

    #[test]
    fn group_order_follows_first_seen_type() {
        let items = vec![
            item(ItemType::Location, "London"),
            item(ItemType::Skill, "Go"),
            item(ItemType::Location, "Manchester"),
        ];
        let GroupedProfile::Populated { groups, .. } = group_items(&items) else {
            panic!("expected populated grouping");
        };

        assert_eq!(groups[0].item_type, ItemType::Location);
        assert_eq!(groups[1].item_type, ItemType::Skill);
        assert_eq!(groups[0].items.len(), 2);
    }

    #[test]
    fn grouping_is_idempotent() {
        let items = vec![
            item(ItemType::Trinity, "Job Search"),
            item(ItemType::Skill, "Go"),
            item(ItemType::Skill, "Rust"),
        ];
        assert_eq!(group_items(&items), group_items(&items));
    }

    #[test]
    fn unknown_item_type_groups_without_panicking() {
        let items = vec![item(ItemType::parse("certification"), "AWS SA Pro")];
        let GroupedProfile::Populated { groups, .. } = group_items(&items) else {
            panic!("expected populated grouping");
        };
        assert_eq!(groups[0].item_type.display().label, "Info");
    }

    #[test]
    fn hint_thresholds_are_display_only_counts() {
        let one = vec![item(ItemType::Trinity, "Job Search")];
        let GroupedProfile::Populated { hint, .. } = group_items(&one) else {
            panic!("expected populated grouping");
        };
        assert_eq!(hint, CompletionHint::KeepGoing);

        let three = vec![
            item(ItemType::Trinity, "Job Search"),
            item(ItemType::Skill, "Go"),
            item(ItemType::Skill, "Rust"),
        ];
        let GroupedProfile::Populated { hint, .. } = group_items(&three) else {
            panic!("expected populated grouping");
        };
        assert_eq!(hint, CompletionHint::LookingGood);
    }

    #[test]
    fn checklist_marks_answered_current_and_pending() {
        let items = vec![item(ItemType::Trinity, "Job Search")];
        let checklist = wizard_checklist(&items, OnboardingStep::EmploymentStatus);

        assert_eq!(checklist.len(), 5);
        assert_eq!(checklist[0].status, FieldStatus::Answered);
        assert_eq!(checklist[1].status, FieldStatus::Current);
        assert_eq!(checklist[2].status, FieldStatus::Pending);
        assert_eq!(checklist[0].item.unwrap().value, "Job Search");
    }

    #[test]
    fn checklist_on_complete_step_has_no_current_row() {
        let checklist = wizard_checklist(&[], OnboardingStep::Complete);
        assert!(checklist.iter().all(|f| f.status == FieldStatus::Pending));
    }
}
