//! GetProfileSummary - Query handler for the grouped profile panel.
//!
//! Reduces the flat item list into display groups and the five-field wizard
//! checklist. Read-only: nothing here mutates items or gates progression.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::onboarding::OnboardingStep;
use crate::domain::profile::{
    group_items, wizard_checklist, ChecklistField, CompletionHint, GroupedProfile, ItemGroup,
    ProfileItem,
};
use crate::ports::ProfileRepository;

/// Query for the grouped profile view.
#[derive(Debug, Clone)]
pub struct GetProfileSummaryQuery {
    pub user_id: UserId,
}

/// One checklist row, resolved to owned data.
#[derive(Debug, Clone)]
pub struct ChecklistRow {
    pub item_type: String,
    pub label: &'static str,
    pub icon: &'static str,
    pub step: u8,
    pub status: &'static str,
    pub value: Option<String>,
    pub confirmed: bool,
}

/// One display group, resolved to owned data.
#[derive(Debug, Clone)]
pub struct GroupRow {
    pub item_type: String,
    pub label: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub items: Vec<ProfileItem>,
}

/// The grouped profile panel.
#[derive(Debug, Clone)]
pub struct ProfileSummaryView {
    pub empty: bool,
    pub current_step: OnboardingStep,
    pub checklist: Vec<ChecklistRow>,
    pub groups: Vec<GroupRow>,
    pub hint: &'static str,
}

/// Handler for the grouped profile view.
pub struct GetProfileSummaryHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileSummaryHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetProfileSummaryQuery,
    ) -> Result<ProfileSummaryView, DomainError> {
        let items = self.repository.list_for_user(&query.user_id).await?;
        let current_step = self
            .repository
            .load_step(&query.user_id)
            .await?
            .unwrap_or(OnboardingStep::Goals);

        let checklist = wizard_checklist(&items, current_step)
            .into_iter()
            .map(checklist_row)
            .collect();

        let (groups, hint, empty) = match group_items(&items) {
            GroupedProfile::Empty => (Vec::new(), CompletionHint::FreshStart.message(), true),
            GroupedProfile::Populated { groups, hint } => (
                groups.into_iter().map(group_row).collect(),
                hint.message(),
                false,
            ),
        };

        Ok(ProfileSummaryView {
            empty,
            current_step,
            checklist,
            groups,
            hint,
        })
    }
}

fn checklist_row(field: ChecklistField<'_>) -> ChecklistRow {
    use crate::domain::profile::FieldStatus;

    let display = field.item_type.display();
    ChecklistRow {
        item_type: field.item_type.as_str().to_string(),
        label: display.label,
        icon: display.icon,
        step: field.step.number(),
        status: match field.status {
            FieldStatus::Answered => "answered",
            FieldStatus::Current => "current",
            FieldStatus::Pending => "pending",
        },
        value: field.item.map(|i| i.display_label().to_string()),
        confirmed: field.item.map(|i| i.confirmed).unwrap_or(false),
    }
}

fn group_row(group: ItemGroup<'_>) -> GroupRow {
    let display = group.item_type.display();
    GroupRow {
        item_type: group.item_type.as_str().to_string(),
        label: display.label,
        icon: display.icon,
        accent: display.accent,
        items: group.items.into_iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockProfileRepository;
    use crate::domain::profile::ItemType;

    fn test_user() -> UserId {
        UserId::new("usr_1").unwrap()
    }

    #[tokio::test]
    async fn test_empty_profile_renders_empty_state_not_error() {
        let repo = Arc::new(MockProfileRepository::new());
        let handler = GetProfileSummaryHandler::new(repo);

        let view = handler
            .handle(GetProfileSummaryQuery { user_id: test_user() })
            .await
            .unwrap();

        assert!(view.empty);
        assert!(view.groups.is_empty());
        assert_eq!(view.checklist.len(), 5);
        assert!(view.checklist.iter().all(|row| row.value.is_none()));
    }

    #[tokio::test]
    async fn test_shared_skill_type_groups_in_insertion_order() {
        let user = test_user();
        let items = vec![
            ProfileItem::new(ItemType::Skill, "Go").unwrap(),
            ProfileItem::new(ItemType::Skill, "Rust").unwrap(),
        ];
        let repo = Arc::new(MockProfileRepository::new().with_items(&user, items));
        let handler = GetProfileSummaryHandler::new(repo);

        let view = handler
            .handle(GetProfileSummaryQuery { user_id: user })
            .await
            .unwrap();

        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].item_type, "skill");
        let values: Vec<_> = view.groups[0].items.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, vec!["Go", "Rust"]);
    }

    #[tokio::test]
    async fn test_checklist_marks_current_step_from_counter() {
        let user = test_user();
        let items = vec![ProfileItem::new(ItemType::Trinity, "Job Search")
            .unwrap()
            .confirm()];
        let repo = Arc::new(
            MockProfileRepository::new()
                .with_items(&user, items)
                .with_step(&user, OnboardingStep::EmploymentStatus),
        );
        let handler = GetProfileSummaryHandler::new(repo);

        let view = handler
            .handle(GetProfileSummaryQuery { user_id: user })
            .await
            .unwrap();

        assert_eq!(view.checklist[0].status, "answered");
        assert!(view.checklist[0].confirmed);
        assert_eq!(view.checklist[1].status, "current");
        assert_eq!(view.checklist[2].status, "pending");
    }

    #[tokio::test]
    async fn test_unknown_item_type_gets_default_display() {
        let user = test_user();
        let items = vec![ProfileItem::new(ItemType::parse("certification"), "AWS").unwrap()];
        let repo = Arc::new(MockProfileRepository::new().with_items(&user, items));
        let handler = GetProfileSummaryHandler::new(repo);

        let view = handler
            .handle(GetProfileSummaryQuery { user_id: user })
            .await
            .unwrap();

        assert_eq!(view.groups[0].icon, "📌");
        assert_eq!(view.groups[0].label, "Info");
    }
}
