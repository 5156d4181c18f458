//! OnboardingState - the mirrored wizard state for one session.
//!
//! The remote agent holds the authoritative step and field state; this struct
//! is the local mirror handed to the UI. It has no persistence of its own and
//! is rebuilt each session from the profile item list plus a step counter.

use serde::{Deserialize, Serialize};

use crate::domain::onboarding::OnboardingStep;
use crate::domain::profile::{ItemType, ProfileItem};

/// One node in the confirmed-profile graph shown beside the chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileNode {
    pub label: String,
    pub node_type: ItemType,
    pub confirmed: bool,
}

/// The wizard state mirrored to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingState {
    pub current_step: OnboardingStep,
    pub trinity: Option<String>,
    pub employment_status: Option<String>,
    pub professional_vertical: Option<String>,
    pub location: Option<String>,
    pub role_preference: Option<String>,
    pub experience_level: Option<String>,
    pub profile_nodes: Vec<ProfileNode>,
}

impl OnboardingState {
    /// Rebuilds the state from the persisted step counter and item list.
    ///
    /// Field slots take the first item of their type (display label preferred);
    /// the node list mirrors every item in insertion order.
    pub fn rebuild(current_step: OnboardingStep, items: &[ProfileItem]) -> Self {
        let field = |ty: ItemType| {
            items
                .iter()
                .find(|i| i.item_type == ty)
                .map(|i| i.display_label().to_string())
        };

        let profile_nodes = items
            .iter()
            .map(|i| ProfileNode {
                label: i.display_label().to_string(),
                node_type: i.item_type.clone(),
                confirmed: i.confirmed,
            })
            .collect();

        Self {
            current_step,
            trinity: field(ItemType::Trinity),
            employment_status: field(ItemType::EmploymentStatus),
            professional_vertical: field(ItemType::ProfessionalVertical),
            location: field(ItemType::Location),
            role_preference: field(ItemType::RolePreference),
            experience_level: field(ItemType::ExperienceLevel),
            profile_nodes,
        }
    }

    /// Derived: the wizard is complete once past the last question step.
    pub fn is_complete(&self) -> bool {
        self.current_step.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(ty: ItemType, value: &str) -> ProfileItem {
        ProfileItem::new(ty, value).unwrap()
    }

    #[test]
    fn rebuild_from_empty_items_leaves_fields_unset() {
        let state = OnboardingState::rebuild(OnboardingStep::Goals, &[]);
        assert_eq!(state.current_step, OnboardingStep::Goals);
        assert!(state.trinity.is_none());
        assert!(state.profile_nodes.is_empty());
        assert!(!state.is_complete());
    }

    #[test]
    fn rebuild_fills_fields_from_items() {
        let items = vec![
            item(ItemType::Trinity, "Job Search"),
            item(ItemType::Location, "London"),
        ];
        let state = OnboardingState::rebuild(OnboardingStep::ProfessionalDomain, &items);
        assert_eq!(state.trinity.as_deref(), Some("Job Search"));
        assert_eq!(state.location.as_deref(), Some("London"));
        assert!(state.employment_status.is_none());
    }

    #[test]
    fn rebuild_mirrors_every_item_as_a_node_in_order() {
        let items = vec![
            item(ItemType::Skill, "Go").confirm(),
            item(ItemType::Skill, "Rust"),
        ];
        let state = OnboardingState::rebuild(OnboardingStep::Experience, &items);
        assert_eq!(state.profile_nodes.len(), 2);
        assert_eq!(state.profile_nodes[0].label, "Go");
        assert!(state.profile_nodes[0].confirmed);
        assert_eq!(state.profile_nodes[1].label, "Rust");
        assert!(!state.profile_nodes[1].confirmed);
    }

    #[test]
    fn field_slot_takes_first_item_of_type() {
        let items = vec![
            item(ItemType::Location, "London"),
            item(ItemType::Location, "Manchester"),
        ];
        let state = OnboardingState::rebuild(OnboardingStep::Location, &items);
        assert_eq!(state.location.as_deref(), Some("London"));
    }

    #[test]
    fn is_complete_derives_from_step() {
        let state = OnboardingState::rebuild(OnboardingStep::Complete, &[]);
        assert!(state.is_complete());
    }
}
