//! ProfileItem entity and the item type vocabulary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::{ProfileItemId, Timestamp, ValidationError};
use crate::domain::onboarding::OnboardingStep;

/// The kinds of facts a profile can hold.
///
/// The first five map one-to-one onto wizard steps; the rest are collected
/// opportunistically during conversation. Unknown strings are preserved as
/// `Other` so an older client never chokes on a type added by the agent later.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemType {
    Trinity,
    EmploymentStatus,
    ProfessionalVertical,
    Location,
    RolePreference,
    ExperienceLevel,
    Skill,
    Company,
    WorkArrangement,
    SalaryExpectation,
    Other(String),
}

impl ItemType {
    /// Returns the wire name of this type.
    pub fn as_str(&self) -> &str {
        match self {
            ItemType::Trinity => "trinity",
            ItemType::EmploymentStatus => "employment_status",
            ItemType::ProfessionalVertical => "professional_vertical",
            ItemType::Location => "location",
            ItemType::RolePreference => "role_preference",
            ItemType::ExperienceLevel => "experience_level",
            ItemType::Skill => "skill",
            ItemType::Company => "company",
            ItemType::WorkArrangement => "work_arrangement",
            ItemType::SalaryExpectation => "salary_expectation",
            ItemType::Other(s) => s,
        }
    }

    /// Parses a wire name. Never fails: unrecognized names become `Other`.
    pub fn parse(s: &str) -> ItemType {
        match s {
            "trinity" => ItemType::Trinity,
            "employment_status" => ItemType::EmploymentStatus,
            "professional_vertical" => ItemType::ProfessionalVertical,
            "location" => ItemType::Location,
            "role_preference" => ItemType::RolePreference,
            "experience_level" => ItemType::ExperienceLevel,
            "skill" => ItemType::Skill,
            "company" => ItemType::Company,
            "work_arrangement" => ItemType::WorkArrangement,
            "salary_expectation" => ItemType::SalaryExpectation,
            other => ItemType::Other(other.to_string()),
        }
    }

    /// Returns the wizard step this type answers, if it is a step-mapped field.
    pub fn wizard_step(&self) -> Option<OnboardingStep> {
        match self {
            ItemType::Trinity => Some(OnboardingStep::Goals),
            ItemType::EmploymentStatus => Some(OnboardingStep::EmploymentStatus),
            ItemType::ProfessionalVertical => Some(OnboardingStep::ProfessionalDomain),
            ItemType::Location => Some(OnboardingStep::Location),
            ItemType::RolePreference => Some(OnboardingStep::Experience),
            _ => None,
        }
    }

    /// Returns the five step-mapped types in wizard order.
    pub fn wizard_fields() -> &'static [ItemType] {
        &[
            ItemType::Trinity,
            ItemType::EmploymentStatus,
            ItemType::ProfessionalVertical,
            ItemType::Location,
            ItemType::RolePreference,
        ]
    }

    /// Returns the display configuration for this type.
    ///
    /// Unrecognized types fall back to a generic pin rather than erroring.
    pub fn display(&self) -> ItemDisplay {
        match self {
            ItemType::Trinity => ItemDisplay::new("🎯", "Goal", "amber"),
            ItemType::EmploymentStatus => ItemDisplay::new("📋", "Status", "blue"),
            ItemType::ProfessionalVertical => ItemDisplay::new("💼", "Domain", "purple"),
            ItemType::Location => ItemDisplay::new("📍", "Location", "green"),
            ItemType::RolePreference => ItemDisplay::new("🎯", "Target Role", "pink"),
            ItemType::ExperienceLevel => ItemDisplay::new("⭐", "Level", "yellow"),
            ItemType::Skill => ItemDisplay::new("⚡", "Skill", "cyan"),
            ItemType::Company => ItemDisplay::new("🏢", "Company", "orange"),
            ItemType::WorkArrangement => ItemDisplay::new("🏠", "Work Style", "indigo"),
            ItemType::SalaryExpectation => ItemDisplay::new("💰", "Day Rate", "emerald"),
            ItemType::Other(_) => ItemDisplay::new("📌", "Info", "gray"),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ItemType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ItemType::parse(&s))
    }
}

/// Presentation attributes for one item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDisplay {
    pub icon: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

impl ItemDisplay {
    fn new(icon: &'static str, label: &'static str, accent: &'static str) -> Self {
        Self { icon, label, accent }
    }
}

/// One typed fact in a user's profile.
///
/// Created by the remote agent's tool calls or by direct user edits; multiple
/// items may share an `item_type` (e.g. several skills). Insertion order is
/// preserved by `created_at` and matters only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileItem {
    pub id: ProfileItemId,
    pub item_type: ItemType,
    pub value: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub confirmed: bool,
    pub created_at: Timestamp,
}

impl ProfileItem {
    /// Creates a new unconfirmed item, rejecting empty values.
    pub fn new(item_type: ItemType, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("value"));
        }
        Ok(Self {
            id: ProfileItemId::new(),
            item_type,
            value,
            metadata: HashMap::new(),
            confirmed: false,
            created_at: Timestamp::now(),
        })
    }

    /// Marks the item as agent-confirmed.
    pub fn confirm(mut self) -> Self {
        self.confirmed = true;
        self
    }

    /// Attaches a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Returns the text shown for this item: the metadata `label` when the
    /// agent supplied a prettier one, otherwise the raw value.
    pub fn display_label(&self) -> &str {
        self.metadata
            .get("label")
            .and_then(|v| v.as_str())
            .unwrap_or(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_known_types() {
        for ty in [
            ItemType::Trinity,
            ItemType::EmploymentStatus,
            ItemType::ProfessionalVertical,
            ItemType::Location,
            ItemType::RolePreference,
            ItemType::ExperienceLevel,
            ItemType::Skill,
            ItemType::Company,
            ItemType::WorkArrangement,
            ItemType::SalaryExpectation,
        ] {
            assert_eq!(ItemType::parse(ty.as_str()), ty);
        }
    }

    #[test]
    fn parse_preserves_unknown_types() {
        let ty = ItemType::parse("certification");
        assert_eq!(ty, ItemType::Other("certification".to_string()));
        assert_eq!(ty.as_str(), "certification");
    }

    #[test]
    fn unknown_type_gets_default_display_instead_of_error() {
        let display = ItemType::parse("certification").display();
        assert_eq!(display.icon, "📌");
        assert_eq!(display.label, "Info");
    }

    #[test]
    fn wizard_fields_map_to_steps_in_order() {
        let steps: Vec<_> = ItemType::wizard_fields()
            .iter()
            .map(|t| t.wizard_step().unwrap().number())
            .collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn non_wizard_types_have_no_step() {
        assert_eq!(ItemType::Skill.wizard_step(), None);
        assert_eq!(ItemType::parse("certification").wizard_step(), None);
    }

    #[test]
    fn item_type_serializes_as_plain_string() {
        let json = serde_json::to_string(&ItemType::SalaryExpectation).unwrap();
        assert_eq!(json, "\"salary_expectation\"");

        let ty: ItemType = serde_json::from_str("\"skill\"").unwrap();
        assert_eq!(ty, ItemType::Skill);
    }

    #[test]
    fn new_item_rejects_empty_value() {
        assert!(ProfileItem::new(ItemType::Skill, "").is_err());
        assert!(ProfileItem::new(ItemType::Skill, "  ").is_err());
    }

    #[test]
    fn display_label_prefers_metadata_label() {
        let item = ProfileItem::new(ItemType::Location, "london")
            .unwrap()
            .with_metadata("label", serde_json::json!("London, UK"));
        assert_eq!(item.display_label(), "London, UK");
    }

    #[test]
    fn display_label_falls_back_to_value() {
        let item = ProfileItem::new(ItemType::Skill, "Rust").unwrap();
        assert_eq!(item.display_label(), "Rust");
    }

    #[test]
    fn confirm_sets_flag() {
        let item = ProfileItem::new(ItemType::Trinity, "Job Search").unwrap();
        assert!(!item.confirmed);
        assert!(item.confirm().confirmed);
    }
}
