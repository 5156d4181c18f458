//! ProfileRepository port for the Profile Store.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileItemId, UserId};
use crate::domain::onboarding::OnboardingStep;
use crate::domain::profile::ProfileItem;

/// Persistence for a user's profile items and their onboarding step counter.
///
/// The step counter is the local fallback the agent mirror resumes from; the
/// item list is the source the session state is rebuilt from.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts an item, or updates metadata/confirmed when the same
    /// (user, type, value) triple already exists. Returns the stored item.
    async fn upsert(&self, user_id: &UserId, item: ProfileItem)
        -> Result<ProfileItem, DomainError>;

    /// Deletes one item owned by the user.
    async fn delete(&self, user_id: &UserId, id: ProfileItemId) -> Result<(), DomainError>;

    /// Lists the user's items in insertion order.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ProfileItem>, DomainError>;

    /// Returns the last persisted onboarding step for the user, if any.
    async fn load_step(&self, user_id: &UserId) -> Result<Option<OnboardingStep>, DomainError>;

    /// Persists the onboarding step counter for the user.
    async fn save_step(&self, user_id: &UserId, step: OnboardingStep) -> Result<(), DomainError>;
}
