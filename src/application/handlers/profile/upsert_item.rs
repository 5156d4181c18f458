//! UpsertProfileItem - Command handler for saving one profile answer.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::{ItemType, ProfileItem};
use crate::ports::{MemoryStore, ProfileRepository};

/// Command to create or update a profile item.
#[derive(Debug, Clone)]
pub struct UpsertProfileItemCommand {
    pub user_id: UserId,
    pub item_type: ItemType,
    pub value: String,
    pub metadata: HashMap<String, serde_json::Value>,
    pub confirmed: bool,
}

/// Result of a successful upsert.
#[derive(Debug, Clone)]
pub struct UpsertProfileItemResult {
    pub item: ProfileItem,
}

/// Handler for upserting profile items.
///
/// On success the item is also forwarded to the memory store as a
/// natural-language fact so the agent can recall it later. That side-write is
/// best-effort: a failure is logged and does not fail the command.
pub struct UpsertProfileItemHandler {
    repository: Arc<dyn ProfileRepository>,
    memory: Arc<dyn MemoryStore>,
}

impl UpsertProfileItemHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, memory: Arc<dyn MemoryStore>) -> Self {
        Self { repository, memory }
    }

    pub async fn handle(
        &self,
        cmd: UpsertProfileItemCommand,
    ) -> Result<UpsertProfileItemResult, DomainError> {
        let mut item = ProfileItem::new(cmd.item_type, cmd.value)?;
        item.metadata = cmd.metadata;
        item.confirmed = cmd.confirmed;

        let stored = self.repository.upsert(&cmd.user_id, item).await?;

        if let Err(e) = self
            .memory
            .record_fact(&cmd.user_id, &fact_text(&stored))
            .await
        {
            tracing::warn!(user_id = %cmd.user_id, error = %e, "memory fact write failed");
        }

        Ok(UpsertProfileItemResult { item: stored })
    }
}

/// Phrases an item as a natural-language fact for the memory service.
fn fact_text(item: &ProfileItem) -> String {
    match &item.item_type {
        ItemType::Company => {
            let job_title = item
                .metadata
                .get("job_title")
                .and_then(|v| v.as_str())
                .unwrap_or("a role");
            format!("User worked at {} as {}", item.value, job_title)
        }
        ItemType::Location => format!("User is based in {}", item.value),
        ItemType::RolePreference => format!("User is interested in {} roles", item.value),
        ItemType::Skill => format!("User has experience with {}", item.value),
        other => format!("User preference: {} = {}", other, item.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        FailingProfileRepository, MockMemoryStore, MockProfileRepository,
    };

    fn test_user() -> UserId {
        UserId::new("usr_1").unwrap()
    }

    fn command(item_type: ItemType, value: &str) -> UpsertProfileItemCommand {
        UpsertProfileItemCommand {
            user_id: test_user(),
            item_type,
            value: value.to_string(),
            metadata: HashMap::new(),
            confirmed: true,
        }
    }

    #[tokio::test]
    async fn test_upsert_stores_item_and_records_fact() {
        let repo = Arc::new(MockProfileRepository::new());
        let memory = Arc::new(MockMemoryStore::new());
        let handler = UpsertProfileItemHandler::new(repo.clone(), memory.clone());

        let result = handler.handle(command(ItemType::Skill, "Rust")).await.unwrap();

        assert_eq!(result.item.value, "Rust");
        assert_eq!(repo.items(&test_user()).len(), 1);
        assert_eq!(
            memory.facts(),
            vec!["User has experience with Rust".to_string()]
        );
    }

    #[tokio::test]
    async fn test_upsert_rejects_empty_value() {
        let repo = Arc::new(MockProfileRepository::new());
        let memory = Arc::new(MockMemoryStore::new());
        let handler = UpsertProfileItemHandler::new(repo.clone(), memory);

        let result = handler.handle(command(ItemType::Skill, "  ")).await;

        assert!(result.is_err());
        assert!(repo.items(&test_user()).is_empty());
    }

    #[tokio::test]
    async fn test_memory_failure_does_not_fail_command() {
        let repo = Arc::new(MockProfileRepository::new());
        let memory = Arc::new(MockMemoryStore::failing());
        let handler = UpsertProfileItemHandler::new(repo.clone(), memory);

        let result = handler.handle(command(ItemType::Location, "London")).await;

        assert!(result.is_ok());
        assert_eq!(repo.items(&test_user()).len(), 1);
    }

    #[tokio::test]
    async fn test_failed_upsert_leaves_stored_list_unchanged() {
        // No optimistic update anywhere: a rejected write must not alter
        // previously stored state.
        let repo = Arc::new(FailingProfileRepository::new());
        let memory = Arc::new(MockMemoryStore::new());
        let handler = UpsertProfileItemHandler::new(repo.clone(), memory.clone());

        let result = handler.handle(command(ItemType::Skill, "Go")).await;

        assert!(result.is_err());
        assert!(repo.untouched());
        assert!(memory.facts().is_empty());
    }

    #[tokio::test]
    async fn test_company_fact_includes_job_title_metadata() {
        let repo = Arc::new(MockProfileRepository::new());
        let memory = Arc::new(MockMemoryStore::new());
        let handler = UpsertProfileItemHandler::new(repo, memory.clone());

        let mut cmd = command(ItemType::Company, "Acme Ltd");
        cmd.metadata
            .insert("job_title".to_string(), serde_json::json!("CTO"));
        handler.handle(cmd).await.unwrap();

        assert_eq!(
            memory.facts(),
            vec!["User worked at Acme Ltd as CTO".to_string()]
        );
    }
}
