//! ListProfileItems - Query handler for a user's profile items.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::ProfileItem;
use crate::ports::ProfileRepository;

/// Query for the full item list, in insertion order.
#[derive(Debug, Clone)]
pub struct ListProfileItemsQuery {
    pub user_id: UserId,
}

/// Handler for listing profile items.
pub struct ListProfileItemsHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl ListProfileItemsHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListProfileItemsQuery,
    ) -> Result<Vec<ProfileItem>, DomainError> {
        self.repository.list_for_user(&query.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockProfileRepository;
    use crate::domain::profile::ItemType;

    #[tokio::test]
    async fn test_list_returns_items_in_insertion_order() {
        let user = UserId::new("usr_1").unwrap();
        let first = ProfileItem::new(ItemType::Skill, "Go").unwrap();
        let second = ProfileItem::new(ItemType::Skill, "Rust").unwrap();
        let repo = Arc::new(
            MockProfileRepository::new().with_items(&user, vec![first.clone(), second.clone()]),
        );
        let handler = ListProfileItemsHandler::new(repo);

        let items = handler
            .handle(ListProfileItemsQuery { user_id: user })
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].value, "Go");
        assert_eq!(items[1].value, "Rust");
    }

    #[tokio::test]
    async fn test_list_for_unknown_user_is_empty_not_error() {
        let repo = Arc::new(MockProfileRepository::new());
        let handler = ListProfileItemsHandler::new(repo);

        let items = handler
            .handle(ListProfileItemsQuery {
                user_id: UserId::new("usr_unknown").unwrap(),
            })
            .await
            .unwrap();

        assert!(items.is_empty());
    }
}
