//! DeleteProfileItem - Command handler for removing one profile answer.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileItemId, UserId};
use crate::ports::ProfileRepository;

/// Command to delete a profile item.
#[derive(Debug, Clone)]
pub struct DeleteProfileItemCommand {
    pub user_id: UserId,
    pub item_id: ProfileItemId,
}

/// Result of a successful deletion.
#[derive(Debug, Clone)]
pub struct DeleteProfileItemResult {
    pub deleted_id: ProfileItemId,
}

/// Handler for deleting profile items.
pub struct DeleteProfileItemHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl DeleteProfileItemHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteProfileItemCommand,
    ) -> Result<DeleteProfileItemResult, DomainError> {
        self.repository.delete(&cmd.user_id, cmd.item_id).await?;
        Ok(DeleteProfileItemResult {
            deleted_id: cmd.item_id,
        })
    }
}
