//! PostgreSQL adapter for ProfileRepository

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, ErrorCode, ProfileItemId, Timestamp, UserId,
};
use crate::domain::onboarding::OnboardingStep;
use crate::domain::profile::{ItemType, ProfileItem};
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of ProfileRepository
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a profile item from a database row
    fn from_db_row(row: &PgRow) -> Result<ProfileItem, DomainError> {
        let id: Uuid = row.get("id");
        let item_type: String = row.get("item_type");
        let value: String = row.get("value");
        let confirmed: bool = row.get("confirmed");
        let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

        let metadata: HashMap<String, serde_json::Value> =
            serde_json::from_value(row.get("metadata")).map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to deserialize item metadata: {}", e),
                )
            })?;

        Ok(ProfileItem {
            id: ProfileItemId::from_uuid(id),
            item_type: ItemType::parse(&item_type),
            value,
            metadata,
            confirmed,
            created_at: Timestamp::from_datetime(created_at),
        })
    }

    fn db_error(e: sqlx::Error) -> DomainError {
        DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn upsert(
        &self,
        user_id: &UserId,
        item: ProfileItem,
    ) -> Result<ProfileItem, DomainError> {
        let metadata = serde_json::to_value(&item.metadata)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;

        let row = sqlx::query(
            r#"
            INSERT INTO user_profile_items (id, user_id, item_type, value, metadata, confirmed)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, item_type, value)
            DO UPDATE SET
                metadata = EXCLUDED.metadata,
                confirmed = EXCLUDED.confirmed,
                updated_at = NOW()
            RETURNING id, item_type, value, metadata, confirmed, created_at
            "#,
        )
        .bind(item.id.as_uuid())
        .bind(user_id.as_str())
        .bind(item.item_type.as_str())
        .bind(&item.value)
        .bind(metadata)
        .bind(item.confirmed)
        .fetch_one(&self.pool)
        .await
        .map_err(Self::db_error)?;

        Self::from_db_row(&row)
    }

    async fn delete(&self, user_id: &UserId, id: ProfileItemId) -> Result<(), DomainError> {
        let result = sqlx::query(
            "DELETE FROM user_profile_items WHERE id = $1 AND user_id = $2",
        )
        .bind(id.as_uuid())
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(Self::db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::item_not_found(id));
        }
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ProfileItem>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, item_type, value, metadata, confirmed, created_at
            FROM user_profile_items
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(Self::db_error)?;

        rows.iter().map(Self::from_db_row).collect()
    }

    async fn load_step(&self, user_id: &UserId) -> Result<Option<OnboardingStep>, DomainError> {
        let step: Option<i32> = sqlx::query_scalar(
            "SELECT current_step FROM user_onboarding_steps WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::db_error)?;

        Ok(step.map(|n| OnboardingStep::from_number(n as i64)))
    }

    async fn save_step(&self, user_id: &UserId, step: OnboardingStep) -> Result<(), DomainError> {
        // GREATEST keeps the stored counter monotonic even under racing writers.
        sqlx::query(
            r#"
            INSERT INTO user_onboarding_steps (user_id, current_step)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET
                current_step = GREATEST(user_onboarding_steps.current_step, EXCLUDED.current_step),
                updated_at = NOW()
            "#,
        )
        .bind(user_id.as_str())
        .bind(step.number() as i32)
        .execute(&self.pool)
        .await
        .map_err(Self::db_error)?;

        Ok(())
    }
}
