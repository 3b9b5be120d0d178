use async_trait::async_trait;
use uuid::Uuid;
use std::borrow::Cow;

use crate::{
    entities::integration::{Integration, IntegrationInsert, Platform},
    errors::AppError,
    repositories::sqlx_repo::SqlxIntegrationRepo,
};

#[async_trait]
pub trait IntegrationRepository: Send + Sync {
    async fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<Integration>, AppError>;
    async fn find_by_user_and_platform(
        &self,
        user_id: &Uuid,
        platform: Platform,
    ) -> Result<Option<Integration>, AppError>;
    async fn get(&self, id: &Uuid) -> Result<Option<Integration>, AppError>;
    async fn create(&self, integration: &IntegrationInsert) -> Result<Integration, AppError>;
    async fn save(&self, integration: &Integration) -> Result<Integration, AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxIntegrationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxIntegrationRepo { pool }
    }
}

#[async_trait]
impl IntegrationRepository for SqlxIntegrationRepo {
    async fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<Integration>, AppError> {
        sqlx::query_as::<_, Integration>(
            "SELECT * FROM integrations WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn find_by_user_and_platform(
        &self,
        user_id: &Uuid,
        platform: Platform,
    ) -> Result<Option<Integration>, AppError> {
        sqlx::query_as::<_, Integration>(
            "SELECT * FROM integrations WHERE user_id = $1 AND platform = $2",
        )
        .bind(user_id)
        .bind(platform)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Integration>, AppError> {
        sqlx::query_as::<_, Integration>("SELECT * FROM integrations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, integration: &IntegrationInsert) -> Result<Integration, AppError> {
        sqlx::query_as::<_, Integration>(
            r#"INSERT INTO integrations (user_id, platform, platform_user_id, api_key)
               VALUES ($1, $2, $3, $4)
               RETURNING *"#,
        )
        .bind(integration.user_id)
        .bind(integration.platform)
        .bind(&integration.platform_user_id)
        .bind(&integration.api_key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("Integration already exists for this platform".to_string())
            }
            _ => AppError::from(e),
        })
    }

    async fn save(&self, integration: &Integration) -> Result<Integration, AppError> {
        sqlx::query_as::<_, Integration>(
            r#"UPDATE integrations
               SET platform_user_id = $2,
                   api_key = $3,
                   is_active = $4,
                   last_synced = $5,
                   sync_count = $6,
                   updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(integration.id)
        .bind(&integration.platform_user_id)
        .bind(&integration.api_key)
        .bind(integration.is_active)
        .bind(integration.last_synced)
        .bind(integration.sync_count)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM integrations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Integration not found".to_string()));
        }

        Ok(())
    }
}
