use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::achievement::{Achievement, AchievementFilter, AchievementInsert, AchievementSort},
    errors::AppError,
    repositories::sqlx_repo::SqlxAchievementRepo,
};

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// Filtered listing for the GET endpoint.
    async fn list_for_user(
        &self,
        user_id: &Uuid,
        filter: &AchievementFilter,
    ) -> Result<Vec<Achievement>, AppError>;

    /// Complete owned set in insertion order; what the resume refresh
    /// derives from.
    async fn all_for_user(&self, user_id: &Uuid) -> Result<Vec<Achievement>, AppError>;

    async fn get(&self, id: &Uuid) -> Result<Option<Achievement>, AppError>;
    async fn create(&self, achievement: AchievementInsert) -> Result<Achievement, AppError>;
    async fn update(&self, achievement: &Achievement) -> Result<Achievement, AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxAchievementRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAchievementRepo { pool }
    }
}

#[async_trait]
impl AchievementRepository for SqlxAchievementRepo {
    async fn list_for_user(
        &self,
        user_id: &Uuid,
        filter: &AchievementFilter,
    ) -> Result<Vec<Achievement>, AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT * FROM achievements WHERE user_id = ");
        builder.push_bind(user_id);

        if let Some(kind) = filter.achievement_type {
            builder.push(" AND achievement_type = ");
            builder.push_bind(kind);
        }
        if let Some(status) = filter.status {
            builder.push(" AND status = ");
            builder.push_bind(status);
        }

        builder.push(match filter.sort {
            AchievementSort::Newest => " ORDER BY created_at DESC",
            AchievementSort::Oldest => " ORDER BY created_at ASC",
            AchievementSort::Date => " ORDER BY start_date DESC",
        });

        builder
            .build_query_as::<Achievement>()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn all_for_user(&self, user_id: &Uuid) -> Result<Vec<Achievement>, AppError> {
        sqlx::query_as::<_, Achievement>(
            "SELECT * FROM achievements WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Achievement>, AppError> {
        sqlx::query_as::<_, Achievement>("SELECT * FROM achievements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, achievement: AchievementInsert) -> Result<Achievement, AppError> {
        sqlx::query_as::<_, Achievement>(
            r#"INSERT INTO achievements (
                   user_id, achievement_type, title, organization, description,
                   start_date, end_date, skills, certificate_url, status, source, metadata
               )
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
               RETURNING *"#,
        )
        .bind(achievement.user_id)
        .bind(achievement.achievement_type)
        .bind(&achievement.title)
        .bind(&achievement.organization)
        .bind(&achievement.description)
        .bind(achievement.start_date)
        .bind(achievement.end_date)
        .bind(&achievement.skills)
        .bind(&achievement.certificate_url)
        .bind(achievement.status)
        .bind(achievement.source)
        .bind(Json(&achievement.metadata))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update(&self, achievement: &Achievement) -> Result<Achievement, AppError> {
        sqlx::query_as::<_, Achievement>(
            r#"UPDATE achievements
               SET achievement_type = $2,
                   title = $3,
                   organization = $4,
                   description = $5,
                   start_date = $6,
                   end_date = $7,
                   skills = $8,
                   certificate_url = $9,
                   status = $10,
                   metadata = $11,
                   updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(achievement.id)
        .bind(achievement.achievement_type)
        .bind(&achievement.title)
        .bind(&achievement.organization)
        .bind(&achievement.description)
        .bind(achievement.start_date)
        .bind(achievement.end_date)
        .bind(&achievement.skills)
        .bind(&achievement.certificate_url)
        .bind(achievement.status)
        .bind(&achievement.metadata)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Achievement not found".to_string()));
        }

        Ok(())
    }
}
