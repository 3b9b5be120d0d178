use async_trait::async_trait;
use sqlx::types::Json;
use uuid::Uuid;
use std::borrow::Cow;

use crate::{
    entities::resume::{Resume, ResumeInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxResumeRepo,
};

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &Uuid) -> Result<Option<Resume>, AppError>;
    async fn create(&self, resume: &ResumeInsert) -> Result<Resume, AppError>;
    /// Full-document write; the refresh contract always persists the whole
    /// recomputed resume rather than patching fields.
    async fn save(&self, resume: &Resume) -> Result<Resume, AppError>;
}

impl SqlxResumeRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxResumeRepo { pool }
    }
}

#[async_trait]
impl ResumeRepository for SqlxResumeRepo {
    async fn find_by_user(&self, user_id: &Uuid) -> Result<Option<Resume>, AppError> {
        sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, resume: &ResumeInsert) -> Result<Resume, AppError> {
        sqlx::query_as::<_, Resume>(
            r#"INSERT INTO resumes (user_id, personal_info, visibility)
               VALUES ($1, $2, $3)
               RETURNING *"#,
        )
        .bind(resume.user_id)
        .bind(Json(&resume.personal_info))
        .bind(Json(crate::entities::resume::Visibility::default()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("Resume already exists for this user".to_string())
            }
            _ => AppError::from(e),
        })
    }

    async fn save(&self, resume: &Resume) -> Result<Resume, AppError> {
        sqlx::query_as::<_, Resume>(
            r#"UPDATE resumes
               SET personal_info = $2,
                   summary = $3,
                   skills = $4,
                   achievements = $5,
                   visibility = $6,
                   template = $7,
                   completeness = $8,
                   updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(resume.id)
        .bind(&resume.personal_info)
        .bind(&resume.summary)
        .bind(&resume.skills)
        .bind(&resume.achievements)
        .bind(&resume.visibility)
        .bind(resume.template)
        .bind(resume.completeness)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
