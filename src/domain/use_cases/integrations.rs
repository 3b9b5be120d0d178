use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::entities::achievement::{Achievement, AchievementStatus};
use crate::entities::integration::{
    ConnectIntegration, Integration, IntegrationInsert, WebhookPayload,
};
use crate::errors::AppError;
use crate::repositories::achievement::AchievementRepository;
use crate::repositories::integration::IntegrationRepository;
use crate::repositories::resume::ResumeRepository;
use crate::repositories::user::UserRepository;
use crate::use_cases::synthesis::refresh_resume_for_user;

pub struct IntegrationHandler<I, A, R, U>
where
    I: IntegrationRepository,
    A: AchievementRepository,
    R: ResumeRepository,
    U: UserRepository,
{
    pub integration_repo: I,
    pub achievement_repo: A,
    pub resume_repo: R,
    pub user_repo: U,
}

impl<I, A, R, U> IntegrationHandler<I, A, R, U>
where
    I: IntegrationRepository,
    A: AchievementRepository,
    R: ResumeRepository,
    U: UserRepository,
{
    pub fn new(integration_repo: I, achievement_repo: A, resume_repo: R, user_repo: U) -> Self {
        IntegrationHandler {
            integration_repo,
            achievement_repo,
            resume_repo,
            user_repo,
        }
    }

    pub async fn list(&self, user_id: &Uuid) -> Result<Vec<Integration>, AppError> {
        self.integration_repo.list_for_user(user_id).await
    }

    /// Connects a platform: upserts on the (user, platform) pair, so
    /// reconnecting reactivates and refreshes the stored credentials.
    pub async fn connect(
        &self,
        user_id: &Uuid,
        request: ConnectIntegration,
    ) -> Result<Integration, AppError> {
        match self
            .integration_repo
            .find_by_user_and_platform(user_id, request.platform)
            .await?
        {
            Some(mut integration) => {
                if let Some(platform_user_id) = request.platform_user_id {
                    integration.platform_user_id = platform_user_id;
                }
                if let Some(api_key) = request.api_key {
                    integration.api_key = api_key;
                }
                integration.is_active = true;
                self.integration_repo.save(&integration).await
            }
            None => {
                self.integration_repo
                    .create(&IntegrationInsert {
                        user_id: *user_id,
                        platform: request.platform,
                        platform_user_id: request.platform_user_id.unwrap_or_default(),
                        api_key: request.api_key.unwrap_or_default(),
                    })
                    .await
            }
        }
    }

    /// Accepts an inbound platform event: requires an ACTIVE integration
    /// for the (user, platform) pair, records the achievement pre-verified
    /// with the platform as source, and bumps the sync counter. The resume
    /// refresh afterwards is best-effort; achievement creation is the
    /// primary contract, so a refresh failure is logged and swallowed.
    pub async fn handle_webhook(&self, payload: WebhookPayload) -> Result<Achievement, AppError> {
        payload.achievement_data.validate()?;

        let mut integration = self
            .integration_repo
            .find_by_user_and_platform(&payload.user_id, payload.platform)
            .await?
            .filter(|i| i.is_active)
            .ok_or_else(|| AppError::NotFound("Integration not found or inactive".to_string()))?;

        let mut insert = payload.achievement_data.prepare_for_insert(payload.user_id);
        insert.status = AchievementStatus::Verified;
        insert.source = payload.platform.into();

        let achievement = self.achievement_repo.create(insert).await?;

        integration.last_synced = Some(Utc::now());
        integration.sync_count += 1;
        self.integration_repo.save(&integration).await?;

        if let Err(e) = refresh_resume_for_user(
            &self.achievement_repo,
            &self.resume_repo,
            &self.user_repo,
            &payload.user_id,
        )
        .await
        {
            tracing::error!("Error updating resume from integration: {}", e);
        }

        Ok(achievement)
    }

    pub async fn toggle(&self, user_id: &Uuid, id: &Uuid) -> Result<Integration, AppError> {
        let mut integration = self.get_owned(user_id, id).await?;

        integration.is_active = !integration.is_active;
        self.integration_repo.save(&integration).await
    }

    pub async fn delete(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError> {
        self.get_owned(user_id, id).await?;
        self.integration_repo.delete(id).await
    }

    async fn get_owned(&self, user_id: &Uuid, id: &Uuid) -> Result<Integration, AppError> {
        let integration = self
            .integration_repo
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Integration not found".to_string()))?;

        if integration.user_id != *user_id {
            return Err(AppError::ForbiddenAccess("Not authorized".to_string()));
        }

        Ok(integration)
    }
}
