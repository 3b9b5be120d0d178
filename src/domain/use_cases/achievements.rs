use uuid::Uuid;
use validator::Validate;

use crate::entities::achievement::{
    Achievement, AchievementFilter, AchievementStats, AchievementStatus, AchievementType,
    NewAchievement, StatsByStatus, StatsByType, UpdateAchievement,
};
use crate::errors::AppError;
use crate::repositories::achievement::AchievementRepository;
use crate::repositories::resume::ResumeRepository;
use crate::repositories::user::UserRepository;
use crate::use_cases::skills::extract_skills;
use crate::use_cases::synthesis::refresh_resume_for_user;

pub struct AchievementHandler<A, R, U>
where
    A: AchievementRepository,
    R: ResumeRepository,
    U: UserRepository,
{
    pub achievement_repo: A,
    pub resume_repo: R,
    pub user_repo: U,
}

impl<A, R, U> AchievementHandler<A, R, U>
where
    A: AchievementRepository,
    R: ResumeRepository,
    U: UserRepository,
{
    pub fn new(achievement_repo: A, resume_repo: R, user_repo: U) -> Self {
        AchievementHandler {
            achievement_repo,
            resume_repo,
            user_repo,
        }
    }

    pub async fn list(
        &self,
        user_id: &Uuid,
        filter: &AchievementFilter,
    ) -> Result<Vec<Achievement>, AppError> {
        self.achievement_repo.list_for_user(user_id, filter).await
    }

    /// Fetches a single achievement, enforcing ownership.
    pub async fn get(&self, user_id: &Uuid, id: &Uuid) -> Result<Achievement, AppError> {
        let achievement = self
            .achievement_repo
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Achievement not found".to_string()))?;

        if achievement.user_id != *user_id {
            return Err(AppError::ForbiddenAccess(
                "Not authorized to access this achievement".to_string(),
            ));
        }

        Ok(achievement)
    }

    /// Creates an achievement and synchronously refreshes the owner's
    /// resume. A refresh failure fails the whole request.
    pub async fn create(
        &self,
        user_id: &Uuid,
        request: NewAchievement,
    ) -> Result<Achievement, AppError> {
        request.validate()?;

        let achievement = self
            .achievement_repo
            .create(request.prepare_for_insert(*user_id))
            .await?;

        refresh_resume_for_user(
            &self.achievement_repo,
            &self.resume_repo,
            &self.user_repo,
            user_id,
        )
        .await?;

        Ok(achievement)
    }

    pub async fn update(
        &self,
        user_id: &Uuid,
        id: &Uuid,
        update: UpdateAchievement,
    ) -> Result<Achievement, AppError> {
        let mut achievement = self.get(user_id, id).await?;

        update.apply_to(&mut achievement);
        let achievement = self.achievement_repo.update(&achievement).await?;

        refresh_resume_for_user(
            &self.achievement_repo,
            &self.resume_repo,
            &self.user_repo,
            user_id,
        )
        .await?;

        Ok(achievement)
    }

    /// Deletes immediately and unconditionally; no soft delete.
    pub async fn delete(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError> {
        self.get(user_id, id).await?;

        self.achievement_repo.delete(id).await?;

        refresh_resume_for_user(
            &self.achievement_repo,
            &self.resume_repo,
            &self.user_repo,
            user_id,
        )
        .await?;

        Ok(())
    }

    pub async fn stats(&self, user_id: &Uuid) -> Result<AchievementStats, AppError> {
        let achievements = self.achievement_repo.all_for_user(user_id).await?;

        let mut by_type = StatsByType::default();
        let mut by_status = StatsByStatus::default();

        for achievement in &achievements {
            match achievement.achievement_type {
                AchievementType::Hackathon => by_type.hackathon += 1,
                AchievementType::Course => by_type.course += 1,
                AchievementType::Internship => by_type.internship += 1,
                AchievementType::Project => by_type.project += 1,
                AchievementType::Certification => by_type.certification += 1,
            }
            match achievement.status {
                AchievementStatus::Verified => by_status.verified += 1,
                AchievementStatus::Pending => by_status.pending += 1,
                AchievementStatus::Unverified => by_status.unverified += 1,
            }
        }

        Ok(AchievementStats {
            total: achievements.len(),
            by_type,
            by_status,
            skills: extract_skills(&achievements),
        })
    }
}
