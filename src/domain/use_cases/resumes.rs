use uuid::Uuid;

use crate::entities::achievement::Achievement;
use crate::entities::resume::{
    PersonalInfo, Resume, ResumeInsert, ResumeView, UpdateResume, UpdateVisibility,
};
use crate::errors::AppError;
use crate::repositories::achievement::AchievementRepository;
use crate::repositories::resume::ResumeRepository;
use crate::repositories::user::UserRepository;
use crate::use_cases::synthesis::{calculate_completeness, generate_summary};

pub struct ResumeHandler<R, A, U>
where
    R: ResumeRepository,
    A: AchievementRepository,
    U: UserRepository,
{
    pub resume_repo: R,
    pub achievement_repo: A,
    pub user_repo: U,
}

impl<R, A, U> ResumeHandler<R, A, U>
where
    R: ResumeRepository,
    A: AchievementRepository,
    U: UserRepository,
{
    pub fn new(resume_repo: R, achievement_repo: A, user_repo: U) -> Self {
        ResumeHandler {
            resume_repo,
            achievement_repo,
            user_repo,
        }
    }

    /// Fetches the user's resume, creating it lazily (seeded with profile
    /// personal info) on first access.
    pub async fn get(&self, user_id: &Uuid) -> Result<ResumeView, AppError> {
        let resume = match self.resume_repo.find_by_user(user_id).await? {
            Some(resume) => resume,
            None => {
                let user = self
                    .user_repo
                    .get_user_by_id(user_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

                self.resume_repo
                    .create(&ResumeInsert {
                        user_id: *user_id,
                        personal_info: PersonalInfo::from(&user),
                    })
                    .await?
            }
        };

        self.with_achievements(resume).await
    }

    /// Merges personal info / summary / template edits and recomputes the
    /// completeness score against the updated document.
    pub async fn update(&self, user_id: &Uuid, update: UpdateResume) -> Result<ResumeView, AppError> {
        let mut resume = self.require_resume(user_id).await?;

        if let Some(personal_info) = update.personal_info {
            resume.personal_info.0.merge(personal_info);
        }
        if let Some(summary) = update.summary {
            resume.summary = summary;
        }
        if let Some(template) = update.template {
            resume.template = template;
        }

        let user = self
            .user_repo
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        resume.completeness = calculate_completeness(&resume, &user);

        let resume = self.resume_repo.save(&resume).await?;
        self.with_achievements(resume).await
    }

    pub async fn update_visibility(
        &self,
        user_id: &Uuid,
        update: UpdateVisibility,
    ) -> Result<Resume, AppError> {
        let mut resume = self.require_resume(user_id).await?;

        update.apply_to(&mut resume.visibility.0);

        self.resume_repo.save(&resume).await
    }

    pub async fn regenerate_summary(&self, user_id: &Uuid) -> Result<String, AppError> {
        let mut resume = self.require_resume(user_id).await?;
        let achievements = self.achievement_repo.all_for_user(user_id).await?;

        resume.summary = generate_summary(&achievements);
        let resume = self.resume_repo.save(&resume).await?;

        Ok(resume.summary)
    }

    /// Resume with achievements filtered down by the visibility toggles.
    pub async fn preview(&self, user_id: &Uuid) -> Result<ResumeView, AppError> {
        let resume = self.require_resume(user_id).await?;
        let mut view = self.with_achievements(resume).await?;

        view.achievement_details
            .retain(|a| view.resume.visibility.shows(a.achievement_type));

        Ok(view)
    }

    async fn require_resume(&self, user_id: &Uuid) -> Result<Resume, AppError> {
        self.resume_repo
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
    }

    async fn with_achievements(&self, resume: Resume) -> Result<ResumeView, AppError> {
        let achievements: Vec<Achievement> =
            self.achievement_repo.all_for_user(&resume.user_id).await?;

        Ok(ResumeView {
            resume,
            achievement_details: achievements,
        })
    }
}
