#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use sqlx::types::Json;
use uuid::Uuid;

use resume_ecosystem_backend::entities::achievement::{
    Achievement, AchievementFilter, AchievementInsert, AchievementMetadata, AchievementSource,
    AchievementStatus, AchievementType, NewAchievement,
};
use resume_ecosystem_backend::entities::integration::{Integration, IntegrationInsert, Platform};
use resume_ecosystem_backend::entities::resume::{PersonalInfo, Resume, ResumeInsert, ResumeTemplate, Visibility};
use resume_ecosystem_backend::entities::user::{User, UserInsert};
use resume_ecosystem_backend::errors::AppError;
use resume_ecosystem_backend::repositories::achievement::AchievementRepository;
use resume_ecosystem_backend::repositories::integration::IntegrationRepository;
use resume_ecosystem_backend::repositories::resume::ResumeRepository;
use resume_ecosystem_backend::repositories::user::UserRepository;

mock! {
    pub AchievementRepo {}

    #[async_trait]
    impl AchievementRepository for AchievementRepo {
        async fn list_for_user(
            &self,
            user_id: &Uuid,
            filter: &AchievementFilter,
        ) -> Result<Vec<Achievement>, AppError>;
        async fn all_for_user(&self, user_id: &Uuid) -> Result<Vec<Achievement>, AppError>;
        async fn get(&self, id: &Uuid) -> Result<Option<Achievement>, AppError>;
        async fn create(&self, achievement: AchievementInsert) -> Result<Achievement, AppError>;
        async fn update(&self, achievement: &Achievement) -> Result<Achievement, AppError>;
        async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    pub ResumeRepo {}

    #[async_trait]
    impl ResumeRepository for ResumeRepo {
        async fn find_by_user(&self, user_id: &Uuid) -> Result<Option<Resume>, AppError>;
        async fn create(&self, resume: &ResumeInsert) -> Result<Resume, AppError>;
        async fn save(&self, resume: &Resume) -> Result<Resume, AppError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn check_connection(&self) -> Result<(), AppError>;
        async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
        async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
        async fn create_user(&self, user: &UserInsert) -> Result<User, AppError>;
        async fn update_user(&self, user: &User) -> Result<User, AppError>;
    }
}

mock! {
    pub IntegrationRepo {}

    #[async_trait]
    impl IntegrationRepository for IntegrationRepo {
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
}

pub fn user_with_name_and_email(id: Uuid) -> User {
    User {
        id,
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password_hash: String::new(),
        phone: String::new(),
        profile_picture: String::new(),
        location: String::new(),
        linkedin: String::new(),
        github: String::new(),
        portfolio: String::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn bare_resume(user_id: Uuid) -> Resume {
    Resume {
        id: Uuid::new_v4(),
        user_id,
        personal_info: Json(PersonalInfo::default()),
        summary: String::new(),
        skills: Vec::new(),
        achievements: Vec::new(),
        visibility: Json(Visibility::default()),
        template: ResumeTemplate::Modern,
        completeness: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn project_achievement(user_id: Uuid, skills: &[&str], description: &str) -> Achievement {
    Achievement {
        id: Uuid::new_v4(),
        user_id,
        achievement_type: AchievementType::Project,
        title: "Portfolio Site".to_string(),
        organization: "Personal".to_string(),
        description: description.to_string(),
        start_date: Utc::now(),
        end_date: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        certificate_url: String::new(),
        status: AchievementStatus::Unverified,
        source: AchievementSource::Manual,
        metadata: Json(AchievementMetadata::default()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn new_achievement_request() -> NewAchievement {
    NewAchievement {
        achievement_type: AchievementType::Project,
        title: "Portfolio Site".to_string(),
        organization: "Personal".to_string(),
        description: String::new(),
        start_date: Utc::now(),
        end_date: None,
        skills: Vec::new(),
        certificate_url: String::new(),
        status: AchievementStatus::Unverified,
        source: AchievementSource::Manual,
        metadata: AchievementMetadata::default(),
    }
}

pub fn active_integration(user_id: Uuid, platform: Platform) -> Integration {
    Integration {
        id: Uuid::new_v4(),
        user_id,
        platform,
        platform_user_id: "ext-user".to_string(),
        api_key: String::new(),
        is_active: true,
        last_synced: None,
        sync_count: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
