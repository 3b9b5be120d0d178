mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, password, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, db};

use auth::jwt::JwtService;
use repositories::sqlx_repo::{
    SqlxAchievementRepo, SqlxIntegrationRepo, SqlxResumeRepo, SqlxUserRepo,
};
use use_cases::achievements::AchievementHandler;
use use_cases::auth::AuthHandler;
use use_cases::integrations::IntegrationHandler;
use use_cases::resumes::ResumeHandler;

pub type AppAuthHandler = AuthHandler<SqlxUserRepo, SqlxResumeRepo, JwtService>;
pub type AppAchievementHandler =
    AchievementHandler<SqlxAchievementRepo, SqlxResumeRepo, SqlxUserRepo>;
pub type AppResumeHandler = ResumeHandler<SqlxResumeRepo, SqlxAchievementRepo, SqlxUserRepo>;
pub type AppIntegrationHandler =
    IntegrationHandler<SqlxIntegrationRepo, SqlxAchievementRepo, SqlxResumeRepo, SqlxUserRepo>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub achievement_handler: AppAchievementHandler,
    pub resume_handler: AppResumeHandler,
    pub integration_handler: AppIntegrationHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);
        let user_repo = SqlxUserRepo::new(pool.clone());
        let achievement_repo = SqlxAchievementRepo::new(pool.clone());
        let resume_repo = SqlxResumeRepo::new(pool.clone());
        let integration_repo = SqlxIntegrationRepo::new(pool);

        AppState {
            auth_handler: AuthHandler::new(
                user_repo.clone(),
                resume_repo.clone(),
                jwt_service,
            ),
            achievement_handler: AchievementHandler::new(
                achievement_repo.clone(),
                resume_repo.clone(),
                user_repo.clone(),
            ),
            resume_handler: ResumeHandler::new(
                resume_repo.clone(),
                achievement_repo.clone(),
                user_repo.clone(),
            ),
            integration_handler: IntegrationHandler::new(
                integration_repo,
                achievement_repo,
                resume_repo,
                user_repo,
            ),
        }
    }
}
