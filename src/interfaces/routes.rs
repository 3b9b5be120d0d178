use actix_web::web;

use crate::handlers::json_error::JsonError;
use crate::handlers::{achievements, auth, integrations, resumes, system};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| JsonError::from(err).into()),
    )
    .service(system::home)
        .service(system::health_check)
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .service(auth::register)
                        .service(auth::login)
                        .service(auth::refresh_token)
                        .service(auth::me)
                        .service(auth::update_profile),
                )
                .service(
                    web::scope("/achievements")
                        .service(achievements::list_achievements)
                        .service(achievements::achievement_stats)
                        .service(achievements::create_achievement)
                        .service(achievements::get_achievement)
                        .service(achievements::update_achievement)
                        .service(achievements::delete_achievement),
                )
                .service(
                    web::scope("/resume")
                        .service(resumes::resume_preview)
                        .service(resumes::update_visibility)
                        .service(resumes::regenerate_summary)
                        .service(resumes::get_resume)
                        .service(resumes::update_resume),
                )
                .service(
                    web::scope("/integrations")
                        .service(integrations::webhook)
                        .service(integrations::list_integrations)
                        .service(integrations::connect_integration)
                        .service(integrations::toggle_integration)
                        .service(integrations::delete_integration),
                ),
        );
}
