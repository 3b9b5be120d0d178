use actix_web::{middleware::NormalizePath, test, web, App};
use sqlx::postgres::PgPoolOptions;
use tracing_actix_web::TracingLogger;

use resume_ecosystem_backend::middlewares::auth::AuthMiddleware;
use resume_ecosystem_backend::routes::configure_routes;
use resume_ecosystem_backend::settings::{AppConfig, AppEnvironment};
use resume_ecosystem_backend::AppState;

fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Resume-Ecosystem-API".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        worker_count: 1,
        database_url: "postgres://localhost/unused".to_string(),
        cors_allowed_origins: vec!["*".to_string()],
        jwt_secret: "jwt-test-secret-jwt-test-secret-jwt-test".to_string(),
        jwt_expiration_minutes: 15,
        refresh_token_secret: "refresh-test-secret-refresh-test-secret!".to_string(),
        refresh_token_exp_days: 7,
    }
}

/// App with the same middleware composition as the binary; the pool is lazy
/// so nothing here touches a database.
macro_rules! test_app {
    () => {{
        let config = test_config();
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .unwrap();
        let state = web::Data::new(AppState::new(&config, pool));

        test::init_service(
            App::new()
                .app_data(state)
                .wrap(NormalizePath::trim())
                .wrap(AuthMiddleware)
                .wrap(TracingLogger::default())
                .configure(configure_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn home_is_public() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let res = test::call_service(&app, req).await;

    assert!(res.status().is_success());
}

#[actix_web::test]
async fn protected_route_without_token_gets_envelope_401() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/achievements").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 401);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn incomplete_json_body_gets_envelope_400() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/integrations/webhook")
        .set_json(serde_json::json!({ "platform": "github" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 400);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}
