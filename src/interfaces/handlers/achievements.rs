use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::entities::achievement::{AchievementFilter, NewAchievement, UpdateAchievement};
use crate::handlers::respond;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[get("")]
pub async fn list_achievements(
    state: web::Data<AppState>,
    claims: AuthClaims,
    filter: web::Query<AchievementFilter>,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.achievement_handler.list(&user_id, &filter).await {
        Ok(achievements) => respond::ok_with_count(achievements),
        Err(e) => e.to_http_response(),
    }
}

#[get("/stats")]
pub async fn achievement_stats(
    state: web::Data<AppState>,
    claims: AuthClaims,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.achievement_handler.stats(&user_id).await {
        Ok(stats) => respond::ok(stats),
        Err(e) => e.to_http_response(),
    }
}

#[get("/{id}")]
pub async fn get_achievement(
    state: web::Data<AppState>,
    claims: AuthClaims,
    id: web::Path<Uuid>,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.achievement_handler.get(&user_id, &id).await {
        Ok(achievement) => respond::ok(achievement),
        Err(e) => e.to_http_response(),
    }
}

/// The resume refresh runs synchronously before the response; a refresh
/// failure fails the whole request.
#[post("")]
pub async fn create_achievement(
    state: web::Data<AppState>,
    claims: AuthClaims,
    achievement: web::Json<NewAchievement>,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state
        .achievement_handler
        .create(&user_id, achievement.into_inner())
        .await
    {
        Ok(achievement) => respond::created(achievement),
        Err(e) => e.to_http_response(),
    }
}

#[put("/{id}")]
pub async fn update_achievement(
    state: web::Data<AppState>,
    claims: AuthClaims,
    id: web::Path<Uuid>,
    update: web::Json<UpdateAchievement>,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state
        .achievement_handler
        .update(&user_id, &id, update.into_inner())
        .await
    {
        Ok(achievement) => respond::ok(achievement),
        Err(e) => e.to_http_response(),
    }
}

#[delete("/{id}")]
pub async fn delete_achievement(
    state: web::Data<AppState>,
    claims: AuthClaims,
    id: web::Path<Uuid>,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.achievement_handler.delete(&user_id, &id).await {
        Ok(()) => respond::ok_message("Achievement removed"),
        Err(e) => e.to_http_response(),
    }
}
