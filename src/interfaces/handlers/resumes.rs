use actix_web::{get, patch, post, put, web, HttpResponse, Responder};

use crate::entities::resume::{SummaryResponse, UpdateResume, UpdateVisibility};
use crate::handlers::respond;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[get("")]
pub async fn get_resume(state: web::Data<AppState>, claims: AuthClaims) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.resume_handler.get(&user_id).await {
        Ok(resume) => respond::ok(resume),
        Err(e) => e.to_http_response(),
    }
}

#[put("")]
pub async fn update_resume(
    state: web::Data<AppState>,
    claims: AuthClaims,
    update: web::Json<UpdateResume>,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state
        .resume_handler
        .update(&user_id, update.into_inner())
        .await
    {
        Ok(resume) => respond::ok(resume),
        Err(e) => e.to_http_response(),
    }
}

#[patch("/visibility")]
pub async fn update_visibility(
    state: web::Data<AppState>,
    claims: AuthClaims,
    update: web::Json<UpdateVisibility>,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state
        .resume_handler
        .update_visibility(&user_id, update.into_inner())
        .await
    {
        Ok(resume) => respond::ok(resume),
        Err(e) => e.to_http_response(),
    }
}

#[post("/regenerate-summary")]
pub async fn regenerate_summary(
    state: web::Data<AppState>,
    claims: AuthClaims,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.resume_handler.regenerate_summary(&user_id).await {
        Ok(summary) => respond::ok(SummaryResponse { summary }),
        Err(e) => e.to_http_response(),
    }
}

#[get("/preview")]
pub async fn resume_preview(state: web::Data<AppState>, claims: AuthClaims) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.resume_handler.preview(&user_id).await {
        Ok(preview) => respond::ok(preview),
        Err(e) => e.to_http_response(),
    }
}
