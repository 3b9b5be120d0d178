use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::entities::integration::{ConnectIntegration, WebhookPayload};
use crate::handlers::respond;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[get("")]
pub async fn list_integrations(
    state: web::Data<AppState>,
    claims: AuthClaims,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.integration_handler.list(&user_id).await {
        Ok(integrations) => respond::ok_with_count(integrations),
        Err(e) => e.to_http_response(),
    }
}

#[post("")]
pub async fn connect_integration(
    state: web::Data<AppState>,
    claims: AuthClaims,
    request: web::Json<ConnectIntegration>,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state
        .integration_handler
        .connect(&user_id, request.into_inner())
        .await
    {
        Ok(integration) => respond::created(integration),
        Err(e) => e.to_http_response(),
    }
}

/// Public endpoint; the active-integration check is the only gate.
#[post("/webhook")]
pub async fn webhook(
    state: web::Data<AppState>,
    payload: web::Json<WebhookPayload>,
) -> impl Responder {
    match state
        .integration_handler
        .handle_webhook(payload.into_inner())
        .await
    {
        Ok(achievement) => respond::created_with_message(achievement, "Achievement added from webhook"),
        Err(e) => e.to_http_response(),
    }
}

#[patch("/{id}/toggle")]
pub async fn toggle_integration(
    state: web::Data<AppState>,
    claims: AuthClaims,
    id: web::Path<Uuid>,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.integration_handler.toggle(&user_id, &id).await {
        Ok(integration) => respond::ok(integration),
        Err(e) => e.to_http_response(),
    }
}

#[delete("/{id}")]
pub async fn delete_integration(
    state: web::Data<AppState>,
    claims: AuthClaims,
    id: web::Path<Uuid>,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.integration_handler.delete(&user_id, &id).await {
        Ok(()) => respond::ok_message("Integration removed"),
        Err(e) => e.to_http_response(),
    }
}
