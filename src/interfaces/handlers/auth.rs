use actix_web::{get, post, put, web, HttpResponse, Responder};

use crate::entities::token::RefreshTokenRequest;
use crate::entities::user::{LoginUser, NewUser, UpdateProfile};
use crate::handlers::respond;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    user: web::Json<NewUser>,
) -> impl Responder {
    match state.auth_handler.register(user.into_inner()).await {
        Ok(response) => respond::created(response),
        Err(e) => e.to_http_response(),
    }
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    user: web::Json<LoginUser>,
) -> impl Responder {
    match state.auth_handler.login(user.into_inner()).await {
        Ok(auth_response) => respond::ok(auth_response),
        Err(e) => HttpResponse::from_error(e),
    }
}

#[post("/refresh-token")]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> impl Responder {
    match state.auth_handler.refresh_token(&request.refresh_token).await {
        Ok(auth_response) => respond::ok(auth_response),
        Err(e) => HttpResponse::from_error(e),
    }
}

#[get("/me")]
pub async fn me(state: web::Data<AppState>, claims: AuthClaims) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state.auth_handler.me(&user_id).await {
        Ok(user) => respond::ok(user),
        Err(e) => e.to_http_response(),
    }
}

#[put("/profile")]
pub async fn update_profile(
    state: web::Data<AppState>,
    claims: AuthClaims,
    update: web::Json<UpdateProfile>,
) -> impl Responder {
    let user_id = match claims.0.user_id() {
        Ok(id) => id,
        Err(e) => return HttpResponse::from_error(e),
    };

    match state
        .auth_handler
        .update_profile(&user_id, update.into_inner())
        .await
    {
        Ok(user) => respond::ok(user),
        Err(e) => e.to_http_response(),
    }
}
