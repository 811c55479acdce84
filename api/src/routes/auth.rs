//! Account endpoints: register, verify, login, change password.

use actix_web::{web, HttpResponse};
use tracing::info;

use bb_core::services::auth::mask_email;

use crate::dto::auth::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, UserResponse, VerifyQuery,
};
use crate::handlers::{validate, ApiError};
use crate::middleware::AuthContext;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/verify", web::post().to(verify))
            .route("/login", web::post().to(login))
            .route("/change-password", web::post().to(change_password)),
    );
}

async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    validate(&request)?;

    info!("registration request for {}", mask_email(&request.email));
    let user = state.auth.register(request.into()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

async fn verify(
    state: web::Data<AppState>,
    query: web::Query<VerifyQuery>,
) -> Result<HttpResponse, ApiError> {
    let user = state.auth.verify_email(&query.token).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    validate(&request)?;

    let response = state.auth.login(&request.login, &request.password).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn change_password(
    state: web::Data<AppState>,
    ctx: AuthContext,
    body: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    validate(&request)?;

    state
        .auth
        .change_password(ctx.user_id, &request.old_password, &request.new_password)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
