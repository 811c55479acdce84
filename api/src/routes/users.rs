//! User endpoints.

use actix_web::{web, HttpResponse};

use crate::dto::auth::UserResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").route("/me", web::get().to(me)));
}

async fn me(state: web::Data<AppState>, ctx: AuthContext) -> Result<HttpResponse, ApiError> {
    let user = state.auth.get_user(ctx.user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
