//! JWT authentication extractor.
//!
//! Handlers that require a caller take an [`AuthContext`] parameter; the
//! extractor reads the bearer token from the Authorization header and
//! verifies it against the token issuer held in the application state.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};
use uuid::Uuid;

use bb_core::domain::entities::role::ROLE_ADMIN;

use crate::handlers::ApiError;
use crate::state::AppState;

/// Authenticated caller context injected into handlers
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the JWT claims
    pub user_id: Uuid,
    /// Login of the authenticated user
    pub login: String,
    /// Authority names held by the user
    pub roles: Vec<String>,
}

impl AuthContext {
    /// Whether the caller holds the admin authority
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_ADMIN)
    }
}

impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_context(req))
    }
}

fn extract_context(req: &HttpRequest) -> Result<AuthContext, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or(ApiError::Unauthorized)?;

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;

    let claims = state
        .token_issuer
        .verify(token)
        .map_err(|_| ApiError::Unauthorized)?;
    let user_id = claims.user_id().map_err(|_| ApiError::Unauthorized)?;

    Ok(AuthContext {
        user_id,
        login: claims.login,
        roles: claims.roles,
    })
}
