//! API error type mapping the four service failure kinds and the account
//! errors to HTTP status codes.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use validator::Validate;

use bb_core::errors::{AuthError, ServiceError};
use bb_shared::types::ErrorResponse;

/// Error surfaced by an API handler
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("{0}")]
    BadRequest(String),

    #[error("authentication required")]
    Unauthorized,

    #[error("insufficient permissions")]
    Forbidden,
}

impl ApiError {
    /// Stable error code for programmatic handling
    fn code(&self) -> &'static str {
        match self {
            ApiError::Service(ServiceError::Get { .. }) => "GET_FAILURE",
            ApiError::Service(ServiceError::Add { .. }) => "ADD_FAILURE",
            ApiError::Service(ServiceError::Modify { .. }) => "MODIFY_FAILURE",
            ApiError::Service(ServiceError::Delete { .. }) => "DELETE_FAILURE",
            ApiError::Auth(AuthError::InvalidCredentials) => "INVALID_CREDENTIALS",
            ApiError::Auth(AuthError::AccountDisabled) => "ACCOUNT_DISABLED",
            ApiError::Auth(AuthError::LoginTaken) => "LOGIN_TAKEN",
            ApiError::Auth(AuthError::EmailTaken) => "EMAIL_TAKEN",
            ApiError::Auth(AuthError::InvalidVerificationToken) => "INVALID_VERIFICATION_TOKEN",
            ApiError::Auth(AuthError::VerificationTokenExpired) => "VERIFICATION_TOKEN_EXPIRED",
            ApiError::Auth(AuthError::PasswordMismatch) => "PASSWORD_MISMATCH",
            ApiError::Auth(AuthError::UserNotFound) => "USER_NOT_FOUND",
            ApiError::Auth(AuthError::Token(_)) => "INVALID_TOKEN",
            ApiError::Auth(_) => "AUTH_FAILURE",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::Forbidden => "FORBIDDEN",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(ServiceError::Get { .. }) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::Modify { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::Add { .. })
            | ApiError::Service(ServiceError::Delete { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            ApiError::Auth(AuthError::AccountDisabled) => StatusCode::FORBIDDEN,
            ApiError::Auth(AuthError::LoginTaken) | ApiError::Auth(AuthError::EmailTaken) => {
                StatusCode::CONFLICT
            }
            ApiError::Auth(AuthError::InvalidVerificationToken)
            | ApiError::Auth(AuthError::VerificationTokenExpired)
            | ApiError::Auth(AuthError::PasswordMismatch) => StatusCode::BAD_REQUEST,
            ApiError::Auth(AuthError::UserNotFound) => StatusCode::NOT_FOUND,
            ApiError::Auth(AuthError::Token(_)) => StatusCode::UNAUTHORIZED,
            ApiError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.code(), self.to_string()))
    }
}

/// Run validator-derive checks, mapping failures to a 400
pub fn validate<T: Validate>(value: &T) -> Result<(), ApiError> {
    value
        .validate()
        .map_err(|e| ApiError::BadRequest(format!("invalid request: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_failure_maps_to_not_found() {
        let error = ApiError::Service(ServiceError::Get {
            message: "offer not found".to_string(),
        });
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_modify_failure_maps_to_bad_request() {
        let error = ApiError::Service(ServiceError::Modify {
            message: "offer id is required for modify".to_string(),
        });
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_add_failure_maps_to_internal_error() {
        let error = ApiError::Service(ServiceError::Add {
            message: "insert failed".to_string(),
        });
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_taken_login_maps_to_conflict() {
        let error = ApiError::Auth(AuthError::LoginTaken);
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }
}
