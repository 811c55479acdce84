//! Domain-specific error types and error handling.

use thiserror::Error;

/// Errors surfaced by the storage boundary (repositories and the blob store)
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("duplicate value for {field}")]
    Duplicate { field: String },

    #[error("storage error: {message}")]
    Storage { message: String },
}

/// Service-level failures, one per CRUD verb
///
/// Every service operation that touches the store maps its failure into one
/// of these four kinds, wrapping the underlying error with a human-readable
/// message. The failed call leaves the store unmodified and the caller
/// decides how to surface it; nothing here is retried.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A read or lookup failed, or the target was not found
    #[error("{message}")]
    Get { message: String },

    /// An insert failed
    #[error("{message}")]
    Add { message: String },

    /// An update failed, including the "id must be present" precondition
    #[error("{message}")]
    Modify { message: String },

    /// A delete failed
    #[error("{message}")]
    Delete { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("invalid token")]
    Invalid,

    #[error("token generation failed: {message}")]
    Generation { message: String },
}

/// Account and authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid login or password")]
    InvalidCredentials,

    #[error("account is not enabled")]
    AccountDisabled,

    #[error("login already taken")]
    LoginTaken,

    #[error("email already registered")]
    EmailTaken,

    #[error("invalid verification token")]
    InvalidVerificationToken,

    #[error("verification token expired")]
    VerificationTokenExpired,

    #[error("old password does not match")]
    PasswordMismatch,

    #[error("user not found")]
    UserNotFound,

    #[error("email delivery failed: {message}")]
    EmailDelivery { message: String },

    #[error("password hashing failed: {message}")]
    Hashing { message: String },

    #[error("storage failure: {message}")]
    Storage { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_messages() {
        let error = ServiceError::Get {
            message: "could not get offer by id: record not found".to_string(),
        };
        assert!(error.to_string().contains("could not get offer"));
    }

    #[test]
    fn test_repository_error_display() {
        let error = RepositoryError::Duplicate {
            field: "login".to_string(),
        };
        assert_eq!(error.to_string(), "duplicate value for login");
    }

    #[test]
    fn test_auth_error_from_token_error() {
        let error: AuthError = TokenError::Expired.into();
        assert_eq!(error.to_string(), "token expired");
    }
}
