//! Account and authentication DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bb_core::domain::entities::user::User;
use bb_core::services::RegisterUser;

/// Request body for POST /auth/register
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(length(min = 1, max = 128))]
    pub last_name: String,

    #[validate(length(min = 3, max = 64))]
    pub login: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[validate(email)]
    pub email: String,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(request: RegisterRequest) -> Self {
        Self {
            name: request.name,
            last_name: request.last_name,
            login: request.login,
            password: request.password,
            email: request.email,
        }
    }
}

/// Request body for POST /auth/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub login: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Query parameters for POST /auth/verify
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    pub token: String,
}

/// Request body for POST /auth/change-password
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1))]
    pub old_password: String,

    #[validate(length(min = 8, max = 128))]
    pub new_password: String,
}

/// Public view of a user account
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub login: String,
    pub email: String,
    pub roles: Vec<String>,
    pub enabled: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            roles: user.role_names(),
            name: user.name,
            last_name: user.last_name,
            login: user.login,
            email: user.email,
            enabled: user.enabled,
        }
    }
}
