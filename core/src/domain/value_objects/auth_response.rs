//! Authentication response returned by a successful login.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed JWT access token
    pub access_token: String,

    /// Identifier of the authenticated user
    pub user_id: Uuid,

    /// Login of the authenticated user
    pub login: String,

    /// Authority names held by the user
    pub roles: Vec<String>,
}
