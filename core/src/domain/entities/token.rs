//! JWT claims for issued access tokens.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Login of the authenticated user
    pub login: String,

    /// Authority names held by the user
    pub roles: Vec<String>,

    /// Whether the account passed e-mail verification
    pub enabled: bool,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new(
        user_id: Uuid,
        login: impl Into<String>,
        roles: Vec<String>,
        enabled: bool,
        issuer: impl Into<String>,
        expiry_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.into(),
            jti: Uuid::new_v4().to_string(),
            login: login.into(),
            roles,
            enabled,
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Checks whether the claims carry the named authority
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r == name)
    }
}
