//! Authentication configuration module

use serde::{Deserialize, Serialize};

/// JWT token configuration
///
/// Threaded into the token issuer at construction time; there is no global
/// mutable expiry anywhere.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// JWT signing secret
    pub secret: String,

    /// JWT issuer claim
    pub issuer: String,

    /// Access token expiry in minutes
    pub expiry_minutes: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            issuer: "bookbarter".to_string(),
            expiry_minutes: 60,
        }
    }
}

impl TokenConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            expiry_minutes: std::env::var("JWT_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.expiry_minutes),
        }
    }
}

/// Account service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT token configuration
    #[serde(default)]
    pub token: TokenConfig,

    /// Lifetime of e-mail verification tokens in hours
    #[serde(default = "default_verification_expiry_hours")]
    pub verification_token_expiry_hours: i64,

    /// bcrypt cost factor for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: TokenConfig::default(),
            verification_token_expiry_hours: default_verification_expiry_hours(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            token: TokenConfig::from_env(),
            verification_token_expiry_hours: std::env::var("VERIFICATION_TOKEN_EXPIRY_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.verification_token_expiry_hours),
            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.bcrypt_cost),
        }
    }
}

fn default_verification_expiry_hours() -> i64 {
    24
}

fn default_bcrypt_cost() -> u32 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_default() {
        let config = TokenConfig::default();
        assert_eq!(config.issuer, "bookbarter");
        assert_eq!(config.expiry_minutes, 60);
    }

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert_eq!(config.verification_token_expiry_hours, 24);
        assert_eq!(config.bcrypt_cost, 12);
    }
}
