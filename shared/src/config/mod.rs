//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Password hashing, verification tokens and JWT configuration
//! - `cleanup` - Scheduled verification-token cleanup configuration
//! - `database` - Database connection and pool configuration
//! - `mail` - Outbound e-mail delivery configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod cleanup;
pub mod database;
pub mod mail;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, TokenConfig};
pub use cleanup::CleanupConfig;
pub use database::DatabaseConfig;
pub use mail::MailConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Outbound mail configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Verification-token cleanup configuration
    #[serde(default)]
    pub cleanup: CleanupConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load every sub-configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            mail: MailConfig::from_env(),
            cleanup: CleanupConfig::from_env(),
            cors: CorsConfig::default(),
        }
    }
}
