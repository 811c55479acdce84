//! Outbound mail configuration module

use serde::{Deserialize, Serialize};

/// Outbound e-mail delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Mail provider: "http" for the HTTP API client, "mock" for the
    /// logging sender used in development
    pub provider: String,

    /// HTTP mail API endpoint
    pub api_url: String,

    /// HTTP mail API key
    pub api_key: String,

    /// From address for all outbound mail
    pub from_address: String,

    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            api_url: "http://localhost:8025/api/send".to_string(),
            api_key: String::new(),
            from_address: "no-reply@bookbarter.io".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("MAIL_PROVIDER").unwrap_or(defaults.provider),
            api_url: std::env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("MAIL_API_KEY").unwrap_or_default(),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
