//! Verification-token cleanup configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the scheduled verification-token cleanup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,

    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 86400, // Run once per day
            enabled: true,
        }
    }
}

impl CleanupConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            interval_seconds: std::env::var("CLEANUP_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.interval_seconds),
            enabled: std::env::var("CLEANUP_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_config_default() {
        let config = CleanupConfig::default();
        assert_eq!(config.interval_seconds, 86400);
        assert!(config.enabled);
    }
}
