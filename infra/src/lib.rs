//! # Infrastructure Layer
//!
//! Concrete implementations of the BookBarter storage and delivery
//! boundaries:
//! - **Database**: MySQL repositories using SQLx
//! - **Storage**: blob store for offer attachments
//! - **Email**: verification mail delivery (HTTP API client and mock)

pub mod database;
pub mod email;
pub mod storage;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or migration error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
