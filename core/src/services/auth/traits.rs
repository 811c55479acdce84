//! Trait for outbound e-mail integration

use async_trait::async_trait;

/// Trait for the verification e-mail sender.
///
/// Implementations live in the infrastructure layer; the error type is a
/// plain string because nothing in the core reacts to delivery failures
/// beyond reporting them.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a verification e-mail carrying the raw token; returns a
    /// provider-assigned message id
    async fn send_verification(&self, email: &str, token: &str) -> Result<String, String>;
}
