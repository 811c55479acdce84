//! Verification token repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::RepositoryError;

/// Repository contract for e-mail verification tokens
#[async_trait]
pub trait VerificationTokenRepository: Send + Sync {
    /// Insert a new token; the store assigns the id
    async fn create(&self, token: VerificationToken)
        -> Result<VerificationToken, RepositoryError>;

    /// Find a token by the hash of its raw value
    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<VerificationToken>, RepositoryError>;

    /// All tokens whose expiry lies strictly before `now`
    async fn find_expired(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<VerificationToken>, RepositoryError>;

    /// Unordered full scan
    async fn find_all(&self) -> Result<Vec<VerificationToken>, RepositoryError>;

    /// Delete a token by id; deleting a missing id is a no-op
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
