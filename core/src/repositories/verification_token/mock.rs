//! Mock implementation of VerificationTokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::RepositoryError;

use super::trait_::VerificationTokenRepository;

/// Mock verification token repository for testing
pub struct MockVerificationTokenRepository {
    tokens: Arc<RwLock<HashMap<Uuid, VerificationToken>>>,
}

impl MockVerificationTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored tokens
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }
}

impl Default for MockVerificationTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationTokenRepository for MockVerificationTokenRepository {
    async fn create(
        &self,
        mut token: VerificationToken,
    ) -> Result<VerificationToken, RepositoryError> {
        let mut tokens = self.tokens.write().await;

        if tokens.values().any(|t| t.token_hash == token.token_hash) {
            return Err(RepositoryError::Duplicate {
                field: "token".to_string(),
            });
        }

        let id = Uuid::new_v4();
        token.id = Some(id);
        tokens.insert(id, token.clone());
        Ok(token)
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<VerificationToken>, RepositoryError> {
        Ok(self
            .tokens
            .read()
            .await
            .values()
            .find(|t| t.token_hash == token_hash)
            .cloned())
    }

    async fn find_expired(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<VerificationToken>, RepositoryError> {
        Ok(self
            .tokens
            .read()
            .await
            .values()
            .filter(|t| t.expires < now)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<VerificationToken>, RepositoryError> {
        Ok(self.tokens.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.tokens.write().await.remove(&id);
        Ok(())
    }
}
