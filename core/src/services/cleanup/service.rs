//! Verification-token cleanup service.
//!
//! The only background behavior in the system: a recurring sweep that finds
//! verification tokens past expiry and deletes them together with their
//! still-disabled user accounts. A cycle that fails is logged and not
//! retried; the next scheduled run starts fresh.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use bb_shared::config::CleanupConfig;

use crate::errors::RepositoryError;
use crate::repositories::{UserRepository, VerificationTokenRepository};

/// Service sweeping expired verification tokens and unverified accounts.
///
/// The sweep is not synchronized against concurrent verification: a user who
/// verifies between the scan and the delete can still be removed. Accepted
/// as a known limitation.
pub struct CleanupService<V, U>
where
    V: VerificationTokenRepository + ?Sized + 'static,
    U: UserRepository + ?Sized + 'static,
{
    token_repository: Arc<V>,
    user_repository: Arc<U>,
    config: CleanupConfig,
}

impl<V, U> CleanupService<V, U>
where
    V: VerificationTokenRepository + ?Sized + 'static,
    U: UserRepository + ?Sized + 'static,
{
    /// Create a new cleanup service
    pub fn new(token_repository: Arc<V>, user_repository: Arc<U>, config: CleanupConfig) -> Self {
        Self {
            token_repository,
            user_repository,
            config,
        }
    }

    /// Run a single cleanup cycle.
    ///
    /// For every token past expiry: delete the owning user when it is still
    /// disabled, then delete the token. Errors on individual records are
    /// collected and the cycle continues.
    pub async fn run_cleanup(&self) -> Result<CleanupResult, RepositoryError> {
        if !self.config.enabled {
            return Ok(CleanupResult::default());
        }

        info!("starting verification-token cleanup cycle");
        let mut result = CleanupResult::default();

        let expired = self.token_repository.find_expired(Utc::now()).await?;

        for token in expired {
            match self.user_repository.find_by_id(token.user).await {
                Ok(Some(user)) if !user.enabled => {
                    if let Some(user_id) = user.id {
                        match self.user_repository.delete(user_id).await {
                            Ok(()) => result.users_deleted += 1,
                            Err(e) => {
                                error!("failed to delete unverified user {}: {}", user_id, e);
                                result.errors.push(format!("user {}: {}", user_id, e));
                                continue;
                            }
                        }
                    }
                }
                Ok(_) => {
                    // Verified or already gone; only the stale token remains
                }
                Err(e) => {
                    error!("failed to look up user {}: {}", token.user, e);
                    result.errors.push(format!("user {}: {}", token.user, e));
                    continue;
                }
            }

            if let Some(token_id) = token.id {
                match self.token_repository.delete(token_id).await {
                    Ok(()) => result.tokens_deleted += 1,
                    Err(e) => {
                        error!("failed to delete verification token {}: {}", token_id, e);
                        result.errors.push(format!("token {}: {}", token_id, e));
                    }
                }
            }
        }

        info!(
            "cleanup completed - tokens: {}, users: {}",
            result.tokens_deleted, result.users_deleted
        );

        Ok(result)
    }

    /// Start the cleanup service as a background task.
    ///
    /// Spawns a tokio task that runs cleanup at the configured interval,
    /// independent of request handling.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("verification-token cleanup is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                match self.run_cleanup().await {
                    Ok(result) => {
                        if !result.errors.is_empty() {
                            warn!("cleanup completed with errors: {:?}", result.errors);
                        }
                    }
                    Err(e) => {
                        error!("cleanup cycle failed: {}", e);
                    }
                }
            }
        });
    }
}

/// Result of a cleanup cycle
#[derive(Debug, Default)]
pub struct CleanupResult {
    /// Number of expired verification tokens deleted
    pub tokens_deleted: usize,

    /// Number of never-verified user accounts deleted
    pub users_deleted: usize,

    /// Any errors encountered during the cycle
    pub errors: Vec<String>,
}

impl CleanupResult {
    /// Check if the cycle finished without errors
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
