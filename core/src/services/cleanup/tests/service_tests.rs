//! Unit tests for the cleanup service

use std::sync::Arc;

use chrono::{Duration, Utc};

use bb_shared::config::CleanupConfig;

use crate::domain::entities::role::{Role, ROLE_USER};
use crate::domain::entities::user::User;
use crate::domain::entities::verification_token::VerificationToken;
use crate::repositories::user::MockUserRepository;
use crate::repositories::verification_token::MockVerificationTokenRepository;
use crate::repositories::{UserRepository, VerificationTokenRepository};
use crate::services::cleanup::CleanupService;

struct TestFixture {
    service: CleanupService<MockVerificationTokenRepository, MockUserRepository>,
    users: Arc<MockUserRepository>,
    tokens: Arc<MockVerificationTokenRepository>,
}

fn fixture(config: CleanupConfig) -> TestFixture {
    let users = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(MockVerificationTokenRepository::new());
    let service = CleanupService::new(tokens.clone(), users.clone(), config);
    TestFixture {
        service,
        users,
        tokens,
    }
}

async fn seed_user(users: &MockUserRepository, login: &str, enabled: bool) -> User {
    let mut user = User::new(
        "Jan",
        "Kowalski",
        login,
        "$2b$04$hash",
        format!("{}@example.com", login),
        vec![Role::new(ROLE_USER)],
    );
    if enabled {
        user.enable();
    }
    users.create(user).await.unwrap()
}

async fn seed_token(
    tokens: &MockVerificationTokenRepository,
    user: &User,
    expired: bool,
) -> VerificationToken {
    let (_, mut token) = VerificationToken::generate(user.id.unwrap(), 24);
    if expired {
        token.expires = Utc::now() - Duration::hours(1);
    }
    tokens.create(token).await.unwrap()
}

#[tokio::test]
async fn test_expired_token_of_disabled_user_removes_both() {
    let f = fixture(CleanupConfig::default());

    let user = seed_user(&f.users, "unverified", false).await;
    seed_token(&f.tokens, &user, true).await;

    let result = f.service.run_cleanup().await.unwrap();

    assert!(result.is_success());
    assert_eq!(result.tokens_deleted, 1);
    assert_eq!(result.users_deleted, 1);
    assert!(f.users.is_empty().await);
    assert_eq!(f.tokens.len().await, 0);
}

#[tokio::test]
async fn test_expired_token_of_enabled_user_keeps_the_user() {
    let f = fixture(CleanupConfig::default());

    let user = seed_user(&f.users, "verified", true).await;
    seed_token(&f.tokens, &user, true).await;

    let result = f.service.run_cleanup().await.unwrap();

    assert_eq!(result.tokens_deleted, 1);
    assert_eq!(result.users_deleted, 0);
    assert_eq!(f.users.len().await, 1);
}

#[tokio::test]
async fn test_unexpired_tokens_are_untouched() {
    let f = fixture(CleanupConfig::default());

    let user = seed_user(&f.users, "pending", false).await;
    seed_token(&f.tokens, &user, false).await;

    let result = f.service.run_cleanup().await.unwrap();

    assert_eq!(result.tokens_deleted, 0);
    assert_eq!(result.users_deleted, 0);
    assert_eq!(f.tokens.len().await, 1);
    assert_eq!(f.users.len().await, 1);
}

#[tokio::test]
async fn test_dangling_token_is_still_removed() {
    let f = fixture(CleanupConfig::default());

    // Token whose user was deleted out from under it
    let user = seed_user(&f.users, "gone", false).await;
    seed_token(&f.tokens, &user, true).await;
    f.users.delete(user.id.unwrap()).await.unwrap();

    let result = f.service.run_cleanup().await.unwrap();

    assert_eq!(result.tokens_deleted, 1);
    assert_eq!(result.users_deleted, 0);
}

#[tokio::test]
async fn test_disabled_config_skips_the_sweep() {
    let f = fixture(CleanupConfig {
        enabled: false,
        ..CleanupConfig::default()
    });

    let user = seed_user(&f.users, "unverified", false).await;
    seed_token(&f.tokens, &user, true).await;

    let result = f.service.run_cleanup().await.unwrap();

    assert_eq!(result.tokens_deleted, 0);
    assert_eq!(f.tokens.len().await, 1);
}
