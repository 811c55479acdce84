//! Unit tests for the account service

use std::sync::Arc;

use bb_shared::config::{AuthConfig, TokenConfig};

use crate::errors::AuthError;
use crate::repositories::role::MockRoleRepository;
use crate::repositories::UserRepository;
use crate::repositories::user::MockUserRepository;
use crate::repositories::verification_token::MockVerificationTokenRepository;
use crate::services::auth::{AuthService, RegisterUser};
use crate::services::token::TokenIssuer;

use super::mocks::MockEmailSender;

type TestAuthService = AuthService<
    MockUserRepository,
    MockRoleRepository,
    MockVerificationTokenRepository,
    MockEmailSender,
>;

struct TestFixture {
    service: TestAuthService,
    users: Arc<MockUserRepository>,
    tokens: Arc<MockVerificationTokenRepository>,
    mails: Arc<MockEmailSender>,
}

fn fixture() -> TestFixture {
    fixture_with_mail_failure(false)
}

fn fixture_with_mail_failure(mail_fails: bool) -> TestFixture {
    let users = Arc::new(MockUserRepository::new());
    let roles = Arc::new(MockRoleRepository::new());
    let tokens = Arc::new(MockVerificationTokenRepository::new());
    let mails = Arc::new(MockEmailSender::new(mail_fails));

    let config = AuthConfig {
        token: TokenConfig {
            secret: "test-secret".to_string(),
            issuer: "bookbarter-test".to_string(),
            expiry_minutes: 30,
        },
        verification_token_expiry_hours: 24,
        bcrypt_cost: 4, // keep the tests fast
    };
    let issuer = Arc::new(TokenIssuer::new(config.token.clone()));

    let service = AuthService::new(
        users.clone(),
        roles,
        tokens.clone(),
        mails.clone(),
        issuer,
        config,
    );

    TestFixture {
        service,
        users,
        tokens,
        mails,
    }
}

fn registration() -> RegisterUser {
    RegisterUser {
        name: "Jan".to_string(),
        last_name: "Kowalski".to_string(),
        login: "jkowalski".to_string(),
        password: "tajne haslo".to_string(),
        email: "jan@example.com".to_string(),
    }
}

#[tokio::test]
async fn test_register_creates_disabled_user_with_default_role() {
    let f = fixture();

    let user = f.service.register(registration()).await.unwrap();

    assert!(user.id.is_some());
    assert!(!user.enabled);
    assert!(user.has_role("ROLE_USER"));
    // The password is stored hashed
    assert_ne!(user.password_hash, "tajne haslo");
    // A token was persisted and a mail went out
    assert_eq!(f.tokens.len().await, 1);
    assert_eq!(f.mails.sent_count().await, 1);
}

#[tokio::test]
async fn test_register_rejects_taken_login() {
    let f = fixture();
    f.service.register(registration()).await.unwrap();

    let mut second = registration();
    second.email = "other@example.com".to_string();

    assert!(matches!(
        f.service.register(second).await,
        Err(AuthError::LoginTaken)
    ));
}

#[tokio::test]
async fn test_register_rejects_taken_email() {
    let f = fixture();
    f.service.register(registration()).await.unwrap();

    let mut second = registration();
    second.login = "jnowak".to_string();

    assert!(matches!(
        f.service.register(second).await,
        Err(AuthError::EmailTaken)
    ));
}

#[tokio::test]
async fn test_register_surfaces_mail_failure() {
    let f = fixture_with_mail_failure(true);

    assert!(matches!(
        f.service.register(registration()).await,
        Err(AuthError::EmailDelivery { .. })
    ));
}

#[tokio::test]
async fn test_verify_email_enables_user_and_consumes_token() {
    let f = fixture();
    let user = f.service.register(registration()).await.unwrap();
    let raw_token = f.mails.sent_token(&user.email).await.unwrap();

    let verified = f.service.verify_email(&raw_token).await.unwrap();

    assert!(verified.enabled);
    assert_eq!(f.tokens.len().await, 0);

    // The token is single-use
    assert!(matches!(
        f.service.verify_email(&raw_token).await,
        Err(AuthError::InvalidVerificationToken)
    ));
}

#[tokio::test]
async fn test_verify_email_rejects_unknown_token() {
    let f = fixture();

    assert!(matches!(
        f.service.verify_email("nonsense").await,
        Err(AuthError::InvalidVerificationToken)
    ));
}

#[tokio::test]
async fn test_login_before_verification_is_rejected() {
    let f = fixture();
    f.service.register(registration()).await.unwrap();

    assert!(matches!(
        f.service.login("jkowalski", "tajne haslo").await,
        Err(AuthError::AccountDisabled)
    ));
}

#[tokio::test]
async fn test_login_after_verification_issues_token() {
    let f = fixture();
    let user = f.service.register(registration()).await.unwrap();
    let raw_token = f.mails.sent_token(&user.email).await.unwrap();
    f.service.verify_email(&raw_token).await.unwrap();

    let response = f.service.login("jkowalski", "tajne haslo").await.unwrap();

    assert!(!response.access_token.is_empty());
    assert_eq!(response.login, "jkowalski");
    assert_eq!(response.roles, vec!["ROLE_USER".to_string()]);
}

#[tokio::test]
async fn test_login_with_wrong_password_is_rejected() {
    let f = fixture();
    let user = f.service.register(registration()).await.unwrap();
    let raw_token = f.mails.sent_token(&user.email).await.unwrap();
    f.service.verify_email(&raw_token).await.unwrap();

    assert!(matches!(
        f.service.login("jkowalski", "zle haslo").await,
        Err(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_change_password_requires_matching_old_password() {
    let f = fixture();
    let user = f.service.register(registration()).await.unwrap();
    let user_id = user.id.unwrap();

    assert!(matches!(
        f.service
            .change_password(user_id, "zle haslo", "nowe haslo")
            .await,
        Err(AuthError::PasswordMismatch)
    ));

    f.service
        .change_password(user_id, "tajne haslo", "nowe haslo")
        .await
        .unwrap();

    // The stored hash now verifies against the new password
    let stored = f.users.find_by_id(user_id).await.unwrap().unwrap();
    assert!(bcrypt::verify("nowe haslo", &stored.password_hash).unwrap());
}

#[tokio::test]
async fn test_get_user_unknown_id_is_not_found() {
    let f = fixture();

    assert!(matches!(
        f.service.get_user(uuid::Uuid::new_v4()).await,
        Err(AuthError::UserNotFound)
    ));
}
