//! Unit tests for the token issuer

use bb_shared::config::TokenConfig;

use crate::domain::entities::role::{Role, ROLE_USER};
use crate::domain::entities::user::User;
use crate::errors::TokenError;
use crate::services::token::TokenIssuer;

fn test_config() -> TokenConfig {
    TokenConfig {
        secret: "test-secret".to_string(),
        issuer: "bookbarter-test".to_string(),
        expiry_minutes: 30,
    }
}

fn persisted_user() -> User {
    let mut user = User::new(
        "Jan",
        "Kowalski",
        "jkowalski",
        "$2b$12$hash",
        "jan@example.com",
        vec![Role::new(ROLE_USER)],
    );
    user.id = Some(uuid::Uuid::new_v4());
    user.enable();
    user
}

#[test]
fn test_issue_and_verify_round_trip() {
    let issuer = TokenIssuer::new(test_config());
    let user = persisted_user();

    let token = issuer.issue(&user).unwrap();
    let claims = issuer.verify(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id.unwrap());
    assert_eq!(claims.login, "jkowalski");
    assert!(claims.has_role(ROLE_USER));
    assert!(claims.enabled);
    assert_eq!(claims.iss, "bookbarter-test");
}

#[test]
fn test_expiry_comes_from_config() {
    let issuer = TokenIssuer::new(test_config());
    let token = issuer.issue(&persisted_user()).unwrap();
    let claims = issuer.verify(&token).unwrap();

    assert_eq!(claims.exp - claims.iat, 30 * 60);
}

#[test]
fn test_issue_fails_without_user_id() {
    let issuer = TokenIssuer::new(test_config());
    let user = User::new(
        "Jan",
        "Kowalski",
        "jkowalski",
        "$2b$12$hash",
        "jan@example.com",
        vec![],
    );

    match issuer.issue(&user).unwrap_err() {
        TokenError::Generation { message } => assert!(message.contains("no id")),
        other => panic!("expected generation error, got {:?}", other),
    }
}

#[test]
fn test_verify_rejects_wrong_secret() {
    let issuer = TokenIssuer::new(test_config());
    let token = issuer.issue(&persisted_user()).unwrap();

    let other = TokenIssuer::new(TokenConfig {
        secret: "other-secret".to_string(),
        ..test_config()
    });

    assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
}

#[test]
fn test_verify_rejects_garbage() {
    let issuer = TokenIssuer::new(test_config());
    assert!(issuer.verify("not-a-token").is_err());
}
