//! E-mail verification token entity.

use chrono::{DateTime, Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Length of the raw token mailed to the user
pub const TOKEN_LENGTH: usize = 32;

/// A one-shot e-mail verification token.
///
/// The raw token is mailed to the user and never stored; only its SHA-256
/// hash is persisted. Tokens are consumed on successful verification and
/// expired tokens are garbage-collected by the daily sweep together with
/// their still-disabled user accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationToken {
    /// Store-assigned identifier; `None` until persisted
    pub id: Option<Uuid>,

    /// SHA-256 hash of the raw token, unique within the store
    pub token_hash: String,

    /// The user awaiting verification
    pub user: Uuid,

    /// Expiry timestamp
    pub expires: DateTime<Utc>,
}

impl VerificationToken {
    /// Generates a fresh token for `user` valid for `expiry_hours`.
    ///
    /// Returns the raw token (to be mailed) together with the entity holding
    /// its hash (to be persisted).
    pub fn generate(user: Uuid, expiry_hours: i64) -> (String, Self) {
        let raw: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();

        let token = Self {
            id: None,
            token_hash: Self::hash_token(&raw),
            user,
            expires: Utc::now() + Duration::hours(expiry_hours),
        };

        (raw, token)
    }

    /// Hash a raw token value using SHA-256
    pub fn hash_token(raw: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Whether the token is past its expiry at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token() {
        let user_id = Uuid::new_v4();
        let (raw, token) = VerificationToken::generate(user_id, 24);

        assert_eq!(raw.len(), TOKEN_LENGTH);
        assert_eq!(token.id, None);
        assert_eq!(token.user, user_id);
        assert_eq!(token.token_hash, VerificationToken::hash_token(&raw));
        assert!(!token.is_expired(Utc::now()));
    }

    #[test]
    fn test_raw_token_is_not_stored() {
        let (raw, token) = VerificationToken::generate(Uuid::new_v4(), 24);
        assert_ne!(raw, token.token_hash);
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(
            VerificationToken::hash_token("abc"),
            VerificationToken::hash_token("abc")
        );
        assert_ne!(
            VerificationToken::hash_token("abc"),
            VerificationToken::hash_token("abd")
        );
    }

    #[test]
    fn test_expired_token() {
        let (_, mut token) = VerificationToken::generate(Uuid::new_v4(), 24);
        token.expires = Utc::now() - Duration::hours(1);
        assert!(token.is_expired(Utc::now()));
    }
}
