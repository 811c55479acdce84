//! JWT issue/verify implementation.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use bb_shared::config::TokenConfig;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::TokenError;

/// Issues and verifies HS256 access tokens.
///
/// The expiry is part of [`TokenConfig`] and threaded in at construction;
/// tests build their own configs instead of mutating shared state.
pub struct TokenIssuer {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    /// Creates a new token issuer from its configuration
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues an access token for the given user
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let user_id = user.id.ok_or_else(|| TokenError::Generation {
            message: "user has no id".to_string(),
        })?;

        let claims = Claims::new(
            user_id,
            user.login.clone(),
            user.role_names(),
            user.enabled,
            self.config.issuer.clone(),
            self.config.expiry_minutes,
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            TokenError::Generation {
                message: e.to_string(),
            }
        })
    }

    /// Verifies a token and returns its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}
