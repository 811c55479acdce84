//! Main account service implementation.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use bb_shared::config::AuthConfig;

use crate::domain::entities::role::{Role, ROLE_USER};
use crate::domain::entities::user::User;
use crate::domain::entities::verification_token::VerificationToken;
use crate::domain::value_objects::auth_response::AuthResponse;
use crate::errors::AuthError;
use crate::repositories::{RoleRepository, UserRepository, VerificationTokenRepository};
use crate::services::token::TokenIssuer;

use super::traits::EmailSender;

/// Registration request data
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub name: String,
    pub last_name: String,
    pub login: String,
    pub password: String,
    pub email: String,
}

/// Account service managing registration, e-mail verification, login and
/// password changes
pub struct AuthService<U, R, V, E>
where
    U: UserRepository + ?Sized,
    R: RoleRepository + ?Sized,
    V: VerificationTokenRepository + ?Sized,
    E: EmailSender + ?Sized,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Role repository for the default authority lookup
    role_repository: Arc<R>,
    /// Verification token repository
    token_repository: Arc<V>,
    /// Outbound e-mail boundary
    email_sender: Arc<E>,
    /// JWT issuer
    token_issuer: Arc<TokenIssuer>,
    /// Service configuration
    config: AuthConfig,
}

impl<U, R, V, E> AuthService<U, R, V, E>
where
    U: UserRepository + ?Sized,
    R: RoleRepository + ?Sized,
    V: VerificationTokenRepository + ?Sized,
    E: EmailSender + ?Sized,
{
    /// Create a new account service
    pub fn new(
        user_repository: Arc<U>,
        role_repository: Arc<R>,
        token_repository: Arc<V>,
        email_sender: Arc<E>,
        token_issuer: Arc<TokenIssuer>,
        config: AuthConfig,
    ) -> Self {
        Self {
            user_repository,
            role_repository,
            token_repository,
            email_sender,
            token_issuer,
            config,
        }
    }

    /// Register a new account.
    ///
    /// The account is created disabled with the default `ROLE_USER`
    /// authority, a verification token is persisted (hash only) and the raw
    /// token is mailed to the given address.
    pub async fn register(&self, request: RegisterUser) -> Result<User, AuthError> {
        if self
            .user_repository
            .find_by_login(&request.login)
            .await
            .map_err(storage_error)?
            .is_some()
        {
            return Err(AuthError::LoginTaken);
        }
        if self
            .user_repository
            .find_by_email(&request.email)
            .await
            .map_err(storage_error)?
            .is_some()
        {
            return Err(AuthError::EmailTaken);
        }

        let password_hash =
            bcrypt::hash(&request.password, self.config.bcrypt_cost).map_err(|e| {
                AuthError::Hashing {
                    message: e.to_string(),
                }
            })?;

        let default_role = self.default_role().await?;
        let user = User::new(
            request.name,
            request.last_name,
            request.login,
            password_hash,
            request.email,
            vec![default_role],
        );

        let user = self
            .user_repository
            .create(user)
            .await
            .map_err(storage_error)?;
        let user_id = user.id.ok_or_else(|| AuthError::Storage {
            message: "store did not assign a user id".to_string(),
        })?;

        let (raw_token, token) =
            VerificationToken::generate(user_id, self.config.verification_token_expiry_hours);
        self.token_repository
            .create(token)
            .await
            .map_err(storage_error)?;

        let message_id = self
            .email_sender
            .send_verification(&user.email, &raw_token)
            .await
            .map_err(|message| AuthError::EmailDelivery { message })?;

        info!(
            "registered user {} ({}), verification mail {}",
            user.login,
            mask_email(&user.email),
            message_id
        );

        Ok(user)
    }

    /// Consume a verification token: enable the user and delete the token
    pub async fn verify_email(&self, raw_token: &str) -> Result<User, AuthError> {
        let token_hash = VerificationToken::hash_token(raw_token);
        let token = self
            .token_repository
            .find_by_token_hash(&token_hash)
            .await
            .map_err(storage_error)?
            .ok_or(AuthError::InvalidVerificationToken)?;

        if token.is_expired(chrono::Utc::now()) {
            // Left in place for the cleanup sweep
            return Err(AuthError::VerificationTokenExpired);
        }

        let mut user = self
            .user_repository
            .find_by_id(token.user)
            .await
            .map_err(storage_error)?
            .ok_or(AuthError::UserNotFound)?;

        user.enable();
        let user = self
            .user_repository
            .save(user)
            .await
            .map_err(storage_error)?;

        if let Some(token_id) = token.id {
            self.token_repository
                .delete(token_id)
                .await
                .map_err(storage_error)?;
        }

        info!("user {} verified their e-mail", user.login);
        Ok(user)
    }

    /// Authenticate by login and password and issue an access token
    pub async fn login(&self, login: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let user = self
            .user_repository
            .find_by_login(login)
            .await
            .map_err(storage_error)?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = bcrypt::verify(password, &user.password_hash).map_err(|e| {
            AuthError::Hashing {
                message: e.to_string(),
            }
        })?;
        if !matches {
            warn!("failed login attempt for {}", login);
            return Err(AuthError::InvalidCredentials);
        }

        if !user.enabled {
            return Err(AuthError::AccountDisabled);
        }

        let access_token = self.token_issuer.issue(&user)?;
        let user_id = user.id.ok_or_else(|| AuthError::Storage {
            message: "stored user has no id".to_string(),
        })?;

        let roles = user.role_names();
        Ok(AuthResponse {
            access_token,
            user_id,
            login: user.login,
            roles,
        })
    }

    /// Change the password after verifying the old one matches
    pub async fn change_password(
        &self,
        user_id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(storage_error)?
            .ok_or(AuthError::UserNotFound)?;

        let matches = bcrypt::verify(old_password, &user.password_hash).map_err(|e| {
            AuthError::Hashing {
                message: e.to_string(),
            }
        })?;
        if !matches {
            return Err(AuthError::PasswordMismatch);
        }

        user.password_hash =
            bcrypt::hash(new_password, self.config.bcrypt_cost).map_err(|e| AuthError::Hashing {
                message: e.to_string(),
            })?;
        self.user_repository
            .save(user)
            .await
            .map_err(storage_error)?;

        Ok(())
    }

    /// Load a user by id
    pub async fn get_user(&self, user_id: Uuid) -> Result<User, AuthError> {
        self.user_repository
            .find_by_id(user_id)
            .await
            .map_err(storage_error)?
            .ok_or(AuthError::UserNotFound)
    }

    /// The default authority assigned at registration, created on first use
    async fn default_role(&self) -> Result<Role, AuthError> {
        if let Some(role) = self
            .role_repository
            .find_by_name(ROLE_USER)
            .await
            .map_err(storage_error)?
        {
            return Ok(role);
        }
        self.role_repository
            .create(Role::new(ROLE_USER))
            .await
            .map_err(storage_error)
    }
}

fn storage_error(e: crate::errors::RepositoryError) -> AuthError {
    AuthError::Storage {
        message: e.to_string(),
    }
}

/// Mask an e-mail address for logging: keep the first character of the local
/// part and the full domain
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod mask_tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jan@example.com"), "j***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
