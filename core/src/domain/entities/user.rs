//! User entity representing a registered account in the BookBarter system.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// A registered user. Login and email are unique within the store.
///
/// `enabled` starts `false` and flips `true` only via successful e-mail
/// verification; disabled accounts with an expired verification token are
/// removed by the daily cleanup sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier; `None` until persisted
    pub id: Option<Uuid>,

    /// First name
    pub name: String,

    /// Last name
    pub last_name: String,

    /// Login, unique within the store
    pub login: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// E-mail address, unique within the store
    pub email: String,

    /// Authorities granted to this user
    pub roles: Vec<Role>,

    /// Whether the account passed e-mail verification
    pub enabled: bool,
}

impl User {
    /// Creates a new, disabled, not-yet-persisted user
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        login: impl Into<String>,
        password_hash: impl Into<String>,
        email: impl Into<String>,
        roles: Vec<Role>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            last_name: last_name.into(),
            login: login.into(),
            password_hash: password_hash.into(),
            email: email.into(),
            roles,
            enabled: false,
        }
    }

    /// Marks the account as verified
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Checks whether the user holds the named authority
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }

    /// Names of all authorities held by this user
    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::role::{ROLE_ADMIN, ROLE_USER};

    fn sample_user() -> User {
        User::new(
            "Jan",
            "Kowalski",
            "jkowalski",
            "$2b$12$hash",
            "jan@example.com",
            vec![Role::new(ROLE_USER)],
        )
    }

    #[test]
    fn test_new_user_is_disabled() {
        let user = sample_user();
        assert_eq!(user.id, None);
        assert!(!user.enabled);
        assert_eq!(user.login, "jkowalski");
    }

    #[test]
    fn test_enable() {
        let mut user = sample_user();
        user.enable();
        assert!(user.enabled);
    }

    #[test]
    fn test_has_role() {
        let user = sample_user();
        assert!(user.has_role(ROLE_USER));
        assert!(!user.has_role(ROLE_ADMIN));
    }

    #[test]
    fn test_role_names() {
        let user = sample_user();
        assert_eq!(user.role_names(), vec!["ROLE_USER".to_string()]);
    }
}
