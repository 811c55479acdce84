//! Role entity: a named authority assigned to users.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role granted to every registered user
pub const ROLE_USER: &str = "ROLE_USER";

/// Role required for administrative operations
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// A named authority (e.g. "ROLE_USER"). Immutable once assigned except by
/// explicit admin modify/delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Store-assigned identifier; `None` until persisted
    pub id: Option<Uuid>,

    /// Authority name, unique within the store
    pub name: String,
}

impl Role {
    /// Creates a new, not-yet-persisted role
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_role_has_no_id() {
        let role = Role::new(ROLE_USER);
        assert_eq!(role.id, None);
        assert_eq!(role.name, "ROLE_USER");
    }
}
