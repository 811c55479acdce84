//! Role DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bb_core::domain::entities::role::Role;

/// Request body for POST /roles
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoleRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

/// Request body for PUT /roles/{id}
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    pub id: Uuid,

    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

/// Public view of a role
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.unwrap_or_default(),
            name: role.name,
        }
    }
}
