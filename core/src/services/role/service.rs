//! Role service implementation.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::role::Role;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::RoleRepository;

/// Plain CRUD over roles with one extra lookup by name.
///
/// Roles are immutable once assigned except by explicit admin modify/delete;
/// the controller layer restricts every mutation here to administrators.
pub struct RoleService<R: RoleRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: RoleRepository + ?Sized> RoleService<R> {
    /// Create a new role service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get a single role by id; a missing role is a GetFailure
    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<Role> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get role {}: {}", id, e),
            })?
            .ok_or_else(|| ServiceError::Get {
                message: format!("role {} not found", id),
            })
    }

    /// Get a single role by name; a missing name is a GetFailure
    pub async fn get_by_name(&self, name: &str) -> ServiceResult<Role> {
        self.repository
            .find_by_name(name)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get role by name: {}", e),
            })?
            .ok_or_else(|| ServiceError::Get {
                message: format!("role '{}' not found", name),
            })
    }

    /// Unordered full scan
    pub async fn get_all(&self) -> ServiceResult<Vec<Role>> {
        self.repository
            .find_all()
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get roles: {}", e),
            })
    }

    /// Insert a new role; the store assigns the id
    pub async fn add(&self, role: Role) -> ServiceResult<Role> {
        self.repository
            .create(role)
            .await
            .map_err(|e| ServiceError::Add {
                message: format!("could not add role: {}", e),
            })
    }

    /// Upsert a role by id; the id must be present
    pub async fn modify(&self, role: Role) -> ServiceResult<Role> {
        if role.id.is_none() {
            return Err(ServiceError::Modify {
                message: "role id is required for modify".to_string(),
            });
        }
        self.repository
            .save(role)
            .await
            .map_err(|e| ServiceError::Modify {
                message: format!("could not modify role: {}", e),
            })
    }

    /// Delete a role by id; deleting a missing id is not an error
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| ServiceError::Delete {
                message: format!("could not delete role {}: {}", id, e),
            })
    }
}
