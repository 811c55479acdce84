//! Role repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::role::Role;
use crate::errors::RepositoryError;

/// Repository contract for Role entities
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Insert a new role; the store assigns the id
    async fn create(&self, role: Role) -> Result<Role, RepositoryError>;

    /// Upsert a role by its id
    async fn save(&self, role: Role) -> Result<Role, RepositoryError>;

    /// Find a role by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, RepositoryError>;

    /// Find a role by its name
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RepositoryError>;

    /// Unordered full scan
    async fn find_all(&self) -> Result<Vec<Role>, RepositoryError>;

    /// Delete a role by id; deleting a missing id is a no-op
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
