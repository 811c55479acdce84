//! Mock implementation of RoleRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::role::Role;
use crate::errors::RepositoryError;

use super::trait_::RoleRepository;

/// Mock role repository for testing
pub struct MockRoleRepository {
    roles: Arc<RwLock<HashMap<Uuid, Role>>>,
}

impl MockRoleRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            roles: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockRoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleRepository for MockRoleRepository {
    async fn create(&self, mut role: Role) -> Result<Role, RepositoryError> {
        let mut roles = self.roles.write().await;

        if roles.values().any(|r| r.name == role.name) {
            return Err(RepositoryError::Duplicate {
                field: "name".to_string(),
            });
        }

        let id = Uuid::new_v4();
        role.id = Some(id);
        roles.insert(id, role.clone());
        Ok(role)
    }

    async fn save(&self, role: Role) -> Result<Role, RepositoryError> {
        let id = role.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save a role without an id".to_string(),
        })?;
        self.roles.write().await.insert(id, role.clone());
        Ok(role)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, RepositoryError> {
        Ok(self.roles.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RepositoryError> {
        Ok(self
            .roles
            .read()
            .await
            .values()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Role>, RepositoryError> {
        Ok(self.roles.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.roles.write().await.remove(&id);
        Ok(())
    }
}
