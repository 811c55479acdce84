//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::RepositoryError;

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, mut user: User) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.login == user.login) {
            return Err(RepositoryError::Duplicate {
                field: "login".to_string(),
            });
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::Duplicate {
                field: "email".to_string(),
            });
        }

        let id = Uuid::new_v4();
        user.id = Some(id);
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn save(&self, user: User) -> Result<User, RepositoryError> {
        let id = user.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save a user without an id".to_string(),
        })?;
        self.users.write().await.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.login == login)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.users.write().await.remove(&id);
        Ok(())
    }
}
