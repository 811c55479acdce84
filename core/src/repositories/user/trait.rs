//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::RepositoryError;

/// Repository contract for User entities.
///
/// Login and email are unique within the store; `create` fails with
/// [`RepositoryError::Duplicate`] when either is already taken.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns the id
    async fn create(&self, user: User) -> Result<User, RepositoryError>;

    /// Upsert a user by its id
    async fn save(&self, user: User) -> Result<User, RepositoryError>;

    /// Find a user by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Find a user by login
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError>;

    /// Find a user by e-mail address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Unordered full scan
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Delete a user by id; deleting a missing id is a no-op
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
