//! Category repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::errors::RepositoryError;

/// Repository contract for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a new category; the store assigns the id
    async fn create(&self, category: Category) -> Result<Category, RepositoryError>;

    /// Upsert a category by its id
    async fn save(&self, category: Category) -> Result<Category, RepositoryError>;

    /// Find a category by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError>;

    /// Find a category by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError>;

    /// Unordered full scan
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Delete a category by id; deleting a missing id is a no-op
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
