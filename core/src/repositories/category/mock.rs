//! Mock implementation of CategoryRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::errors::RepositoryError;

use super::trait_::CategoryRepository;

/// Mock category repository for testing
pub struct MockCategoryRepository {
    categories: Arc<RwLock<HashMap<Uuid, Category>>>,
}

impl MockCategoryRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            categories: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn create(&self, mut category: Category) -> Result<Category, RepositoryError> {
        let mut categories = self.categories.write().await;

        if categories.values().any(|c| c.name == category.name) {
            return Err(RepositoryError::Duplicate {
                field: "name".to_string(),
            });
        }

        let id = Uuid::new_v4();
        category.id = Some(id);
        categories.insert(id, category.clone());
        Ok(category)
    }

    async fn save(&self, category: Category) -> Result<Category, RepositoryError> {
        let id = category.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save a category without an id".to_string(),
        })?;
        self.categories.write().await.insert(id, category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError> {
        Ok(self.categories.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        Ok(self
            .categories
            .read()
            .await
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.categories.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.categories.write().await.remove(&id);
        Ok(())
    }
}
