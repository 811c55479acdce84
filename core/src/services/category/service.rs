//! Category service implementation.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::CategoryRepository;

/// Plain CRUD over categories with one extra lookup by name
pub struct CategoryService<R: CategoryRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CategoryRepository + ?Sized> CategoryService<R> {
    /// Create a new category service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get a single category by id; a missing category is a GetFailure
    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<Category> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get category {}: {}", id, e),
            })?
            .ok_or_else(|| ServiceError::Get {
                message: format!("category {} not found", id),
            })
    }

    /// Get a single category by name; a missing name is a GetFailure
    pub async fn get_by_name(&self, name: &str) -> ServiceResult<Category> {
        self.repository
            .find_by_name(name)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get category by name: {}", e),
            })?
            .ok_or_else(|| ServiceError::Get {
                message: format!("category '{}' not found", name),
            })
    }

    /// Unordered full scan
    pub async fn get_all(&self) -> ServiceResult<Vec<Category>> {
        self.repository
            .find_all()
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get categories: {}", e),
            })
    }

    /// Insert a new category; the store assigns the id
    pub async fn add(&self, category: Category) -> ServiceResult<Category> {
        self.repository
            .create(category)
            .await
            .map_err(|e| ServiceError::Add {
                message: format!("could not add category: {}", e),
            })
    }

    /// Upsert a category by id; the id must be present
    pub async fn modify(&self, category: Category) -> ServiceResult<Category> {
        if category.id.is_none() {
            return Err(ServiceError::Modify {
                message: "category id is required for modify".to_string(),
            });
        }
        self.repository
            .save(category)
            .await
            .map_err(|e| ServiceError::Modify {
                message: format!("could not modify category: {}", e),
            })
    }

    /// Delete a category by id; deleting a missing id is not an error
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| ServiceError::Delete {
                message: format!("could not delete category {}: {}", id, e),
            })
    }
}
