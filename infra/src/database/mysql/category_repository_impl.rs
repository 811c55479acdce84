//! MySQL implementation of the CategoryRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use bb_core::domain::entities::category::Category;
use bb_core::errors::RepositoryError;
use bb_core::repositories::CategoryRepository;

use super::{column, parse_uuid};

/// MySQL implementation of CategoryRepository
pub struct MySqlCategoryRepository {
    pool: MySqlPool,
}

impl MySqlCategoryRepository {
    /// Create a new MySQL category repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_category(row: &MySqlRow) -> Result<Category, RepositoryError> {
        let id: String = column(row, "id")?;
        Ok(Category {
            id: Some(parse_uuid(&id, "id")?),
            name: column(row, "name")?,
        })
    }
}

#[async_trait]
impl CategoryRepository for MySqlCategoryRepository {
    async fn create(&self, mut category: Category) -> Result<Category, RepositoryError> {
        let id = Uuid::new_v4();
        category.id = Some(id);

        sqlx::query("INSERT INTO categories (id, name) VALUES (?, ?)")
            .bind(id.to_string())
            .bind(&category.name)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    RepositoryError::Duplicate {
                        field: "name".to_string(),
                    }
                }
                _ => RepositoryError::Storage {
                    message: format!("failed to insert category: {}", e),
                },
            })?;

        Ok(category)
    }

    async fn save(&self, category: Category) -> Result<Category, RepositoryError> {
        let id = category.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save a category without an id".to_string(),
        })?;

        sqlx::query(
            "INSERT INTO categories (id, name) VALUES (?, ?) ON DUPLICATE KEY UPDATE name = VALUES(name)",
        )
        .bind(id.to_string())
        .bind(&category.name)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to save category: {}", e),
        })?;

        Ok(category)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM categories WHERE id = ? LIMIT 1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find category by id: {}", e),
            })?;

        row.map(|r| Self::row_to_category(&r)).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM categories WHERE name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find category by name: {}", e),
            })?;

        row.map(|r| Self::row_to_category(&r)).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name FROM categories")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to list categories: {}", e),
            })?;

        rows.iter().map(Self::row_to_category).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to delete category: {}", e),
            })?;
        Ok(())
    }
}
