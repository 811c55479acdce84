//! MySQL implementation of the RoleRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use bb_core::domain::entities::role::Role;
use bb_core::errors::RepositoryError;
use bb_core::repositories::RoleRepository;

use super::{column, parse_uuid};

/// MySQL implementation of RoleRepository
pub struct MySqlRoleRepository {
    pool: MySqlPool,
}

impl MySqlRoleRepository {
    /// Create a new MySQL role repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_role(row: &MySqlRow) -> Result<Role, RepositoryError> {
        let id: String = column(row, "id")?;
        Ok(Role {
            id: Some(parse_uuid(&id, "id")?),
            name: column(row, "name")?,
        })
    }
}

#[async_trait]
impl RoleRepository for MySqlRoleRepository {
    async fn create(&self, mut role: Role) -> Result<Role, RepositoryError> {
        let id = Uuid::new_v4();
        role.id = Some(id);

        sqlx::query("INSERT INTO roles (id, name) VALUES (?, ?)")
            .bind(id.to_string())
            .bind(&role.name)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    RepositoryError::Duplicate {
                        field: "name".to_string(),
                    }
                }
                _ => RepositoryError::Storage {
                    message: format!("failed to insert role: {}", e),
                },
            })?;

        Ok(role)
    }

    async fn save(&self, role: Role) -> Result<Role, RepositoryError> {
        let id = role.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save a role without an id".to_string(),
        })?;

        sqlx::query(
            "INSERT INTO roles (id, name) VALUES (?, ?) ON DUPLICATE KEY UPDATE name = VALUES(name)",
        )
        .bind(id.to_string())
        .bind(&role.name)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to save role: {}", e),
        })?;

        Ok(role)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM roles WHERE id = ? LIMIT 1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find role by id: {}", e),
            })?;

        row.map(|r| Self::row_to_role(&r)).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM roles WHERE name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find role by name: {}", e),
            })?;

        row.map(|r| Self::row_to_role(&r)).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Role>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name FROM roles")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to list roles: {}", e),
            })?;

        rows.iter().map(Self::row_to_role).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM roles WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to delete role: {}", e),
            })?;
        Ok(())
    }
}
