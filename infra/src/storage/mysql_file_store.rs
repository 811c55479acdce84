//! MySQL-backed blob store.
//!
//! Attachments are rows in `stored_files` with the raw bytes in a LONGBLOB
//! column. Offers reference them only by the opaque id string; nothing links
//! the two tables.

use async_trait::async_trait;
use sqlx::MySqlPool;
use sqlx::Row;
use uuid::Uuid;

use bb_core::domain::entities::stored_file::StoredFile;
use bb_core::errors::RepositoryError;
use bb_core::repositories::FileStore;

/// MySQL implementation of the attachment blob store
pub struct MySqlFileStore {
    pool: MySqlPool,
}

impl MySqlFileStore {
    /// Create a new MySQL file store
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for MySqlFileStore {
    async fn store(&self, mut file: StoredFile) -> Result<String, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        file.id = id.clone();

        sqlx::query(
            r#"
            INSERT INTO stored_files (id, filename, content_type, data)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&file.id)
        .bind(&file.filename)
        .bind(&file.content_type)
        .bind(&file.data)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to store file: {}", e),
        })?;

        Ok(id)
    }

    async fn load(&self, id: &str) -> Result<StoredFile, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, filename, content_type, data FROM stored_files WHERE id = ? LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to load file: {}", e),
        })?;

        let row = row.ok_or_else(|| RepositoryError::NotFound {
            resource: format!("file {}", id),
        })?;

        Ok(StoredFile {
            id: row.try_get("id").map_err(storage_column)?,
            filename: row.try_get("filename").map_err(storage_column)?,
            content_type: row.try_get("content_type").map_err(storage_column)?,
            data: row.try_get("data").map_err(storage_column)?,
        })
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM stored_files WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to delete file: {}", e),
            })?;
        Ok(())
    }
}

fn storage_column(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage {
        message: format!("failed to read stored file column: {}", e),
    }
}
