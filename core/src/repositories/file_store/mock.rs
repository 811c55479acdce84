//! Mock implementation of FileStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::stored_file::StoredFile;
use crate::errors::RepositoryError;

use super::trait_::FileStore;

/// Mock blob store for testing
pub struct MockFileStore {
    files: Arc<RwLock<HashMap<String, StoredFile>>>,
}

impl MockFileStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileStore for MockFileStore {
    async fn store(&self, mut file: StoredFile) -> Result<String, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        file.id = id.clone();
        self.files.write().await.insert(id.clone(), file);
        Ok(id)
    }

    async fn load(&self, id: &str) -> Result<StoredFile, RepositoryError> {
        self.files
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                resource: format!("file {}", id),
            })
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.files.write().await.remove(id);
        Ok(())
    }
}
