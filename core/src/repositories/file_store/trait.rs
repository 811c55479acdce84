//! Blob store trait backing offer attachments.

use async_trait::async_trait;

use crate::domain::entities::stored_file::StoredFile;
use crate::errors::RepositoryError;

/// Contract for the attachment blob store.
///
/// Offers only carry the opaque id string returned by `store`; nothing links
/// the two stores transactionally.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store a file and return its assigned id
    async fn store(&self, file: StoredFile) -> Result<String, RepositoryError>;

    /// Load a file by id
    ///
    /// # Errors
    /// Fails with [`RepositoryError::NotFound`] when no file has this id.
    async fn load(&self, id: &str) -> Result<StoredFile, RepositoryError>;

    /// Delete a file by id; deleting a missing id is a no-op
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
