//! Stored file entity backing offer attachments.

use serde::{Deserialize, Serialize};

/// A blob stored for an offer attachment.
///
/// Offers reference stored files by the opaque `id` string; deleting an offer
/// does not delete its attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Store-assigned opaque identifier; empty until persisted
    pub id: String,

    /// Original file name
    pub filename: String,

    /// MIME content type
    pub content_type: String,

    /// Raw file bytes
    pub data: Vec<u8>,
}

impl StoredFile {
    /// Creates a new, not-yet-persisted stored file
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            id: String::new(),
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }
}
