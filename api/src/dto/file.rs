//! Attachment DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /files; `data` is base64-encoded
#[derive(Debug, Deserialize, Validate)]
pub struct FileUploadRequest {
    #[validate(length(min = 1, max = 255))]
    pub filename: String,

    #[validate(length(min = 1, max = 128))]
    pub content_type: String,

    #[validate(length(min = 1))]
    pub data: String,
}

/// Response body for a stored attachment
#[derive(Debug, Serialize)]
pub struct FileUploadResponse {
    pub file_id: String,
}
