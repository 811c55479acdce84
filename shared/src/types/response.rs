//! Unified error response structure for API responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error envelope returned by every failing API endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let response = ErrorResponse::new("GET_FAILURE", "offer not found");
        assert_eq!(response.error, "GET_FAILURE");
        assert_eq!(response.message, "offer not found");
    }

    #[test]
    fn test_error_response_serializes() {
        let response = ErrorResponse::new("ADD_FAILURE", "insert failed");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ADD_FAILURE"));
        assert!(json.contains("insert failed"));
    }
}
