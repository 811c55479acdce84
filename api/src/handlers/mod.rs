//! Error translation between the core failure kinds and HTTP.

pub mod error;

pub use error::{validate, ApiError};
