//! Error types for hull descriptions.

use thiserror::Error;

/// Errors that can occur while loading a hull description.
#[derive(Error, Debug)]
pub enum HullError {
    /// Description file could not be read.
    #[error("failed to read hull description: {0}")]
    Io(#[from] std::io::Error),

    /// Description is not valid JSON or does not match the schema.
    #[error("failed to parse hull description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for hull operations.
pub type Result<T> = std::result::Result<T, HullError>;
