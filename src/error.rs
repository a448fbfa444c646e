//! Error types for rootsum

use thiserror::Error;

/// Result type alias for rootsum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rootsum operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Cannot compute the root of an empty tree")]
    EmptyTree,

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
