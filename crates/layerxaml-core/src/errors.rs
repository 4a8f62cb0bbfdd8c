//! Error types for the core crate.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while reading host input.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid export options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
