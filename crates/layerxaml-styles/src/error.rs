//! Error types for style handling.

use thiserror::Error;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors raised when a text style cannot be turned into a descriptor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleError {
    /// The host supplied a text style without a font size.
    #[error("Text style '{style}' has no font size")]
    MissingFontSize { style: String },

    /// The font size is not finite or too large to round to hundredths.
    #[error("Invalid font size: {value}")]
    InvalidFontSize { value: f64 },
}
