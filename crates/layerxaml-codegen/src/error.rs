//! Error types for code generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A text style could not be described.
    #[error(transparent)]
    Style(#[from] layerxaml_styles::StyleError),

    /// Neither a project nor a styleguide was supplied.
    #[error("No project or styleguide to export from")]
    MissingContainer,

    /// Missing required property.
    #[error("Missing required property '{property}' on layer '{element}'")]
    MissingProperty {
        element: String,
        property: String,
    },

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Template not found.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),
}
