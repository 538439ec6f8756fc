//! Error types for fieldset rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Fieldset-specific errors.
///
/// Mutators never fail and a missing field is not an error, so every
/// variant here comes from the template layer.
#[derive(Debug, Error)]
pub enum FormError {
    /// No template registered under the given name.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Template failed to parse or to render.
    #[error("template {name} failed: {message}")]
    Template { name: String, message: String },

    /// Template file or directory could not be read.
    #[error("failed to read template {path}: {source}")]
    TemplateIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process-wide template registry was already installed.
    #[error("template registry already initialized")]
    AlreadyInitialized,
}

impl FormError {
    pub(crate) fn template(name: &str, cause: impl std::fmt::Display) -> Self {
        Self::Template {
            name: name.to_string(),
            message: cause.to_string(),
        }
    }
}

/// Result type alias for fieldset operations.
pub type Result<T> = std::result::Result<T, FormError>;
