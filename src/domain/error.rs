use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::Platform;

/// Library-wide error type for appasm operations.
///
/// Every variant is fatal: the first error aborts the whole assembly run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Invalid assembly configuration, raised before any side effect.
    #[error("{0}")]
    Configuration(String),

    /// Assembly descriptor file not found.
    #[error("Assembly descriptor not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Assembly descriptor could not be parsed.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Working-area directory could not be created.
    #[error("Failed to create directory for bin files at {}: {source}", path.display())]
    ResourceSetup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Installing an artifact into the assembly repository failed.
    #[error("Failed to copy artifact '{artifact}': {reason}")]
    Installation { artifact: String, reason: String },

    /// Rendering the launcher script for one program and platform failed.
    #[error(
        "Error while generating script for the program '{program}' for the platform '{platform}': {reason}"
    )]
    Generation { program: String, platform: Platform, reason: String },

    /// Template registration or rendering failed.
    #[error("Template error in '{name}': {details}")]
    Template { name: String, details: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
