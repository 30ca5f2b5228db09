//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Validation errors live with the domain types in
//! [`crate::domain::errors`].

use thiserror::Error;

/// Errors that can occur while writing an export snapshot.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Serializing the contact list failed
    #[error("failed to serialize contacts: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the snapshot file failed
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ExportError
pub type ExportResult<T> = Result<T, ExportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
