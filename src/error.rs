//! Error types for capreq
//!
//! Uses `thiserror` for library errors. Once a record is constructed every
//! operation on it is total, so the only core failure is `InvalidArgument`;
//! the remaining variants belong to the manifest reader and config loader.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for capreq operations
pub type CapReqResult<T> = Result<T, CapReqError>;

/// Main error type for capreq operations
#[derive(Error, Debug)]
pub enum CapReqError {
    /// A required construction input was absent or malformed
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Manifest could not be read into records
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CapReqError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        CapReqError::InvalidArgument {
            message: message.into(),
        }
    }

    /// True for construction failures (as opposed to I/O or parse failures)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CapReqError::InvalidArgument { .. })
    }
}
