//! Top-level error type for the CLI
//!
//! Fatal errors only: configuration problems and operation failures that
//! abort a command. Per-file transfer failures during a folder upload are
//! not errors at this level; they are folded into the batch report.

use thiserror::Error;

/// Errors surfaced to the command-line entry point
#[derive(Debug, Error)]
pub enum CmlError {
    /// Required configuration values are absent
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// API call failed
    #[error(transparent)]
    Api(#[from] crate::api::ApiError),

    /// Folder synchronization could not start
    #[error(transparent)]
    Sync(#[from] crate::sync::SyncError),

    /// Local I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, CmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_configuration_names_the_keys() {
        let err = CmlError::MissingConfiguration("host, api_key".to_string());
        assert_eq!(err.to_string(), "Missing configuration: host, api_key");
    }
}
