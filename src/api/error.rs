//! Error types for the CML API client
//!
//! Provides structured error types for all control-plane operations.

use thiserror::Error;

/// One failed attempt against a candidate upload endpoint
#[derive(Debug, Clone)]
pub struct EndpointFailure {
    /// The endpoint that was tried
    pub endpoint: String,
    /// Why the attempt failed
    pub detail: String,
}

/// Errors that can occur when talking to the Cloudera ML control plane
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse the API response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The API key was rejected
    #[error("Not authenticated - check the CLOUDERA_ML_API_KEY value")]
    Unauthorized,

    /// Requested resource was not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// The key is valid but lacks access to the resource
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded - please try again later")]
    RateLimited,

    /// Server error
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code (5xx)
        status: u16,
        /// Error message
        message: String,
    },

    /// Every candidate upload endpoint rejected the request
    #[error("All {} upload endpoints failed: {}", .0.len(), format_failures(.0))]
    AllEndpointsFailed(Vec<EndpointFailure>),
}

fn format_failures(failures: &[EndpointFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{} ({})", f.endpoint, f.detail))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
