//! Error types for the Illuminate API client.

use thiserror::Error;

/// Message used when a replayed request fails after a successful refresh.
pub const REPLAY_FAILED_MESSAGE: &str = "Request failed after refresh";

/// Message used when an error body is JSON but carries no `error` field.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Message used when an error body cannot be parsed as JSON at all.
pub const UNPARSEABLE_BODY_MESSAGE: &str = "Unknown error";

/// Errors that can occur when talking to the Illuminate API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed at the transport layer
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server could not be reached at all
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Http { status: u16, message: String },

    /// The session could not be refreshed; the user has to log in again.
    ///
    /// Navigation is left to the caller.
    #[error("Authentication required, log in at {login_url}")]
    AuthRequired { login_url: String },

    /// Invalid base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a success response body
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Failed to encode a request body
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status carried by this error, if any.
    ///
    /// `AuthRequired` reports 401.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::AuthRequired { .. } => Some(401),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Human readable message without the status prefix.
    pub fn message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            ApiError::AuthRequired { .. } => "Unauthorized".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the caller should send the user through the login flow.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, ApiError::AuthRequired { .. })
    }
}

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
