//! Error types for the UI utilities

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    /// No preference storage in this environment (private mode, no window)
    #[error("Preference storage unavailable")]
    StorageUnavailable,

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Preference file exists but is not a JSON object of strings
    #[error("Corrupt preference file: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A DOM call threw
    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
