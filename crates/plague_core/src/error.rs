//! Error types for the core library

use thiserror::Error;

/// Core errors
#[derive(Debug, Error)]
pub enum Error {
    /// Settings document is not valid JSON
    #[error("Invalid settings document: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings document is valid JSON but not a flat object
    #[error("Settings document must be a JSON object")]
    NotAnObject,

    /// A setting holds a value that has no console-variable form
    #[error("Setting '{0}' must be a string, number or boolean")]
    InvalidValue(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
