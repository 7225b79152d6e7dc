//! Shared error types for the application

use thiserror::Error;

/// Main error type for csvgate operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Walk errors from file discovery
    #[error(transparent)]
    Walk(#[from] ignore::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
