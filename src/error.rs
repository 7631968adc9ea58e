//! Error types for resource-links
//!
//! Link computation itself has no failure modes: inputs are treated
//! permissively and degraded cases produce fewer links, not errors. The only
//! fallible operation is parsing the incoming request URI.

use thiserror::Error;

/// The error type for resource-links
#[derive(Error, Debug)]
pub enum Error {
    /// The request URI could not be parsed as an absolute URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Catch-all for callers layering their own failures on top.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a catch-all error from a message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Result type alias for resource-links
pub type Result<T> = std::result::Result<T, Error>;
