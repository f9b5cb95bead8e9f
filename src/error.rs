//! Crate-level error types.
//!
//! [`TokenScopeError`] unifies every error source (configuration, HTTP,
//! JSON, terminal I/O) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator for easy
//! propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TokenScopeError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum TokenScopeError {
    /// An environment variable held a value that could not be used.
    #[error("configuration error: {0}")]
    Config(String),

    /// The trades request failed to send, timed out, or returned a
    /// non-success status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal or log file I/O failed.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TokenScopeError {
    fn from(err: std::io::Error) -> Self {
        TokenScopeError::Io(err.to_string())
    }
}
