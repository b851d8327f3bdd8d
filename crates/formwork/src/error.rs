//! Error types for form decoding.

use thiserror::Error;

/// Errors surfaced while decoding a form submission.
#[derive(Debug, Error)]
pub enum FormError {
    /// The request body could not be parsed.
    #[error("failed to decode form body: {0}")]
    Parse(#[from] formwork_http::ParseError),

    /// The request body exceeded the configured limit.
    #[error("request body exceeds limit of {limit} bytes")]
    BodyTooLarge {
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
