//! Error types for body parsing.

use thiserror::Error;

/// Errors produced while decoding a request body.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The multipart Content-Type carried no boundary parameter.
    #[error("multipart content type has no boundary parameter")]
    MissingBoundary,

    /// The multipart framing was malformed.
    #[error("malformed multipart body: {0}")]
    MalformedMultipart(String),

    /// A percent escape in a URL-encoded component was invalid.
    #[error("invalid percent escape in {0:?}")]
    InvalidEscape(String),

    /// Decoded form data was not valid UTF-8.
    #[error("form data is not valid UTF-8")]
    InvalidUtf8,
}

impl ParseError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedMultipart(detail.into())
    }
}

/// Result type alias for body parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
