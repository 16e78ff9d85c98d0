//! API error taxonomy.

/// Errors surfaced by API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, DNS, timeout, bad TLS.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status. The message is taken
    /// from the response body's `message` field when present.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided or generic failure message.
        message: String,
    },

    /// The response body could not be interpreted as the expected shape.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// Image upload failed or returned an unusable payload.
    #[error("upload failed: {0}")]
    Upload(String),

    /// An authenticated call was made with no token in the session.
    #[error("not logged in")]
    MissingToken,
}

impl ApiError {
    /// HTTP status code, when the error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error is an HTTP 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
