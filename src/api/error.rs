//! API error types for the ORE ID client.

use thiserror::Error;

/// Error type for every ORE ID client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required argument or credential was absent (checked before any request is sent)
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Non-success HTTP status. Displays the response body verbatim.
    #[error("{body}")]
    Remote { status: u16, body: String },

    /// HTTP/network error from reqwest
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request body could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Success response did not match the expected JSON shape
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Invalid client configuration
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// HTTP status code for remote failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body for remote failures.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Remote { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether this error was raised before anything was sent.
    pub fn is_precondition(&self) -> bool {
        matches!(self, ApiError::MissingArgument(_))
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Fails with [`ApiError::MissingArgument`] when `value` is empty.
pub(crate) fn require<'a>(value: &'a str, name: &'static str) -> ApiResult<&'a str> {
    if value.is_empty() {
        return Err(ApiError::MissingArgument(name));
    }
    Ok(value)
}
