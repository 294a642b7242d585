//! Error types for the Wealthsimple API client.
//!
//! Every fallible operation in this crate returns [`Result`]. Construction
//! problems (bad credentials, unusable configuration) surface as errors from
//! the synchronous constructors; everything that touches the network surfaces
//! from the returned future.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Wealthsimple operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Wealthsimple API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed at the transport level
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-2xx response
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Application credentials are missing or malformed
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if the API rejected the request's authentication.
    ///
    /// This is informational; the client never retries on its own.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401 | 403, .. })
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (bad credentials, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidCredentials(_) | Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a response body.
    ///
    /// Wealthsimple reports failures either as `{"error": "..."}` or with a
    /// top-level `message`; both are accepted.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = body
            .get("error")
            .and_then(|e| e.as_str().or_else(|| e.get("message").and_then(|m| m.as_str())))
            .or_else(|| body.get("message").and_then(|m| m.as_str()))
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            message,
            body,
        }
    }
}
