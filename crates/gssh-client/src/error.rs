//! Error types for the GlobalSSH client

use thiserror::Error;

/// Transport-level failures: the call did not produce a decodable response
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Endpoint answered with a non-success HTTP status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Request could not be flattened into API parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
