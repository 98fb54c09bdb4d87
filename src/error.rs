//! Unified error types for the server and client.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while calling the service from the client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Base URL could not be parsed or joined.
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Base URL parsed but is not http or https.
    #[error("unsupported url scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    /// Transport or body decoding failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;
