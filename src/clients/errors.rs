use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the Genius client, the aggregator and the exporters
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream answered with a non-success status
    #[error("Genius API returned {status} for {url}")]
    HttpStatusError {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Connection, timeout or body read failure
    #[error("Genius request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Response body or JSON export could not be (de)serialized
    #[error("Genius Deserialization error: {0}")]
    DeserializationError(#[from] serde_json::Error),

    /// The access token can't be sent as an HTTP header value
    #[error("Invalid access token: {0}")]
    InvalidTokenError(String),

    /// Missing or malformed environment configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// CSV export failure
    #[error("Export error: {0}")]
    ExportError(#[from] csv::Error),

    /// Output file failure
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Error::InvalidTokenError(err.to_string())
    }
}
