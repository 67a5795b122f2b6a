//! HTTP Client port

use std::future::Future;

use dip_domain::{DomainError, request::RequestDescriptor, response::ResponseSpec};
use thiserror::Error;

/// Transport-level failures reported by an [`HttpClient`].
///
/// HTTP error statuses are not transport failures; they arrive as a
/// [`ResponseSpec`] and are judged by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The request URL could not be built or parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The host name could not be resolved.
    #[error("Could not resolve host '{host}': {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error text.
        message: String,
    },

    /// The server refused the connection.
    #[error("Connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection could not be established.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport gave up waiting.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// Any other transport error.
    #[error("{0}")]
    Other(String),
}

impl From<DomainError> for HttpClientError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidUrl(message) => Self::InvalidUrl(message),
            other => Self::Other(other.to_string()),
        }
    }
}

/// Port for executing DIP API requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// Sends one GET request for the descriptor and returns the response.
    ///
    /// Implementations must not retry and must not override the
    /// transport's default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained.
    fn execute(
        &self,
        request: &RequestDescriptor,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send;
}
