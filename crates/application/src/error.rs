//! Application error types

use dip_domain::DomainError;
use thiserror::Error;

use crate::ports::HttpClientError;

/// Failure of a fetch, ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Required input is missing and has no usable default.
    /// No request was sent.
    #[error("{0}")]
    Validation(String),

    /// The request failed: transport error or HTTP error status.
    #[error("{0}")]
    Request(String),
}

impl FetchError {
    /// Returns a short title for the failure kind.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Invalid input",
            Self::Request(_) => "Request failed",
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::Request(message) => message,
        }
    }
}

impl From<HttpClientError> for FetchError {
    fn from(error: HttpClientError) -> Self {
        Self::Request(error.to_string())
    }
}

impl From<DomainError> for FetchError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidUrl(_) => HttpClientError::from(error).into(),
            other => Self::Validation(other.to_string()),
        }
    }
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
