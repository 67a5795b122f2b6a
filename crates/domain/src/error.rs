//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The resource name is not one of the known DIP resources.
    #[error("unknown resource '{name}' (expected one of: {expected})")]
    UnknownResource {
        /// The name that was given.
        name: String,
        /// Comma separated list of valid names.
        expected: String,
    },

    /// The query string could not be decoded.
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    /// No credential was given and no default is configured.
    #[error("API key is missing and no default key is configured")]
    MissingCredential,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
