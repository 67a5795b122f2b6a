//! API credential handling.
//!
//! The DIP API authenticates callers through an `Authorization: ApiKey <key>`
//! header. A public key is documented by the Bundestag for evaluation use and
//! serves as the fallback when the user does not supply their own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Publicly documented DIP API key.
pub const DEFAULT_API_KEY: &str = "OSOegLs.PR2lwJ1dwCeje9vTj7FPOt3hvpYKtwKkhw";

/// Scheme used in the `Authorization` header.
pub const AUTHORIZATION_SCHEME: &str = "ApiKey";

/// An API key for the DIP API.
///
/// The key is never printed through `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new API key from the given token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Resolves the key to use for a request.
    ///
    /// The user supplied value wins when it is non-empty after trimming;
    /// otherwise the fallback is used verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingCredential`] if both the input and the
    /// fallback are blank.
    pub fn resolve(input: &str, fallback: &Self) -> DomainResult<Self> {
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            return Ok(Self::new(trimmed));
        }
        if fallback.is_blank() {
            return Err(DomainError::MissingCredential);
        }
        Ok(fallback.clone())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if the token is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns the value for the `Authorization` header.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("{AUTHORIZATION_SCHEME} {}", self.0)
    }
}

impl Default for ApiKey {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"********").finish()
    }
}
