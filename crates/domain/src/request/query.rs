//! Query parameter types

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A query parameter key-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// The parameter key
    pub key: String,
    /// The parameter value (may be empty)
    pub value: String,
}

impl QueryParam {
    /// Creates a new query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parses a single `KEY=VALUE` assignment.
    ///
    /// Only the first `=` separates key and value; a missing `=` yields an
    /// empty value. No percent-decoding is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn parse_assignment(input: &str) -> DomainResult<Self> {
        let (key, value) = input.split_once('=').unwrap_or((input, ""));
        let key = key.trim();
        if key.is_empty() {
            return Err(DomainError::InvalidQuery(format!(
                "missing key in '{input}'"
            )));
        }
        Ok(Self::new(key, value))
    }
}

/// An ordered collection of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    items: Vec<QueryParam>,
}

impl QueryParams {
    /// Creates an empty query parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Parses a raw `key=value&key=value` string.
    ///
    /// Uses form-urlencoded rules: percent escapes are decoded, `+` is a
    /// space, blank values are kept, a bare token becomes a key with an empty
    /// value and empty segments are skipped. A repeated key replaces the
    /// earlier value in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be decoded.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim().trim_start_matches('?');
        let mut params = Self::new();
        if raw.is_empty() {
            return Ok(params);
        }

        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw)
            .map_err(|e| DomainError::InvalidQuery(e.to_string()))?;
        for (key, value) in pairs {
            params.set(key, value);
        }
        Ok(params)
    }

    /// Sets a parameter, replacing the value of an existing key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.items.iter_mut().find(|p| p.key == key) {
            Some(existing) => existing.value = value,
            None => self.items.push(QueryParam { key, value }),
        }
    }

    /// Returns an iterator of `(key, value)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
    }

    /// Returns true if there are no parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Extend<QueryParam> for QueryParams {
    fn extend<T: IntoIterator<Item = QueryParam>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}
