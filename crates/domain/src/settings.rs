//! API settings
//!
//! Where requests go and which key is used when the user gives none.

use serde::{Deserialize, Serialize};

use crate::credential::ApiKey;

/// Root of the DIP API, version 1.
pub const DEFAULT_BASE_URL: &str = "https://search.dip.bundestag.de/api/v1";

/// Connection settings for the DIP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// API root the resource path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Key used when the user does not supply one.
    #[serde(default)]
    pub default_api_key: ApiKey,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ApiSettings {
    /// Returns settings pointing at a different API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_api_key: ApiKey::default(),
        }
    }
}
