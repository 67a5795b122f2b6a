//! API settings persistence.
//!
//! Settings live in the platform-specific config directory unless a path is
//! given explicitly:
//! - Linux: ~/.config/dip-client/settings.json
//! - macOS: ~/Library/Application Support/dip-client/settings.json
//! - Windows: %APPDATA%/dip-client/settings.json
//!
//! The file is optional; a missing file means built-in defaults.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dip_domain::{ApiSettings, render_json};
use tokio::fs;
use tracing::debug;

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error on {path}: {source}")]
    Io {
        /// File that was accessed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid settings JSON.
    #[error("Invalid settings file {path}: {source}")]
    Parse {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },

    /// Settings could not be serialized.
    #[error("Could not serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for API settings.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository backed by the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Creates a repository backed by the given file.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the default settings path, if a config directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dip-client").join("settings.json"))
    }

    /// Returns the path this repository reads and writes.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<ApiSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(ApiSettings::default());
        };

        let content = match fs::read(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(ApiSettings::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.clone(),
                    source,
                });
            }
        };

        let settings = serde_json::from_slice(&content).map_err(|source| SettingsError::Parse {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Saves settings to disk, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is available or writing fails.
    pub async fn save(&self, settings: &ApiSettings) -> Result<PathBuf, SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::NoConfigDir);
        };

        let io_error = |source| SettingsError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(io_error)?;
        }

        let mut content = render_json(settings).map_err(SettingsError::Serialize)?;
        content.push('\n');
        fs::write(path, content).await.map_err(io_error)?;

        Ok(path.clone())
    }
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use dip_domain::ApiKey;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn default_path_is_valid() {
        if let Some(p) = SettingsRepository::default_path() {
            assert!(p.ends_with("dip-client/settings.json"));
        }
    }

    #[tokio::test]
    async fn load_returns_default_when_no_file() {
        let dir = tempdir().expect("temp dir");
        let repo = SettingsRepository::with_path(dir.path().join("missing.json"));
        let settings = repo.load().await.unwrap();
        assert_eq!(settings, ApiSettings::default());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.json");
        let repo = SettingsRepository::with_path(&path);

        let settings = ApiSettings {
            base_url: "http://localhost:9000/api/v1".to_string(),
            default_api_key: ApiKey::new("local-key"),
        };
        let written = repo.save(&settings).await.unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"base_url\""));
        assert!(content.ends_with("}\n"));

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn partial_file_uses_defaults_for_missing_fields() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"default_api_key": "mine"}"#).unwrap();

        let settings = SettingsRepository::with_path(&path).load().await.unwrap();
        assert_eq!(settings.base_url, dip_domain::DEFAULT_BASE_URL);
        assert_eq!(settings.default_api_key.expose(), "mine");
    }

    #[tokio::test]
    async fn invalid_file_is_reported() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = SettingsRepository::with_path(&path).load().await;
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }
}
