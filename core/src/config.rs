//! Configuration
//!
//! Centralized configuration for the store's persistence layer.
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. Environment variables (`QUILL_*`)
//! 2. TOML configuration file
//! 3. Default values
//!
//! # XDG Base Directory Compliance
//!
//! - Config file: `$XDG_CONFIG_HOME/quill/quill.toml`
//! - Durable record: `$XDG_DATA_HOME/quill/blog-store.json`
//!
//! # Example Configuration
//!
//! ```toml
//! [storage]
//! data_dir = "/home/dana/.local/share/quill"
//! file_name = "blog-store.json"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::STORAGE_FILE;

/// Errors from loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk configuration file shape
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuillToml {
    /// `[storage]` section
    #[serde(default)]
    pub storage: StorageToml,
}

/// `[storage]` section of the configuration file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageToml {
    /// Directory holding the durable record
    pub data_dir: Option<PathBuf>,

    /// File name of the durable record
    pub file_name: Option<String>,
}

/// Resolved store configuration
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// Directory holding the durable record; `None` means the XDG data dir
    pub data_dir: Option<PathBuf>,

    /// File name of the durable record
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            file_name: STORAGE_FILE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Resolve configuration: defaults, then the TOML file, then env.
    ///
    /// An unreadable or invalid config file is skipped with a warning;
    /// configuration never blocks startup.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();
        match load_config_file(default_config_path()) {
            Ok(Some(file)) => config.apply_file(&file),
            Ok(None) => {}
            Err(e) => tracing::warn!("Ignoring config file: {e}"),
        }
        config.apply_env();
        config
    }

    /// Overlay values from a parsed config file
    pub fn apply_file(&mut self, file: &QuillToml) {
        if let Some(dir) = &file.storage.data_dir {
            self.data_dir = Some(dir.clone());
        }
        if let Some(name) = &file.storage.file_name {
            self.file_name = name.clone();
        }
    }

    /// Overlay values from `QUILL_*` environment variables
    pub fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var("QUILL_DATA_DIR") {
            if !dir.is_empty() {
                self.data_dir = Some(PathBuf::from(dir));
            }
        }
        if let Ok(name) = std::env::var("QUILL_STORAGE_FILE") {
            if !name.is_empty() {
                self.file_name = name;
            }
        }
    }

    /// Full path of the durable record
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(default_data_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(&self.file_name)
    }
}

/// Default config file path (`$XDG_CONFIG_HOME/quill/quill.toml`)
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quill").join("quill.toml"))
}

/// Default data directory (`$XDG_DATA_HOME/quill`)
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("quill"))
}

/// Load the config file at `path`; `Ok(None)` when absent
pub fn load_config_file(path: Option<PathBuf>) -> Result<Option<QuillToml>, ConfigError> {
    let Some(path) = path else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(&path)?;
    Ok(Some(toml::from_str(&raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.file_name, STORAGE_FILE);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_parse_config_file() {
        let parsed: QuillToml = toml::from_str(
            r#"
            [storage]
            data_dir = "/tmp/quill-data"
            file_name = "posts.json"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.storage.data_dir, Some(PathBuf::from("/tmp/quill-data")));
        assert_eq!(parsed.storage.file_name.as_deref(), Some("posts.json"));
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let parsed: QuillToml = toml::from_str("").unwrap();
        let mut config = StoreConfig::default();
        config.apply_file(&parsed);
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_file_overlays_defaults() {
        let parsed: QuillToml = toml::from_str(
            r#"
            [storage]
            file_name = "posts.json"
            "#,
        )
        .unwrap();
        let mut config = StoreConfig::default();
        config.apply_file(&parsed);
        assert_eq!(config.file_name, "posts.json");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_storage_path_uses_override_dir() {
        let config = StoreConfig {
            data_dir: Some(PathBuf::from("/tmp/quill-data")),
            file_name: "posts.json".to_string(),
        };
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/tmp/quill-data/posts.json")
        );
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        assert!(load_config_file(Some(path)).unwrap().is_none());
    }

    #[test]
    fn test_load_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(
            load_config_file(Some(path)),
            Err(ConfigError::Parse(_))
        ));
    }
}
