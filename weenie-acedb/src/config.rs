//! Gateway settings.
//!
//! Settings live in the `[acedb]` table of
//! `~/.config/weenie-lookup/settings.toml`. Every key is optional and a
//! missing file simply means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::AceDbError;

/// Public Datasette instance serving the ACE world database with patches applied.
pub const DEFAULT_BASE_URL: &str = "https://acedb.treestats.net/ace_world_patches.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Searches never return more rows than this, whatever the settings say.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Connection and query settings for the ACE world database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AceDbConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Maximum number of rows a text search returns, `1..=20`.
    pub search_limit: u32,
}

impl Default for AceDbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// TOML settings file format.
#[derive(Debug, Deserialize)]
struct SettingsFile {
    acedb: Option<AceDbSection>,
}

#[derive(Debug, Deserialize)]
struct AceDbSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    search_limit: Option<u32>,
}

impl AceDbConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse settings from TOML text, filling unset keys with defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, AceDbError> {
        let file: SettingsFile = toml::from_str(contents)
            .map_err(|e| AceDbError::config(format!("Invalid settings: {e}")))?;

        let mut config = Self::default();
        if let Some(section) = file.acedb {
            if let Some(base_url) = section.base_url {
                config.base_url = base_url;
            }
            if let Some(timeout) = section.timeout_secs {
                config.timeout_secs = timeout;
            }
            if let Some(limit) = section.search_limit {
                config.search_limit = limit;
            }
        }

        if !(1..=DEFAULT_SEARCH_LIMIT).contains(&config.search_limit) {
            return Err(AceDbError::config(format!(
                "search_limit must be between 1 and {DEFAULT_SEARCH_LIMIT}, got {}",
                config.search_limit
            )));
        }
        if config.timeout_secs == 0 {
            return Err(AceDbError::config("timeout_secs must be at least 1"));
        }
        Ok(config)
    }

    /// Load settings from a file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, AceDbError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AceDbError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load settings from the shared settings file.
    pub fn load() -> Result<Self, AceDbError> {
        Self::load_from(&settings_path())
    }
}

/// Canonical path to the settings file: `~/.config/weenie-lookup/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("weenie-lookup").join("settings.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_are_defaults() {
        assert_eq!(AceDbConfig::from_toml_str("").unwrap(), AceDbConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = AceDbConfig::from_toml_str(
            r#"
            [acedb]
            search_limit = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.search_limit, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn unrelated_tables_are_ignored() {
        let config = AceDbConfig::from_toml_str(
            r#"
            [library]
            current_root = "/games"

            [acedb]
            base_url = "http://localhost:8001/ace_world.json"
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8001/ace_world.json");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn zero_search_limit_is_rejected() {
        let err = AceDbConfig::from_toml_str("[acedb]\nsearch_limit = 0\n").unwrap_err();
        assert!(matches!(err, AceDbError::Config(_)));
    }

    #[test]
    fn search_limit_above_twenty_is_rejected() {
        assert!(AceDbConfig::from_toml_str("[acedb]\nsearch_limit = 20\n").is_ok());
        let err = AceDbConfig::from_toml_str("[acedb]\nsearch_limit = 500\n").unwrap_err();
        assert!(matches!(err, AceDbError::Config(_)));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = AceDbConfig::from_toml_str("[acedb]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, AceDbError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = AceDbConfig::from_toml_str("[acedb\n").unwrap_err();
        assert!(matches!(err, AceDbError::Config(_)));
    }

    #[test]
    fn missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AceDbConfig::load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(config, AceDbConfig::default());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[acedb]\ntimeout_secs = 12\n").unwrap();
        let config = AceDbConfig::load_from(&path).unwrap();
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn settings_path_ends_with_crate_dir() {
        let path = settings_path();
        assert!(path.ends_with("weenie-lookup/settings.toml"));
    }
}
