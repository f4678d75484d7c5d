// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's persisted settings, stored in a
//! `settings.toml` file under the platform config directory.
//!
//! Only the `[display]` table is read by this crate. Its `language` key holds
//! the user's preferred translation language; an empty value means "use the
//! system default locale".
//!
//! # Examples
//!
//! ```no_run
//! use rapid_photo_downloader::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.display.language = "fr".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Organization and application name; the settings directory is named after it.
pub const APP_NAME: &str = "Rapid Photo Downloader";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplaySettings,
}

/// The `Display` settings group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub language: String,
}

impl Config {
    /// Returns the configured language, or `None` when the system default applies.
    pub fn language(&self) -> Option<&str> {
        let lang = self.display.language.trim();
        (!lang.is_empty()).then_some(lang)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let mut config = Config::default();
        config.display.language = "fr".to_string();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language().is_none());
    }

    #[test]
    fn missing_display_group_defaults_to_empty_language() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[other]\nkey = 1\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.display.language, "");
    }

    #[test]
    fn blank_language_means_system_default() {
        let mut config = Config::default();
        config.display.language = "   ".to_string();
        assert_eq!(config.language(), None);

        config.display.language = "es".to_string();
        assert_eq!(config.language(), Some("es"));
    }

    #[test]
    fn display_group_is_written_as_table() {
        let mut config = Config::default();
        config.display.language = "de".to_string();
        let text = toml::to_string_pretty(&config).expect("serialize");
        assert!(text.contains("[display]"));
        assert!(text.contains("language = \"de\""));
    }
}
