//! Configuration manager for loading and saving application configuration
//!
//! This module loads and saves `<config dir>/IconPicker/config.json` with atomic
//! writes to prevent corruption.

use crate::config::models::AppConfig;
use crate::error::{IconPickerError, Result, StringError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Application directory name under the per-user config and data directories
pub const APP_DIR_NAME: &str = "IconPicker";

/// Configuration manager bound to one config file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Create a manager for an explicit config file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a manager for the per-user config file
    pub fn default_location() -> Self {
        Self::new(Self::default_config_path())
    }

    /// Get the default path to the configuration file
    ///
    /// Returns `<config dir>/IconPicker/config.json`, falling back to the
    /// working directory when the platform reports no config directory.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join("config.json")
    }

    /// Path of the managed config file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load configuration from disk
    ///
    /// A missing, unreadable or corrupt file yields the default configuration.
    pub fn load(&self) -> AppConfig {
        if !self.path.exists() {
            info!("Configuration file not found, using defaults");
            return AppConfig::default();
        }

        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) => {
                warn!(
                    "Failed to read configuration {}, using defaults: {}",
                    self.path.display(),
                    e
                );
                return AppConfig::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded successfully");
                config
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                AppConfig::default()
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Writes to a temporary file in the config directory and persists it over
    /// the target, so a crash never leaves a truncated config behind.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        let config_dir = self.path.parent().ok_or_else(|| {
            IconPickerError::ConfigError(StringError::new("Invalid config path"))
        })?;
        std::fs::create_dir_all(config_dir)?;

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path)
            .map_err(|e| IconPickerError::ConfigError(Box::new(e)))?;

        info!("Configuration saved successfully");
        Ok(())
    }

    /// Persist a new shortcut while keeping every other setting on disk
    pub fn save_shortcut(&self, shortcut: &str) -> Result<()> {
        let mut config = self.load();
        if config.shortcut == shortcut && self.path.exists() {
            debug!("Shortcut {} already persisted", shortcut);
            return Ok(());
        }
        config.shortcut = shortcut.to_string();
        self.save(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::{DEFAULT_SHORTCUT, ExportLocation};

    fn manager_in(dir: &tempfile::TempDir) -> ConfigManager {
        ConfigManager::new(dir.path().join(APP_DIR_NAME).join("config.json"))
    }

    #[test]
    fn test_config_path() {
        let path = ConfigManager::default_config_path();
        assert!(path.to_string_lossy().contains(APP_DIR_NAME));
        assert!(path.to_string_lossy().ends_with("config.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = manager_in(&dir).load();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_malformed_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_in(&dir);
        std::fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        std::fs::write(manager.path(), "{ \"shortcut\": ").unwrap();

        let config = manager.load();
        assert_eq!(config.shortcut, DEFAULT_SHORTCUT);
    }

    #[test]
    fn test_load_wrong_type_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_in(&dir);
        std::fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        std::fs::write(manager.path(), r#"{ "shortcut": 42 }"#).unwrap();

        assert_eq!(manager.load(), AppConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_in(&dir);
        let config = AppConfig {
            shortcut: "Alt+Shift+P".to_string(),
            export_location: ExportLocation::SavedIcons,
            sweep_on_startup: Some(false),
        };

        manager.save(&config).unwrap();

        assert!(manager.path().exists());
        assert_eq!(manager.load(), config);
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_in(&dir);
        manager.save(&AppConfig::default()).unwrap();
        manager.save(&AppConfig::default()).unwrap();

        let entries: Vec<_> = std::fs::read_dir(manager.path().parent().unwrap())
            .unwrap()
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_shortcut_preserves_other_settings() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_in(&dir);
        manager
            .save(&AppConfig {
                export_location: ExportLocation::Downloads,
                ..AppConfig::default()
            })
            .unwrap();

        manager.save_shortcut("Ctrl+Alt+K").unwrap();

        let config = manager.load();
        assert_eq!(config.shortcut, "Ctrl+Alt+K");
        assert_eq!(config.export_location, ExportLocation::Downloads);
    }

    #[test]
    fn test_persisted_file_matches_documented_shape() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_in(&dir);
        manager.save_shortcut("Alt+Space").unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(manager.path()).unwrap()).unwrap();
        assert_eq!(json["shortcut"], "Alt+Space");
    }
}
