//! Application configuration
//!
//! TOML-backed settings shared between the frontend crates. [`ConfigManager`]
//! owns the on-disk lifecycle; the config structs are plain serde types with
//! defaults so a missing or partial file always yields something usable.

pub mod app_config;

pub use app_config::{AnimationConfig, AppConfig, UiConfig};

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ConfigError;

/// Loads and persists [`AppConfig`] at a fixed path
#[derive(Debug)]
pub struct ConfigManager {
    path: PathBuf,
    config: AppConfig,
    loaded: bool,
}

impl ConfigManager {
    /// Create a manager for the given config file path without touching disk
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            config: AppConfig::default(),
            loaded: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// Whether the last `load` read an existing file rather than defaults
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Read the config file, falling back to defaults when it does not exist
    pub fn load(&mut self) -> Result<(), ConfigError> {
        if !self.path.exists() {
            debug!(
                path = %self.path.display(),
                "no config file found, using defaults"
            );
            self.config = AppConfig::default();
            self.loaded = false;
            return Ok(());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        self.loaded = true;
        info!(path = %self.path.display(), "loaded configuration");
        Ok(())
    }

    /// Write the current config back to disk, creating parent directories
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(&self.config)?;
        std::fs::write(&self.path, contents).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "saved configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::new(temp_dir.path().join("config.toml"));

        manager.load().unwrap();
        assert!(!manager.is_loaded());
        assert_eq!(*manager.config(), AppConfig::default());
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut manager = ConfigManager::new(&path);
        manager.config_mut().ui.window_width = 720.0;
        manager.config_mut().animation.enabled = false;
        manager.save().unwrap();

        let mut reloaded = ConfigManager::new(&path);
        reloaded.load().unwrap();
        assert!(reloaded.is_loaded());
        assert_eq!(reloaded.config().ui.window_width, 720.0);
        assert!(!reloaded.config().animation.enabled);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"dark\"\n").unwrap();

        let mut manager = ConfigManager::new(&path);
        manager.load().unwrap();
        assert_eq!(manager.config().ui.theme, "dark");
        assert_eq!(
            manager.config().animation.frame_rate,
            AnimationConfig::default().frame_rate
        );
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[").unwrap();

        let mut manager = ConfigManager::new(&path);
        assert_matches!(manager.load(), Err(ConfigError::Parse { .. }));
    }
}
