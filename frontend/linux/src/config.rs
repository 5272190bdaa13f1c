//! Frontend configuration management
//!
//! Thin wrapper around the shared [`ConfigManager`] that knows where the
//! Linux config file lives and converts load failures into `anyhow` errors
//! at the application boundary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use rollcall_shared::config::AppConfig;

/// Manages the frontend's configuration file
#[derive(Debug)]
pub struct ConfigManager {
    inner: rollcall_shared::ConfigManager,
}

impl ConfigManager {
    /// Create a manager at the default XDG location and load it
    pub fn new() -> Result<Self> {
        Self::with_path(Self::default_config_path()?)
    }

    /// Create a manager at an explicit path and load it
    pub fn with_path(path: PathBuf) -> Result<Self> {
        let mut inner = rollcall_shared::ConfigManager::new(&path);
        inner
            .load()
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;
        debug!(loaded = inner.is_loaded(), "configuration ready");
        Ok(Self { inner })
    }

    /// Default path: `$XDG_CONFIG_HOME/rollcall/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("could not determine user config directory")?;
        Ok(config_dir.join("rollcall").join("config.toml"))
    }

    pub fn config(&self) -> &AppConfig {
        self.inner.config()
    }

    pub fn config_mut(&mut self) -> &mut AppConfig {
        self.inner.config_mut()
    }

    /// Persist the current configuration
    pub fn save(&self) -> Result<()> {
        self.inner.save().with_context(|| {
            format!(
                "failed to save configuration to {}",
                self.inner.path().display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(*manager.config(), AppConfig::default());
    }

    #[test]
    fn test_save_then_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut manager = ConfigManager::with_path(path.clone()).unwrap();
        manager.config_mut().ui.theme = "dark".to_string();
        manager.save().unwrap();

        let reloaded = ConfigManager::with_path(path).unwrap();
        assert_eq!(reloaded.config().ui.theme, "dark");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "][ nope").unwrap();

        assert!(ConfigManager::with_path(path).is_err());
    }
}
