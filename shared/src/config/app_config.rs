//! Configuration data model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub animation: AnimationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

/// Window and theme settings for the sign-in screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub window_width: f32,
    pub window_height: f32,
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            window_width: 480.0,
            window_height: 640.0,
            font_size: 14.0,
        }
    }
}

/// Settings for the decorative animation above the login form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Turn the animation off entirely; the form is unaffected either way
    pub enabled: bool,
    /// Optional override pointing at an SVG file or a directory of frames.
    /// When unset the frames compiled into the binary are used.
    pub path: Option<PathBuf>,
    pub looping: bool,
    pub autoplay: bool,
    pub frame_rate: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            looping: true,
            autoplay: true,
            frame_rate: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[ui]"));
        assert!(toml_str.contains("[animation]"));
    }

    #[test]
    fn test_empty_document_deserializes_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_animation_path_override_roundtrips() {
        let mut config = AppConfig::default();
        config.animation.path = Some(PathBuf::from("/tmp/frames"));
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.animation.path, Some(PathBuf::from("/tmp/frames")));
    }
}
