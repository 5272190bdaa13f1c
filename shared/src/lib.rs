//! Shared library for the RollCall sign-in screen
//!
//! This crate contains everything the desktop frontend needs that is not
//! tied to a GUI toolkit: the field display-mode model and login-form state,
//! the decorative-animation loader, configuration management, logging setup,
//! and the error types used across the workspace.

pub mod animation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

// Re-export the types frontends use most.
pub use animation::{AnimationReel, AnimationSpec, Renderer};
pub use config::{AnimationConfig, AppConfig, ConfigManager, UiConfig};
pub use error::{AnimationError, ConfigError, FormError};
pub use models::{fields, FieldMode, FormField, LoginForm};
