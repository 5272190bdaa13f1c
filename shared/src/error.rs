//! Error types for the RollCall shared library
//!
//! Every recoverable failure is an explicit variant here:
//! a missing form field is a checked `MissingElement` result rather than a
//! panic, and an unreachable animation resource is an `AnimationError` the
//! frontend can log and shrug off.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::models::LoginForm`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The form has no field with the given identifier
    #[error("form field not found: {id}")]
    MissingElement { id: String },
}

/// Errors raised while loading a decorative animation resource
#[derive(Debug, Error)]
pub enum AnimationError {
    /// The configured resource path does not exist
    #[error("animation resource not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The resource exists but yields no frames
    #[error("animation resource contains no frames: {}", path.display())]
    Empty { path: PathBuf },

    /// Reading the resource failed
    #[error("failed to read animation resource {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by configuration load/save
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for form operations
pub type FormResult<T> = Result<T, FormError>;
