//! UI Module for the RollCall Linux Frontend
//!
//! This module contains all user interface pieces of the sign-in screen:
//! the theme, the login view, and the decorative animation player.

pub mod components;
pub mod theme;
pub mod views;

// Re-export commonly used UI components
pub use components::AnimationPlayer;
pub use theme::{button_styles, container_styles, create_rollcall_theme, utils};
pub use views::{LoginMessage, LoginView};
