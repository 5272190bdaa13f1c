//! Data models for the RollCall sign-in screen
//!
//! The central entity is the field display mode: a password-style field is
//! always in exactly one of two states, masked or plain, and the visibility
//! toggle is the only writer of that state.

pub mod field;
pub mod form;

pub use field::{FieldMode, FormField};
pub use form::{fields, LoginForm};
