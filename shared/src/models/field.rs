//! Field display-mode types for the sign-in form
//!
//! A sensitive field renders its characters either as obscuring glyphs
//! (masked) or as literal text (plain). The mode is a pure two-state toggle:
//! flipping it twice always returns to the starting state.

use serde::{Deserialize, Serialize};

/// Display mode of a text-entry field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldMode {
    /// Characters are rendered as obscuring glyphs (the initial state)
    #[default]
    Masked,
    /// Characters are rendered as literal text
    Plain,
}

impl FieldMode {
    /// The opposite mode. Exactly one transition per call; not idempotent.
    pub fn toggled(self) -> Self {
        match self {
            FieldMode::Masked => FieldMode::Plain,
            FieldMode::Plain => FieldMode::Masked,
        }
    }

    pub fn is_masked(self) -> bool {
        matches!(self, FieldMode::Masked)
    }
}

/// A single labelled text-entry field
///
/// The value and the display mode are written through separate methods so
/// that editing text can never flip the mode and toggling can never touch
/// the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    label: String,
    value: String,
    sensitive: bool,
    mode: FieldMode,
}

impl FormField {
    /// Create a plain (never-masked) field such as a username input
    pub fn text<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            sensitive: false,
            mode: FieldMode::Plain,
        }
    }

    /// Create a sensitive field that starts masked
    pub fn sensitive<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            sensitive: true,
            mode: FieldMode::Masked,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    /// Replace the field's text. Leaves the display mode untouched.
    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
    }

    /// Flip the display mode and return the new mode.
    ///
    /// This is the only writer of the mode. Safe to call any number of
    /// times in sequence; each call performs exactly one transition.
    pub fn toggle_mode(&mut self) -> FieldMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}
