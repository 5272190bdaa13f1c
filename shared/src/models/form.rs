//! Login form state
//!
//! The form owns its fields and hands out access through checked lookups:
//! asking for a field that does not exist is an explicit
//! [`FormError::MissingElement`] result, never a panic. Callers hold a
//! reference to the form itself, so the precondition "the field exists" is
//! checkable at the call boundary instead of being an implicit global
//! assumption.

use std::collections::BTreeMap;

use crate::error::{FormError, FormResult};
use crate::models::field::{FieldMode, FormField};

/// Well-known field identifiers used by the sign-in screen
pub mod fields {
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
}

/// State of the sign-in form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    fields: BTreeMap<String, FormField>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    /// Create the standard sign-in form: a username input and a masked
    /// password input.
    pub fn new() -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(fields::USERNAME.to_string(), FormField::text("Username"));
        fields.insert(
            fields::PASSWORD.to_string(),
            FormField::sensitive("Password"),
        );
        Self { fields }
    }

    /// Create an empty form with no fields. Mostly useful in tests that
    /// exercise the missing-element path.
    pub fn empty() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Add or replace a field under the given identifier
    pub fn insert<S: Into<String>>(&mut self, id: S, field: FormField) {
        self.fields.insert(id.into(), field);
    }

    pub fn field(&self, id: &str) -> FormResult<&FormField> {
        self.fields.get(id).ok_or_else(|| FormError::MissingElement {
            id: id.to_string(),
        })
    }

    fn field_mut(&mut self, id: &str) -> FormResult<&mut FormField> {
        self.fields
            .get_mut(id)
            .ok_or_else(|| FormError::MissingElement {
                id: id.to_string(),
            })
    }

    /// Flip the display mode of the given field and return the new mode.
    ///
    /// This is the visibility-toggle operation: it reads the current mode
    /// and switches to the other one, exactly one transition per call.
    pub fn toggle_visibility(&mut self, id: &str) -> FormResult<FieldMode> {
        Ok(self.field_mut(id)?.toggle_mode())
    }

    /// Current display mode of the given field
    pub fn display_mode(&self, id: &str) -> FormResult<FieldMode> {
        Ok(self.field(id)?.mode())
    }

    /// Replace the text of the given field without touching its mode
    pub fn set_value(&mut self, id: &str, value: &str) -> FormResult<()> {
        self.field_mut(id)?.set_value(value);
        Ok(())
    }

    pub fn value(&self, id: &str) -> FormResult<&str> {
        Ok(self.field(id)?.value())
    }

    /// Whether every field has a non-empty value. The frontend uses this to
    /// gate the submit button; it is not validation.
    pub fn is_filled(&self) -> bool {
        !self.fields.is_empty() && self.fields.values().all(|f| !f.value().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_password_starts_masked() {
        let form = LoginForm::new();
        assert_eq!(
            form.display_mode(fields::PASSWORD).unwrap(),
            FieldMode::Masked
        );
    }

    #[test]
    fn test_single_toggle_reveals() {
        let mut form = LoginForm::new();
        let mode = form.toggle_visibility(fields::PASSWORD).unwrap();
        assert_eq!(mode, FieldMode::Plain);
        assert_eq!(
            form.display_mode(fields::PASSWORD).unwrap(),
            FieldMode::Plain
        );
    }

    #[test]
    fn test_double_toggle_masks_again() {
        let mut form = LoginForm::new();
        form.toggle_visibility(fields::PASSWORD).unwrap();
        let mode = form.toggle_visibility(fields::PASSWORD).unwrap();
        assert_eq!(mode, FieldMode::Masked);
    }

    #[test]
    fn test_toggle_parity_over_many_invocations() {
        let mut form = LoginForm::new();
        for n in 1..=20 {
            let mode = form.toggle_visibility(fields::PASSWORD).unwrap();
            if n % 2 == 0 {
                assert_eq!(mode, FieldMode::Masked, "after {} toggles", n);
            } else {
                assert_eq!(mode, FieldMode::Plain, "after {} toggles", n);
            }
        }
    }

    #[test]
    fn test_missing_field_is_a_checked_error() {
        let mut form = LoginForm::empty();
        let result = form.toggle_visibility(fields::PASSWORD);
        assert_matches!(
            result,
            Err(FormError::MissingElement { ref id }) if id == fields::PASSWORD
        );
    }

    #[test]
    fn test_toggle_does_not_touch_other_fields_or_values() {
        let mut form = LoginForm::new();
        form.set_value(fields::USERNAME, "25am001").unwrap();
        form.set_value(fields::PASSWORD, "12345").unwrap();

        form.toggle_visibility(fields::PASSWORD).unwrap();

        assert_eq!(form.value(fields::USERNAME).unwrap(), "25am001");
        assert_eq!(form.value(fields::PASSWORD).unwrap(), "12345");
        // The username field's own mode is untouched.
        assert_eq!(
            form.display_mode(fields::USERNAME).unwrap(),
            FieldMode::Plain
        );
    }

    #[test]
    fn test_is_filled_gates_on_both_fields() {
        let mut form = LoginForm::new();
        assert!(!form.is_filled());

        form.set_value(fields::USERNAME, "25am001").unwrap();
        assert!(!form.is_filled());

        form.set_value(fields::PASSWORD, "12345").unwrap();
        assert!(form.is_filled());
    }
}
