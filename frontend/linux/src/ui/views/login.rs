//! Login View
//!
//! The sign-in form: username and password inputs, a password visibility
//! toggle, and a submit button. Form state lives in the shared
//! [`LoginForm`], which resolves fields by identifier and reports a missing
//! field as an error instead of panicking. The view treats that error as a
//! no-op and logs it; the rest of the form keeps working.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Command, Element, Length};
use tracing::{debug, info, warn};

use crate::ui::theme::{button_styles, text_input_styles, utils};
use rollcall_shared::models::{fields, FieldMode, LoginForm};

/// Messages for the login view
#[derive(Debug, Clone)]
pub enum LoginMessage {
    /// Username input changed
    UsernameChanged(String),
    /// Password input changed
    PasswordChanged(String),
    /// Toggle password visibility
    TogglePasswordVisibility,
    /// Submit the form
    Submit,
}

/// State of the sign-in process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    /// Filling in the form
    Input,
    /// Form submitted
    Submitted,
}

/// Login view component
#[derive(Debug)]
pub struct LoginView {
    state: LoginState,
    form: LoginForm,
    can_submit: bool,
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginView {
    /// Create a new login view with an empty form
    pub fn new() -> Self {
        Self {
            state: LoginState::Input,
            form: LoginForm::new(),
            can_submit: false,
        }
    }

    /// Create a login view over an existing form
    pub fn with_form(form: LoginForm) -> Self {
        let can_submit = form.is_filled();
        Self {
            state: LoginState::Input,
            form,
            can_submit,
        }
    }

    /// Update the view with a message
    pub fn update(&mut self, message: LoginMessage) -> Command<LoginMessage> {
        match message {
            LoginMessage::UsernameChanged(value) => {
                self.set_field(fields::USERNAME, value);
                Command::none()
            }

            LoginMessage::PasswordChanged(value) => {
                self.set_field(fields::PASSWORD, value);
                Command::none()
            }

            LoginMessage::TogglePasswordVisibility => {
                match self.form.toggle_visibility(fields::PASSWORD) {
                    Ok(mode) => {
                        debug!(mode = ?mode, "password visibility toggled");
                    }
                    Err(e) => {
                        // The form has no password field; leave the rest of
                        // the screen functional.
                        warn!("password visibility toggle skipped: {}", e);
                    }
                }
                Command::none()
            }

            LoginMessage::Submit => {
                if self.can_submit {
                    info!("sign-in form submitted");
                    self.state = LoginState::Submitted;
                } else {
                    debug!("submit ignored, form incomplete");
                }
                Command::none()
            }
        }
    }

    /// Render the view
    pub fn view(&self) -> Element<LoginMessage> {
        let header = self.view_header();
        let username_input = self.view_username_input();
        let password_input = self.view_password_input();
        let submit = self.view_submit();

        scrollable(
            container(
                column![
                    header,
                    Space::with_height(Length::Fixed(30.0)),
                    username_input,
                    Space::with_height(Length::Fixed(20.0)),
                    password_input,
                    Space::with_height(Length::Fixed(40.0)),
                    submit,
                ]
                .align_items(Alignment::Center)
                .max_width(400),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn view_header(&self) -> Element<LoginMessage> {
        column![
            text("Sign In")
                .size(28)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
            Space::with_height(Length::Fixed(10.0)),
            text("Enter your roll number and password to mark attendance.")
                .size(14)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        ]
        .align_items(Alignment::Center)
        .into()
    }

    fn view_username_input(&self) -> Element<LoginMessage> {
        let input = text_input("Roll number", self.field_value(fields::USERNAME))
            .on_input(LoginMessage::UsernameChanged)
            .style(text_input_styles::standard())
            .padding(utils::text_input_padding())
            .width(Length::Fill);

        column![
            text("Username")
                .size(16)
                .horizontal_alignment(iced::alignment::Horizontal::Left),
            Space::with_height(Length::Fixed(8.0)),
            input,
        ]
        .width(Length::Fill)
        .into()
    }

    fn view_password_input(&self) -> Element<LoginMessage> {
        let show_password = !self.password_masked();

        let input = text_input("Password", self.field_value(fields::PASSWORD))
            .on_input(LoginMessage::PasswordChanged)
            .on_submit(LoginMessage::Submit)
            .secure(!show_password)
            .style(text_input_styles::standard())
            .padding(utils::text_input_padding())
            .width(Length::Fill);

        let toggle_button = utils::password_visibility_toggle(
            show_password,
            LoginMessage::TogglePasswordVisibility,
        );

        column![
            text("Password")
                .size(16)
                .horizontal_alignment(iced::alignment::Horizontal::Left),
            Space::with_height(Length::Fixed(8.0)),
            row![
                input,
                Space::with_width(Length::Fixed(10.0)),
                toggle_button
            ]
            .align_items(Alignment::Center),
        ]
        .width(Length::Fill)
        .into()
    }

    fn view_submit(&self) -> Element<LoginMessage> {
        let submit_button = if self.can_submit {
            button("Sign In")
                .on_press(LoginMessage::Submit)
                .style(button_styles::primary())
                .padding(utils::button_padding())
        } else {
            button("Sign In")
                .style(button_styles::disabled())
                .padding(utils::button_padding())
        };

        submit_button.into()
    }

    /// Whether the password field currently renders masked
    ///
    /// A form without a password field reports masked so nothing sensitive
    /// could ever render in the clear.
    pub fn password_masked(&self) -> bool {
        self.form
            .display_mode(fields::PASSWORD)
            .map(FieldMode::is_masked)
            .unwrap_or(true)
    }

    /// Check if the form was submitted
    pub fn is_complete(&self) -> bool {
        self.state == LoginState::Submitted
    }

    /// The entered username, available once submitted
    pub fn username(&self) -> Option<&str> {
        if self.is_complete() {
            self.form.value(fields::USERNAME).ok()
        } else {
            None
        }
    }

    fn field_value(&self, id: &str) -> &str {
        self.form.value(id).unwrap_or("")
    }

    fn set_field(&mut self, id: &str, value: String) {
        if let Err(e) = self.form.set_value(id, &value) {
            warn!("input ignored: {}", e);
        }
        self.can_submit = self.form.is_filled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_shared::models::FormField;

    fn drive(view: &mut LoginView, message: LoginMessage) {
        let _ = view.update(message);
    }

    #[test]
    fn test_password_starts_masked() {
        let view = LoginView::new();
        assert!(view.password_masked());
    }

    #[test]
    fn test_toggle_reveals_and_again_masks() {
        let mut view = LoginView::new();

        drive(&mut view, LoginMessage::TogglePasswordVisibility);
        assert!(!view.password_masked());

        drive(&mut view, LoginMessage::TogglePasswordVisibility);
        assert!(view.password_masked());
    }

    #[test]
    fn test_toggle_on_form_without_password_is_a_noop() {
        let mut form = LoginForm::empty();
        form.insert(fields::USERNAME, FormField::text("Roll number"));
        let mut view = LoginView::with_form(form);

        // Must not panic, and the reported mode stays masked.
        drive(&mut view, LoginMessage::TogglePasswordVisibility);
        assert!(view.password_masked());
    }

    #[test]
    fn test_toggle_does_not_change_values_or_submit_state() {
        let mut view = LoginView::new();
        drive(&mut view, LoginMessage::UsernameChanged("25am001".into()));
        drive(&mut view, LoginMessage::PasswordChanged("12345".into()));

        drive(&mut view, LoginMessage::TogglePasswordVisibility);

        assert_eq!(view.field_value(fields::USERNAME), "25am001");
        assert_eq!(view.field_value(fields::PASSWORD), "12345");
        assert!(!view.is_complete());
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut view = LoginView::new();
        drive(&mut view, LoginMessage::Submit);
        assert!(!view.is_complete());

        drive(&mut view, LoginMessage::UsernameChanged("25am001".into()));
        drive(&mut view, LoginMessage::Submit);
        assert!(!view.is_complete());

        drive(&mut view, LoginMessage::PasswordChanged("12345".into()));
        drive(&mut view, LoginMessage::Submit);
        assert!(view.is_complete());
        assert_eq!(view.username(), Some("25am001"));
    }

    #[test]
    fn test_username_hidden_until_submitted() {
        let mut view = LoginView::new();
        drive(&mut view, LoginMessage::UsernameChanged("25am001".into()));
        assert_eq!(view.username(), None);
    }
}
