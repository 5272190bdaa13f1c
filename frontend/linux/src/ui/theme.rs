//! RollCall Theme Configuration
//!
//! Brand colors, embedded icons, and widget styles for the sign-in screen.
//! Style structs implement the Iced style sheets so views can share one
//! consistent look without repeating appearance code.

use iced::widget::{button, container, svg, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// RollCall logo SVG data embedded at compile time
pub const ROLLCALL_LOGO_SVG: &[u8] = include_bytes!("../../resources/icons/rollcall-logo.svg");

/// Eye icon for showing passwords
pub const EYE_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/eye-solid.svg");

/// Crossed-out eye icon for hiding passwords
pub const EYE_OFF_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/eye-off.svg");

/// Alert icon for error banners
pub const ALERT_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/alert.svg");

/// Creates an SVG handle for the RollCall logo
pub fn rollcall_logo() -> svg::Handle {
    svg::Handle::from_memory(ROLLCALL_LOGO_SVG)
}

/// Creates an SVG handle for the eye icon
pub fn eye_icon() -> svg::Handle {
    svg::Handle::from_memory(EYE_ICON_SVG)
}

/// Creates an SVG handle for the crossed-out eye icon
pub fn eye_off_icon() -> svg::Handle {
    svg::Handle::from_memory(EYE_OFF_ICON_SVG)
}

/// Creates an SVG handle for the alert icon
pub fn alert_icon() -> svg::Handle {
    svg::Handle::from_memory(ALERT_ICON_SVG)
}

/// Primary brand blue from the RollCall logo
pub const BRAND_BLUE: Color = Color::from_rgb(0.153, 0.392, 0.824);

/// Slightly darker blue for hover states
pub const BRAND_BLUE_HOVER: Color = Color::from_rgb(0.125, 0.333, 0.722);

/// Even darker blue for pressed states
pub const BRAND_BLUE_PRESSED: Color = Color::from_rgb(0.102, 0.278, 0.620);

/// Translucent blue for subtle hover backgrounds
pub const BRAND_BLUE_LIGHT: Color = Color::from_rgba(0.153, 0.392, 0.824, 0.1);

/// Translucent blue for pressed secondary buttons
pub const BRAND_BLUE_MEDIUM: Color = Color::from_rgba(0.153, 0.392, 0.824, 0.2);

/// Success green for confirmations
pub const SUCCESS_GREEN: Color = Color::from_rgb(0.024, 0.710, 0.443);

/// Error red for failures and alerts
pub const ERROR_RED: Color = Color::from_rgb(0.871, 0.251, 0.322);

/// Translucent red for error banner backgrounds
pub const ERROR_RED_LIGHT: Color = Color::from_rgba(0.871, 0.251, 0.322, 0.1);

/// Light page background
pub const LIGHT_BACKGROUND: Color = Color::from_rgb(0.969, 0.976, 0.988);

/// Dark text color
pub const DARK_TEXT: Color = Color::from_rgb(0.129, 0.145, 0.161);

/// Plain white
pub const WHITE: Color = Color::WHITE;

/// Fully transparent
pub const TRANSPARENT: Color = Color::TRANSPARENT;

/// Background for disabled buttons
pub const DISABLED_BACKGROUND: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Text color for disabled elements
pub const DISABLED_TEXT: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Border color for disabled elements
pub const DISABLED_BORDER: Color = Color::from_rgb(0.7, 0.7, 0.7);

/// Soft drop shadow
pub const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.1);

/// Medium gray for icons and placeholder text
pub const MEDIUM_GRAY: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Light gray border for text inputs at rest
pub const LIGHT_GRAY_BORDER: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Very light gray background for disabled inputs
pub const VERY_LIGHT_GRAY: Color = Color::from_rgb(0.95, 0.95, 0.95);

/// Creates the RollCall custom theme with brand colors
pub fn create_rollcall_theme() -> Theme {
    Theme::custom(
        "RollCall".to_string(),
        iced::theme::Palette {
            background: LIGHT_BACKGROUND,
            text: DARK_TEXT,
            primary: BRAND_BLUE,
            success: SUCCESS_GREEN,
            danger: ERROR_RED,
        },
    )
}

/// Custom button style functions for consistent styling across views
pub mod button_styles {
    use super::*;

    /// Solid brand-blue button for the main action on a screen
    pub fn primary() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(PrimaryButtonStyle))
    }

    /// Outlined button for secondary actions
    pub fn secondary() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(SecondaryButtonStyle))
    }

    /// Grayed-out button for actions that cannot run yet
    pub fn disabled() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(DisabledButtonStyle))
    }

    /// Toggle button while the password is visible
    pub fn password_toggle_active() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(PasswordToggleStyle { active: true }))
    }

    /// Toggle button while the password is masked
    pub fn password_toggle_inactive() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(PasswordToggleStyle { active: false }))
    }

    struct PrimaryButtonStyle;

    impl button::StyleSheet for PrimaryButtonStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::new(0.0, 2.0),
                background: Some(Background::Color(BRAND_BLUE)),
                text_color: WHITE,
                border: Border {
                    color: BRAND_BLUE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 4.0,
                },
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(BRAND_BLUE_HOVER)),
                border: Border {
                    color: BRAND_BLUE_HOVER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..self.active(style)
            }
        }

        fn pressed(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(BRAND_BLUE_PRESSED)),
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: Vector::new(0.0, 1.0),
                    blur_radius: 2.0,
                },
                ..self.active(style)
            }
        }

        fn disabled(&self, _style: &Self::Style) -> button::Appearance {
            DisabledButtonStyle.active(_style)
        }
    }

    struct SecondaryButtonStyle;

    impl button::StyleSheet for SecondaryButtonStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::default(),
                background: Some(Background::Color(TRANSPARENT)),
                text_color: BRAND_BLUE,
                border: Border {
                    color: BRAND_BLUE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(BRAND_BLUE_LIGHT)),
                ..self.active(style)
            }
        }

        fn pressed(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(BRAND_BLUE_MEDIUM)),
                ..self.active(style)
            }
        }
    }

    struct DisabledButtonStyle;

    impl button::StyleSheet for DisabledButtonStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                shadow_offset: Vector::default(),
                background: Some(Background::Color(DISABLED_BACKGROUND)),
                text_color: DISABLED_TEXT,
                border: Border {
                    color: DISABLED_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }
    }

    struct PasswordToggleStyle {
        active: bool,
    }

    impl button::StyleSheet for PasswordToggleStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            let (background, border_color) = if self.active {
                (BRAND_BLUE_LIGHT, BRAND_BLUE)
            } else {
                (VERY_LIGHT_GRAY, LIGHT_GRAY_BORDER)
            };

            button::Appearance {
                shadow_offset: Vector::default(),
                background: Some(Background::Color(background)),
                text_color: BRAND_BLUE,
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(BRAND_BLUE_MEDIUM)),
                ..self.active(style)
            }
        }
    }
}

/// Custom text input styles for the login form
pub mod text_input_styles {
    use super::*;

    /// Standard input with a brand-blue focus ring
    pub fn standard() -> iced::theme::TextInput {
        iced::theme::TextInput::Custom(Box::new(StandardInputStyle))
    }

    struct StandardInputStyle;

    impl text_input::StyleSheet for StandardInputStyle {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> text_input::Appearance {
            text_input::Appearance {
                background: WHITE.into(),
                border: Border {
                    color: LIGHT_GRAY_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                icon_color: MEDIUM_GRAY,
            }
        }

        fn focused(&self, _style: &Self::Style) -> text_input::Appearance {
            text_input::Appearance {
                background: WHITE.into(),
                border: Border {
                    color: BRAND_BLUE,
                    width: 2.0,
                    radius: utils::border_radius().into(),
                },
                icon_color: MEDIUM_GRAY,
            }
        }

        fn placeholder_color(&self, _style: &Self::Style) -> Color {
            MEDIUM_GRAY
        }

        fn value_color(&self, _style: &Self::Style) -> Color {
            DARK_TEXT
        }

        fn disabled_color(&self, _style: &Self::Style) -> Color {
            DISABLED_TEXT
        }

        fn selection_color(&self, _style: &Self::Style) -> Color {
            BRAND_BLUE_MEDIUM
        }

        fn disabled(&self, _style: &Self::Style) -> text_input::Appearance {
            text_input::Appearance {
                background: VERY_LIGHT_GRAY.into(),
                border: Border {
                    color: LIGHT_GRAY_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                icon_color: MEDIUM_GRAY,
            }
        }

        fn hovered(&self, style: &Self::Style) -> text_input::Appearance {
            self.active(style)
        }
    }
}

/// Custom container styles for banners and panels
pub mod container_styles {
    use super::*;

    /// Red-tinted banner for error messages
    pub fn error_alert() -> iced::theme::Container {
        iced::theme::Container::Custom(Box::new(ErrorAlertStyle))
    }

    struct ErrorAlertStyle;

    impl container::StyleSheet for ErrorAlertStyle {
        type Style = Theme;

        fn appearance(&self, _style: &Self::Style) -> container::Appearance {
            container::Appearance {
                text_color: Some(ERROR_RED),
                background: Some(Background::Color(ERROR_RED_LIGHT)),
                border: Border {
                    color: ERROR_RED,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }
    }
}

/// Shared layout helpers
pub mod utils {
    use iced::Padding;

    /// Creates a consistent padding value for buttons
    pub fn button_padding() -> Padding {
        Padding::from([10, 20])
    }

    /// Creates a consistent padding value for text inputs
    pub fn text_input_padding() -> Padding {
        Padding::from([10, 15])
    }

    /// Creates a consistent padding for alert banners
    pub fn alert_padding() -> Padding {
        Padding::from([15, 20])
    }

    /// Creates a consistent padding for password visibility toggle buttons
    pub fn password_toggle_padding() -> Padding {
        Padding::from([8, 12])
    }

    /// Creates a consistent border radius for UI elements
    pub fn border_radius() -> f32 {
        8.0
    }

    /// Creates a password visibility toggle button with the eye icon
    ///
    /// `show_password` reflects the field's current display mode; the icon
    /// and styling indicate the action the press will take.
    pub fn password_visibility_toggle<'a, Message: Clone + 'a>(
        show_password: bool,
        on_toggle: Message,
    ) -> iced::widget::Button<'a, Message> {
        use iced::widget::{button, svg};

        let icon = if show_password {
            super::eye_icon()
        } else {
            super::eye_off_icon()
        };

        let style = if show_password {
            super::button_styles::password_toggle_active()
        } else {
            super::button_styles::password_toggle_inactive()
        };

        button(
            svg(icon)
                .width(iced::Length::Fixed(16.0))
                .height(iced::Length::Fixed(16.0)),
        )
        .on_press(on_toggle)
        .style(style)
        .padding(password_toggle_padding())
    }
}
