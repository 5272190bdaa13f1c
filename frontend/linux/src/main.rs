//! RollCall Linux Frontend
//!
//! The desktop sign-in screen for the RollCall attendance system, built
//! with the Iced GUI framework. It shows a looping decorative animation
//! above a username/password form with a password visibility toggle.

use std::path::PathBuf;

use clap::Parser;
use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Application, Command, Element, Length, Settings, Subscription, Theme};
use tracing::{debug, error, info};

mod config;
mod ui;

use config::ConfigManager;
use rollcall_shared::config::AppConfig;
use rollcall_shared::logging::{self, LogFormat, LogLevel, LoggingConfig};
use ui::theme::{button_styles, container_styles, utils};
use ui::{create_rollcall_theme, theme, AnimationPlayer, LoginMessage, LoginView};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "rollcall", version, about = "RollCall sign-in screen")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable the decorative animation
    #[arg(long)]
    no_animation: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Explicit log level (error, warn, info, debug, trace); overrides --verbose
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::parse(value).ok_or_else(|| format!("unknown log level: {}", value))
}

/// Startup flags passed into the application
#[derive(Debug, Clone, Default)]
struct AppFlags {
    config_path: Option<PathBuf>,
    no_animation: bool,
}

/// Main application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Configuration finished loading
    ConfigLoaded(Result<AppConfig, String>),

    /// Login view messages
    Login(LoginMessage),

    /// Animation frame timer fired
    AnimationTick,

    /// Quit the application
    Quit,
}

/// Application state
#[derive(Debug)]
enum AppState {
    Loading,
    LoginActive(LoginView),
    SignedIn { username: String },
    Error(String),
}

/// Main application structure
struct RollCallApp {
    state: AppState,
    animation: AnimationPlayer,
    no_animation: bool,
    theme: Theme,
}

impl Application for RollCallApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        info!("Initializing RollCall Linux frontend");

        let app = Self {
            state: AppState::Loading,
            animation: AnimationPlayer::disabled(),
            no_animation: flags.no_animation,
            theme: create_rollcall_theme(),
        };

        let load_config_command = Command::perform(
            Self::load_config_async(flags.config_path),
            Message::ConfigLoaded,
        );

        (app, load_config_command)
    }

    fn title(&self) -> String {
        match &self.state {
            AppState::Loading => "RollCall - Loading...".to_string(),
            AppState::LoginActive(_) => "RollCall - Sign In".to_string(),
            AppState::SignedIn { .. } => "RollCall".to_string(),
            AppState::Error(_) => "RollCall - Error".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ConfigLoaded(result) => {
                match result {
                    Ok(config) => {
                        info!("Configuration loaded successfully");

                        self.animation = if self.no_animation {
                            debug!("Animation disabled on the command line");
                            AnimationPlayer::disabled()
                        } else {
                            AnimationPlayer::from_config(&config.animation)
                        };

                        self.state = AppState::LoginActive(LoginView::new());
                    }
                    Err(message) => {
                        error!("Failed to load configuration: {}", message);
                        self.state =
                            AppState::Error(format!("Configuration error: {}", message));
                    }
                }
                Command::none()
            }

            Message::Login(login_msg) => {
                if let AppState::LoginActive(login_view) = &mut self.state {
                    let command = login_view.update(login_msg).map(Message::Login);

                    if login_view.is_complete() {
                        let username = login_view.username().unwrap_or_default().to_string();
                        info!(username = %username, "user signed in");
                        self.state = AppState::SignedIn { username };
                    }

                    return command;
                }
                Command::none()
            }

            Message::AnimationTick => {
                self.animation.tick();
                Command::none()
            }

            Message::Quit => {
                info!("Application quit requested");
                iced::window::close(iced::window::Id::MAIN)
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.animation.is_playing() {
            iced::time::every(self.animation.frame_interval()).map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<Message> {
        match &self.state {
            AppState::Loading => self.view_loading(),
            AppState::LoginActive(login_view) => self.view_login(login_view),
            AppState::SignedIn { username } => self.view_signed_in(username),
            AppState::Error(error) => self.view_error(error),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

impl RollCallApp {
    /// View loading screen
    fn view_loading(&self) -> Element<Message> {
        container(
            column![
                Space::with_height(Length::Fill),
                text("Loading RollCall...")
                    .size(24)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
                Space::with_height(Length::Fill),
            ]
            .align_items(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }

    /// View the sign-in screen with the animation above the form
    fn view_login<'a>(&'a self, login_view: &'a LoginView) -> Element<'a, Message> {
        let mut content = column![].align_items(Alignment::Center);

        if let Some(animation) = self.animation.view() {
            content = content
                .push(Space::with_height(Length::Fixed(30.0)))
                .push(animation);
        } else {
            content = content
                .push(Space::with_height(Length::Fixed(30.0)))
                .push(
                    iced::widget::svg(theme::rollcall_logo())
                        .width(Length::Fixed(80.0))
                        .height(Length::Fixed(80.0)),
                );
        }

        content = content
            .push(Space::with_height(Length::Fixed(20.0)))
            .push(login_view.view().map(Message::Login));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .into()
    }

    /// View shown once the form has been submitted
    fn view_signed_in(&self, username: &str) -> Element<Message> {
        container(
            column![
                Space::with_height(Length::Fill),
                iced::widget::svg(theme::rollcall_logo())
                    .width(Length::Fixed(64.0))
                    .height(Length::Fixed(64.0)),
                Space::with_height(Length::Fixed(20.0)),
                text(format!("Welcome, {}!", username))
                    .size(28)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
                Space::with_height(Length::Fixed(10.0)),
                text("You are signed in.")
                    .size(14)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
                Space::with_height(Length::Fixed(30.0)),
                button("Quit")
                    .on_press(Message::Quit)
                    .style(button_styles::secondary())
                    .padding(utils::button_padding()),
                Space::with_height(Length::Fill),
            ]
            .align_items(Alignment::Center)
            .max_width(500),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }

    /// View error screen
    fn view_error(&self, error: &str) -> Element<Message> {
        container(
            column![
                Space::with_height(Length::Fill),
                iced::widget::svg(theme::alert_icon())
                    .width(Length::Fixed(48.0))
                    .height(Length::Fixed(48.0)),
                Space::with_height(Length::Fixed(20.0)),
                text("Something went wrong")
                    .size(24)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
                Space::with_height(Length::Fixed(20.0)),
                container(
                    text(error)
                        .size(14)
                        .horizontal_alignment(iced::alignment::Horizontal::Center)
                )
                .style(container_styles::error_alert())
                .padding(utils::alert_padding()),
                Space::with_height(Length::Fixed(30.0)),
                button("Quit")
                    .on_press(Message::Quit)
                    .style(button_styles::primary())
                    .padding(utils::button_padding()),
                Space::with_height(Length::Fill),
            ]
            .align_items(Alignment::Center)
            .max_width(500),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }

    /// Async function to load configuration
    async fn load_config_async(config_path: Option<PathBuf>) -> Result<AppConfig, String> {
        let manager = match config_path {
            Some(path) => ConfigManager::with_path(path),
            None => ConfigManager::new(),
        };

        manager
            .map(|m| m.config().clone())
            .map_err(|e| e.to_string())
    }
}

fn main() -> iced::Result {
    let cli = Cli::parse();

    match cli.log_level {
        Some(level) => logging::init_logging(LoggingConfig {
            level,
            format: LogFormat::Full,
        }),
        None => logging::init_desktop_logging(cli.verbose),
    }

    info!("Starting RollCall Linux frontend");

    let flags = AppFlags {
        config_path: cli.config,
        no_animation: cli.no_animation,
    };

    let settings = Settings {
        window: iced::window::Settings {
            size: iced::Size::new(480.0, 640.0),
            min_size: Some(iced::Size::new(400.0, 520.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        flags,
        fonts: vec![],
        default_font: iced::Font::DEFAULT,
        antialiasing: true,
        ..Default::default()
    };

    RollCallApp::run(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_log_level() {
        let cli = Cli::try_parse_from(["rollcall", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_cli_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["rollcall", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["rollcall"]).unwrap();
        assert_eq!(cli.log_level, None);
        assert!(!cli.verbose);
        assert!(!cli.no_animation);
        assert_eq!(cli.config, None);
    }
}
