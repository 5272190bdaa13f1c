//! Decorative animation player
//!
//! Wraps a shared [`AnimationReel`] in SVG handles the toolkit can draw and
//! steps it on a timer subscription. The player is purely decorative: when
//! loading fails or the animation is disabled it renders nothing, and the
//! login form is unaffected either way.

use std::time::Duration;

use iced::widget::svg;
use iced::{Element, Length};
use tracing::{debug, warn};

use rollcall_shared::config::AnimationConfig;
use rollcall_shared::{AnimationReel, AnimationSpec};

/// Animation frames compiled into the binary, used when no path override
/// is configured.
const DEFAULT_FRAMES: [&[u8]; 4] = [
    include_bytes!("../../../resources/animation/frame-0.svg"),
    include_bytes!("../../../resources/animation/frame-1.svg"),
    include_bytes!("../../../resources/animation/frame-2.svg"),
    include_bytes!("../../../resources/animation/frame-3.svg"),
];

/// Plays the looping sign-in animation
#[derive(Debug)]
pub struct AnimationPlayer {
    reel: Option<AnimationReel>,
    /// One handle per frame, built once so drawing never re-parses bytes
    handles: Vec<svg::Handle>,
    width: f32,
    height: f32,
}

impl AnimationPlayer {
    /// Build a player from the animation configuration
    ///
    /// A load failure logs a warning and yields a player that draws
    /// nothing. The caller never has to handle animation errors.
    pub fn from_config(config: &AnimationConfig) -> Self {
        if !config.enabled {
            debug!("animation disabled by configuration");
            return Self::disabled();
        }

        let (reel, spec) = match &config.path {
            Some(path) => {
                let spec = Self::spec_from_config(config, path.clone());
                let reel = match AnimationReel::load(&spec) {
                    Ok(reel) => Some(reel),
                    Err(e) => {
                        warn!("animation unavailable, continuing without it: {}", e);
                        None
                    }
                };
                (reel, spec)
            }
            None => {
                let spec = Self::spec_from_config(config, "embedded");
                let frames = DEFAULT_FRAMES.iter().map(|f| f.to_vec()).collect();
                (Some(AnimationReel::from_frames(frames, &spec)), spec)
            }
        };

        Self::from_reel(reel, spec.width, spec.height)
    }

    /// A player that renders nothing
    pub fn disabled() -> Self {
        Self {
            reel: None,
            handles: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    fn from_reel(reel: Option<AnimationReel>, width: f32, height: f32) -> Self {
        let handles = reel
            .as_ref()
            .map(|reel| {
                (0..reel.frame_count())
                    .filter_map(|i| reel.frame(i))
                    .map(|frame| svg::Handle::from_memory(frame.to_vec()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            reel,
            handles,
            width,
            height,
        }
    }

    fn spec_from_config<P: Into<std::path::PathBuf>>(
        config: &AnimationConfig,
        path: P,
    ) -> AnimationSpec {
        let mut spec = AnimationSpec::new(path);
        spec.looping = config.looping;
        spec.autoplay = config.autoplay;
        spec.frame_rate = config.frame_rate;
        spec
    }

    /// Whether the timer subscription should be running
    pub fn is_playing(&self) -> bool {
        self.reel.as_ref().is_some_and(AnimationReel::is_playing)
    }

    /// Time between frames while playing
    pub fn frame_interval(&self) -> Duration {
        self.reel
            .as_ref()
            .map(AnimationReel::frame_interval)
            .unwrap_or(Duration::from_millis(125))
    }

    /// Advance to the next frame on a timer tick
    pub fn tick(&mut self) {
        if let Some(reel) = &mut self.reel {
            reel.advance();
        }
    }

    /// Render the current frame, or nothing when no reel is loaded
    pub fn view<Message: 'static>(&self) -> Option<Element<Message>> {
        let reel = self.reel.as_ref()?;
        let handle = self.handles.get(reel.cursor())?.clone();
        Some(
            svg(handle)
                .width(Length::Fixed(self.width))
                .height(Length::Fixed(self.height))
                .into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_plays_embedded_frames() {
        let player = AnimationPlayer::from_config(&AnimationConfig::default());
        assert!(player.is_playing());
        assert!(player.view::<()>().is_some());
    }

    #[test]
    fn test_disabled_config_renders_nothing() {
        let config = AnimationConfig {
            enabled: false,
            ..AnimationConfig::default()
        };
        let player = AnimationPlayer::from_config(&config);
        assert!(!player.is_playing());
        assert!(player.view::<()>().is_none());
    }

    #[test]
    fn test_missing_override_path_degrades_to_nothing() {
        let config = AnimationConfig {
            path: Some(std::path::PathBuf::from("/nonexistent/frames")),
            ..AnimationConfig::default()
        };
        let player = AnimationPlayer::from_config(&config);
        assert!(!player.is_playing());
        assert!(player.view::<()>().is_none());
    }

    #[test]
    fn test_tick_advances_without_panicking() {
        let mut player = AnimationPlayer::from_config(&AnimationConfig::default());
        for _ in 0..10 {
            player.tick();
        }
        assert!(player.is_playing());
    }

    #[test]
    fn test_frame_interval_follows_config_rate() {
        let config = AnimationConfig {
            frame_rate: 4.0,
            ..AnimationConfig::default()
        };
        let player = AnimationPlayer::from_config(&config);
        assert_eq!(player.frame_interval(), Duration::from_millis(250));
    }
}
