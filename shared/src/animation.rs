//! Decorative animation loading for the sign-in screen
//!
//! The sign-in screen plays a small looping vector animation while the page
//! is up. This module knows nothing about rendering; it loads SVG frame
//! bytes from a resource path and steps a cursor over them. All failures are
//! explicit [`AnimationError`] values so the frontend can log a warning and
//! simply show no animation - a broken reel must never take the login form
//! down with it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::AnimationError;

/// Renderer kind for the animation frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Renderer {
    /// Vector frames rendered through the toolkit's SVG widget
    #[default]
    Svg,
}

/// How a decorative animation should be loaded and played
///
/// This mirrors the configuration the page hands its animation collaborator:
/// a renderer kind, loop and autoplay flags, and a resource path.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSpec {
    /// File or directory holding the frames. A directory is read as one
    /// frame per `.svg` entry in lexical order; a file is a one-frame reel.
    pub path: PathBuf,
    pub renderer: Renderer,
    pub looping: bool,
    pub autoplay: bool,
    /// Frames per second when the reel has more than one frame
    pub frame_rate: f32,
    /// Render target size in logical pixels
    pub width: f32,
    pub height: f32,
}

impl AnimationSpec {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            renderer: Renderer::Svg,
            looping: true,
            autoplay: true,
            frame_rate: 8.0,
            width: 160.0,
            height: 160.0,
        }
    }
}

/// A loaded animation: frame bytes plus playback state
#[derive(Debug, Clone)]
pub struct AnimationReel {
    frames: Vec<Vec<u8>>,
    cursor: usize,
    looping: bool,
    playing: bool,
    frame_rate: f32,
}

impl AnimationReel {
    /// Load a reel from the spec's resource path
    pub fn load(spec: &AnimationSpec) -> Result<Self, AnimationError> {
        let frames = read_frames(&spec.path)?;
        debug!(
            frames = frames.len(),
            path = %spec.path.display(),
            "loaded animation reel"
        );
        Ok(Self::from_frames(frames, spec))
    }

    /// Build a reel from frames already in memory (embedded defaults)
    ///
    /// An empty frame list yields a stopped reel that renders nothing;
    /// playback only starts with at least two frames.
    pub fn from_frames(frames: Vec<Vec<u8>>, spec: &AnimationSpec) -> Self {
        let playing = spec.autoplay && frames.len() > 1;
        Self {
            frames,
            cursor: 0,
            looping: spec.looping,
            playing,
            frame_rate: spec.frame_rate,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Index of the frame under the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Bytes of the frame under the cursor, or `None` for a frameless reel
    pub fn current_frame(&self) -> Option<&[u8]> {
        self.frame(self.cursor)
    }

    /// Bytes of the frame at the given index
    pub fn frame(&self, index: usize) -> Option<&[u8]> {
        self.frames.get(index).map(Vec::as_slice)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Time between frames, derived from the spec's frame rate
    pub fn frame_interval(&self) -> Duration {
        let rate = if self.frame_rate > 0.0 {
            self.frame_rate
        } else {
            1.0
        };
        Duration::from_secs_f32(1.0 / rate)
    }

    /// Step to the next frame. Wraps around when looping; otherwise stops
    /// on the last frame and returns `false`.
    pub fn advance(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        if self.cursor + 1 < self.frames.len() {
            self.cursor += 1;
            true
        } else if self.looping {
            self.cursor = 0;
            true
        } else {
            self.playing = false;
            false
        }
    }
}

fn read_frames(path: &Path) -> Result<Vec<Vec<u8>>, AnimationError> {
    if !path.exists() {
        return Err(AnimationError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let io_err = |source| AnimationError::Io {
        path: path.to_path_buf(),
        source,
    };

    if path.is_dir() {
        let mut entries: Vec<PathBuf> = std::fs::read_dir(path)
            .map_err(io_err)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "svg"))
            .collect();
        entries.sort();

        if entries.is_empty() {
            return Err(AnimationError::Empty {
                path: path.to_path_buf(),
            });
        }

        let mut frames = Vec::with_capacity(entries.len());
        for entry in entries {
            let bytes = std::fs::read(&entry).map_err(|source| AnimationError::Io {
                path: entry.clone(),
                source,
            })?;
            frames.push(bytes);
        }
        Ok(frames)
    } else {
        let bytes = std::fs::read(path).map_err(io_err)?;
        if bytes.is_empty() {
            return Err(AnimationError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(vec![bytes])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    const FRAME: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#;

    fn spec_for(path: &Path) -> AnimationSpec {
        AnimationSpec::new(path)
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let result = AnimationReel::load(&spec_for(&missing));
        assert_matches!(result, Err(AnimationError::NotFound { .. }));
    }

    #[test]
    fn test_directory_without_frames_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "not a frame").unwrap();
        let result = AnimationReel::load(&spec_for(temp_dir.path()));
        assert_matches!(result, Err(AnimationError::Empty { .. }));
    }

    #[test]
    fn test_directory_frames_load_in_lexical_order() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("frame-1.svg"), "b").unwrap();
        std::fs::write(temp_dir.path().join("frame-0.svg"), "a").unwrap();

        let reel = AnimationReel::load(&spec_for(temp_dir.path())).unwrap();
        assert_eq!(reel.frame_count(), 2);
        assert_eq!(reel.current_frame(), Some(b"a".as_slice()));
    }

    #[test]
    fn test_single_file_is_a_one_frame_reel() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("still.svg");
        std::fs::write(&file, FRAME).unwrap();

        let reel = AnimationReel::load(&spec_for(&file)).unwrap();
        assert_eq!(reel.frame_count(), 1);
        // A single frame has nothing to animate.
        assert!(!reel.is_playing());
    }

    #[test]
    fn test_looping_reel_wraps() {
        let spec = AnimationSpec::new("unused");
        let mut reel =
            AnimationReel::from_frames(vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()], &spec);

        assert_eq!(reel.current_frame(), Some(b"a".as_slice()));
        assert!(reel.advance());
        assert!(reel.advance());
        assert_eq!(reel.current_frame(), Some(b"c".as_slice()));
        assert!(reel.advance());
        assert_eq!(reel.current_frame(), Some(b"a".as_slice()));
        assert!(reel.is_playing());
    }

    #[test]
    fn test_non_looping_reel_stops_on_last_frame() {
        let spec = AnimationSpec {
            looping: false,
            ..AnimationSpec::new("unused")
        };
        let mut reel = AnimationReel::from_frames(vec![b"a".to_vec(), b"b".to_vec()], &spec);

        assert!(reel.advance());
        assert!(!reel.advance());
        assert_eq!(reel.current_frame(), Some(b"b".as_slice()));
        assert!(!reel.is_playing());
    }

    #[test]
    fn test_autoplay_off_never_plays() {
        let spec = AnimationSpec {
            autoplay: false,
            ..AnimationSpec::new("unused")
        };
        let mut reel = AnimationReel::from_frames(vec![b"a".to_vec(), b"b".to_vec()], &spec);
        assert!(!reel.is_playing());
        assert!(!reel.advance());
        assert_eq!(reel.current_frame(), Some(b"a".as_slice()));
    }

    #[test]
    fn test_frameless_reel_is_inert() {
        let mut reel = AnimationReel::from_frames(Vec::new(), &AnimationSpec::new("unused"));

        assert_eq!(reel.frame_count(), 0);
        assert_eq!(reel.current_frame(), None);
        assert_eq!(reel.frame(0), None);
        assert!(!reel.is_playing());
        assert!(!reel.advance());
    }

    #[test]
    fn test_frame_interval_from_rate() {
        let spec = AnimationSpec {
            frame_rate: 10.0,
            ..AnimationSpec::new("unused")
        };
        let reel = AnimationReel::from_frames(vec![b"a".to_vec(), b"b".to_vec()], &spec);
        assert_eq!(reel.frame_interval(), Duration::from_millis(100));
    }
}
