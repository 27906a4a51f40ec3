//! # Sound
//!
//! Two sounds: an ambient loop that plays for the whole session, and a short
//! interaction cue played when the user opens a character's vehicles or films.
//!
//! The player is an owned handle. `tui::run` opens it once, keeps it for the
//! lifetime of the event loop, and dropping it stops the loop and releases the
//! output device.

#[cfg(feature = "audio")]
mod rodio_player;

use std::fmt;
use std::path::PathBuf;

use log::{info, warn};

#[cfg(feature = "audio")]
pub use rodio_player::RodioPlayer;

pub const DEFAULT_BACKGROUND: &str = "assets/backgroundSound.mp3";
pub const DEFAULT_INTERACTION: &str = "assets/lightsaber-sound.mp3";
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Resolved audio settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSettings {
    pub enabled: bool,
    pub background: PathBuf,
    pub interaction: PathBuf,
    /// Volume of the ambient loop, `0.0..=1.0`.
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            background: PathBuf::from(DEFAULT_BACKGROUND),
            interaction: PathBuf::from(DEFAULT_INTERACTION),
            volume: DEFAULT_VOLUME,
        }
    }
}

#[derive(Debug)]
pub enum AudioError {
    /// No usable output device.
    Device(String),
    /// The asset could not be opened.
    Missing { path: PathBuf, message: String },
    /// The asset opened but is not a playable audio file.
    Decode { path: PathBuf, message: String },
    /// The device refused a new playback sink.
    Playback(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Device(msg) => write!(f, "audio device unavailable: {msg}"),
            AudioError::Missing { path, message } => {
                write!(f, "cannot open {}: {message}", path.display())
            }
            AudioError::Decode { path, message } => {
                write!(f, "cannot decode {}: {message}", path.display())
            }
            AudioError::Playback(msg) => write!(f, "playback failed: {msg}"),
        }
    }
}

impl std::error::Error for AudioError {}

pub trait SoundPlayer {
    /// Loads the ambient track, loops it and starts playback.
    fn start_ambience(&mut self) -> Result<(), AudioError>;

    /// Stops the ambient track if it is playing.
    fn stop_ambience(&mut self);

    /// Loads the interaction cue fresh and plays it once.
    fn play_cue(&mut self) -> Result<(), AudioError>;
}

/// A player that plays nothing. Used when audio is disabled or unavailable.
#[derive(Debug, Default)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn start_ambience(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop_ambience(&mut self) {}

    fn play_cue(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Opens the configured player. Never fails: if the device can't be opened
/// the app runs silently.
pub fn open(settings: &AudioSettings) -> Box<dyn SoundPlayer> {
    if !settings.enabled {
        info!("Audio disabled");
        return Box::new(Silent);
    }

    #[cfg(feature = "audio")]
    {
        match RodioPlayer::open(settings.clone()) {
            Ok(player) => {
                info!("Audio output opened");
                Box::new(player)
            }
            Err(e) => {
                warn!("Running without sound: {}", e);
                Box::new(Silent)
            }
        }
    }

    #[cfg(not(feature = "audio"))]
    {
        warn!("Built without the `audio` feature, running without sound");
        Box::new(Silent)
    }
}
