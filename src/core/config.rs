//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.holonet/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::audio::{AudioSettings, DEFAULT_BACKGROUND, DEFAULT_INTERACTION, DEFAULT_VOLUME};
use crate::swapi::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HolonetConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AudioConfig {
    pub enabled: Option<bool>,
    pub background: Option<String>,
    pub interaction: Option<String>,
    pub volume: Option<f32>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub audio: AudioSettings,
}

/// Values taken from the command line. `None`/`false` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub mute: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.holonet/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".holonet").join("config.toml"))
}

/// Load config from `~/.holonet/config.toml`.
///
/// Runs before the logger exists, so it reports nothing itself. If the file
/// doesn't exist, generates a commented-out default and returns
/// `HolonetConfig::default()`. If it exists but is malformed, returns
/// `ConfigError::Parse`.
pub fn load_config() -> Result<HolonetConfig, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(HolonetConfig::default());
    };

    if !path.exists() {
        // Best effort; a read-only home just means no template.
        let _ = generate_default_config(&path);
        return Ok(HolonetConfig::default());
    }

    load_config_from(&path)
}

/// Parses the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<HolonetConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Writes a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Holonet Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                 # "off", "error", "warn", "info", "debug", "trace"

# [api]
# base_url = "https://swapi.dev/api"  # Or set HOLONET_API_BASE_URL, or pass --base-url
# timeout_secs = 30

# [audio]
# enabled = true                      # HOLONET_MUTE=1 or --mute turns sound off
# background = "assets/backgroundSound.mp3"
# interaction = "assets/lightsaber-sound.mp3"
# volume = 0.5
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &HolonetConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("HOLONET_API_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let log_level = config
        .general
        .log_level
        .as_deref()
        .and_then(|level| match LevelFilter::from_str(level) {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log level {:?}, using debug", level);
                None
            }
        })
        .unwrap_or(LevelFilter::Debug);

    // Mute: CLI or env wins over config
    let env_mute = std::env::var("HOLONET_MUTE")
        .map(|v| is_truthy(&v))
        .unwrap_or(false);
    let enabled = !(cli.mute || env_mute) && config.audio.enabled.unwrap_or(true);

    let audio = AudioSettings {
        enabled,
        background: PathBuf::from(
            config
                .audio
                .background
                .as_deref()
                .unwrap_or(DEFAULT_BACKGROUND),
        ),
        interaction: PathBuf::from(
            config
                .audio
                .interaction
                .as_deref()
                .unwrap_or(DEFAULT_INTERACTION),
        ),
        volume: config
            .audio
            .volume
            .unwrap_or(DEFAULT_VOLUME)
            .clamp(0.0, 1.0),
    };

    ResolvedConfig {
        log_level,
        base_url,
        timeout: config.api.timeout_secs.map(Duration::from_secs),
        audio,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
