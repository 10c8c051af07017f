//! Startup Configuration
//!
//! Optional JSON configuration read from the user's home directory at
//! startup: display orientation, the background-cache toggle, and theme
//! color overrides. Every field has a default, and a missing file simply
//! means "all defaults" — a bootloader menu must come up even when its
//! config does not.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::surface::Orientation;
use crate::theme::Theme;

/// Error types for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

/// Startup options. Any subset may appear in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub orientation: Orientation,

    /// Pre-render the chrome once and restore it per frame instead of
    /// redrawing. Rendering must be identical either way; this only trades
    /// memory for per-frame work.
    pub use_bg_buffer: bool,

    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            orientation: Orientation::Normal,
            use_bg_buffer: true,
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Default config file location, `~/.bootmenu/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".bootmenu").join("config.json"))
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Load the config from the default location, falling back to defaults
    /// when the file is missing or unreadable. A malformed file is reported
    /// but never stops startup.
    pub fn load_default() -> Config {
        let Some(path) = Config::default_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Config::load(&path) {
            Ok(config) => {
                println!("Loaded config from: {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("Ignoring bad config {}: {}", path.display(), e);
                Config::default()
            }
        }
    }
}
