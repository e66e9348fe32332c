//! Configuration management for tagbox.
//!
//! Settings are read from a TOML file in the platform config directory
//! (`~/.config/tagbox/config.toml` on Linux). A missing file yields the
//! defaults.

mod settings;

pub use settings::{DemoSettings, InputSettings, LogRotation, LogSettings};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    /// The config directory could not be created.
    #[error("failed to create config directory: {0}")]
    CreateDirError(#[source] std::io::Error),

    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(#[source] std::io::Error),

    /// The config file could not be written.
    #[error("failed to write config file: {0}")]
    WriteError(#[source] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The config could not be serialized.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A value is out of range or unrecognized.
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tag input options.
    pub input: InputSettings,
    /// Demo application options.
    pub demo: DemoSettings,
    /// Log file options.
    pub log: LogSettings,
}

impl Config {
    /// Path of the default config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("tagbox").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from a specific file, falling back to defaults when it does not
    /// exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Write to a specific file, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(ConfigError::WriteError)?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.input.to_input_config().map(|_| ())
    }
}
