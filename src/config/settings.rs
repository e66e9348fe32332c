//! Configuration sections.

use std::path::PathBuf;

use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::events::parse_key_name;
use crate::ui::{SpinnerStyle, TagInputConfig, DEFAULT_MIN_QUERY_LENGTH, DEFAULT_PLACEHOLDER};

/// Tag input options as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Text shown while the query is empty.
    pub placeholder: String,
    /// Key names that commit the highlighted suggestion.
    pub delimiters: Vec<String>,
    /// Take focus on start.
    pub autofocus: bool,
    /// Size the query field to its content.
    pub autoresize: bool,
    /// Query length at which suggestions are shown and looked up.
    pub min_query_length: usize,
    /// Busy spinner: `"braille"` or `"simple"` for terminals without
    /// braille glyphs.
    pub spinner: SpinnerStyle,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            delimiters: vec!["enter".to_string(), "tab".to_string()],
            autofocus: true,
            autoresize: true,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            spinner: SpinnerStyle::default(),
        }
    }
}

impl InputSettings {
    /// Validate and convert into the widget configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` for an empty placeholder, an
    /// unknown delimiter key name or escape used as a delimiter.
    pub fn to_input_config(&self) -> Result<TagInputConfig> {
        if self.placeholder.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "input.placeholder cannot be empty".to_string(),
            ));
        }

        let delimiters = self
            .delimiters
            .iter()
            .map(|name| {
                parse_key_name(name)
                    .map_err(|e| ConfigError::ValidationError(format!("input.delimiters: {}", e)))
            })
            .collect::<Result<Vec<KeyCode>>>()?;
        if delimiters.contains(&KeyCode::Esc) {
            return Err(ConfigError::ValidationError(
                "input.delimiters: escape dismisses suggestions and cannot be a delimiter"
                    .to_string(),
            ));
        }

        Ok(TagInputConfig {
            placeholder: self.placeholder.clone(),
            delimiters,
            autofocus: self.autofocus,
            autoresize: self.autoresize,
            min_query_length: self.min_query_length,
            spinner: self.spinner,
        })
    }
}

/// Demo application options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// JSON file with the suggestion catalogue.
    pub suggestions_file: Option<PathBuf>,
    /// Fetch suggestions in the background as the query changes instead of
    /// handing the whole catalogue to the widget up front.
    pub lookup: bool,
    /// Artificial latency for background lookups.
    pub lookup_delay_ms: u64,
}

/// How often the log file rolls over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

/// Log file options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Directory for log files, instead of the platform data directory.
    pub directory: Option<PathBuf>,
    /// `tracing` filter directives, used when `RUST_LOG` is unset.
    pub filter: Option<String>,
    pub rotation: LogRotation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget_defaults() {
        let config = InputSettings::default().to_input_config().unwrap();
        assert_eq!(config, TagInputConfig::default());
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let settings = InputSettings {
            placeholder: "  ".to_string(),
            ..InputSettings::default()
        };
        assert!(matches!(
            settings.to_input_config(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_custom_delimiters() {
        let settings = InputSettings {
            delimiters: vec!["space".to_string(), ";".to_string()],
            ..InputSettings::default()
        };
        let config = settings.to_input_config().unwrap();
        assert_eq!(config.delimiters, vec![KeyCode::Char(' '), KeyCode::Char(';')]);
    }

    #[test]
    fn test_escape_delimiter_rejected() {
        let settings = InputSettings {
            delimiters: vec!["enter".to_string(), "esc".to_string()],
            ..InputSettings::default()
        };
        let err = settings.to_input_config().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("escape"));
    }

    #[test]
    fn test_log_settings_from_toml() {
        let settings: LogSettings =
            toml::from_str("directory = \"/tmp/tagbox\"\nrotation = \"hourly\"\n").unwrap();
        assert_eq!(settings.directory, Some(PathBuf::from("/tmp/tagbox")));
        assert_eq!(settings.filter, None);
        assert_eq!(settings.rotation, LogRotation::Hourly);
    }

    #[test]
    fn test_unknown_delimiter_message() {
        let settings = InputSettings {
            delimiters: vec!["hyper".to_string()],
            ..InputSettings::default()
        };
        let err = settings.to_input_config().unwrap_err();
        assert!(err.to_string().contains("hyper"));
    }
}
