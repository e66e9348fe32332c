//! Centralized error types for the tagbox demo.
//!
//! The widget itself never fails; these cover the application around it:
//! configuration, the suggestion catalogue file and the terminal.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The suggestion catalogue could not be parsed.
    #[error("invalid suggestions file {}: {source}", path.display())]
    Suggestions {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors (file system, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::CreateDirError(_) | ConfigError::WriteError(_) => {
                    "Could not save configuration. Please check file permissions.".to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Suggestions { path, .. } => format!(
                "Could not load suggestions from '{}'. Expected a JSON array.",
                path.display()
            ),
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
        }
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_))
            | AppError::Config(ConfigError::ValidationError(_)) => {
                Some("Fix the file or pass --config with another path.")
            }
            AppError::Suggestions { .. } => {
                Some("Use an array of names or {\"name\": ..., \"disabled\": ...} objects.")
            }
            AppError::Terminal(_) => Some("Run tagbox from an interactive terminal."),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::NoConfigDir.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::NoConfigDir)));
    }

    #[test]
    fn test_user_message_config_validation() {
        let err = AppError::Config(ConfigError::ValidationError(
            "unknown key name 'hyper'".to_string(),
        ));
        let msg = err.user_message();
        assert!(msg.contains("hyper"));
        assert!(err.suggested_action().is_some());
    }

    #[test]
    fn test_suggestions_error_names_file() {
        let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err = AppError::Suggestions {
            path: PathBuf::from("tags.json"),
            source,
        };
        assert!(err.user_message().contains("tags.json"));
        assert!(err.to_string().contains("tags.json"));
    }

    #[test]
    fn test_terminal_error() {
        let err = AppError::terminal("test error");
        assert!(matches!(err, AppError::Terminal(_)));
        assert_eq!(err.user_message(), "Terminal error: test error");
        assert!(err.suggested_action().is_some());
    }
}
