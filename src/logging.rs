//! File logging for the demo binary.
//!
//! The terminal is in raw mode on the alternate screen while the demo runs,
//! so anything written to stderr would tear the UI. Everything goes to a
//! rolling file instead, placed and filtered by the `[log]` config section.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::config::{LogRotation, LogSettings};

/// Filter used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LOG_FILTER: &str = "tagbox=info,warn";

/// Prefix of the log file names; the appender adds the date.
const LOG_FILE_PREFIX: &str = "tagbox.log";

/// Install the global subscriber writing to the configured log directory.
///
/// `RUST_LOG` overrides `settings.filter` (`RUST_LOG=tagbox=trace` logs every
/// query change). Returns the directory the logs are written to.
///
/// # Errors
///
/// Fails if the directory cannot be determined or created, the filter does
/// not parse, or a global subscriber is already set.
pub fn init(settings: &LogSettings) -> anyhow::Result<PathBuf> {
    let log_dir = log_directory(settings)?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("could not create log directory {}", log_dir.display()))?;

    let directives = filter_directives(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        settings.filter.as_deref(),
    );
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log filter '{directives}'"))?;

    let file_appender =
        RollingFileAppender::new(rotation(settings.rotation), &log_dir, LOG_FILE_PREFIX);

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        filter = %directives,
        "tagbox starting up"
    );
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(log_dir)
}

/// Where logs go: the configured directory, else `<data_local_dir>/tagbox/logs`.
pub fn log_directory(settings: &LogSettings) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &settings.directory {
        return Ok(dir.clone());
    }
    let base_dir = dirs::data_local_dir().context("could not determine local data directory")?;
    Ok(base_dir.join("tagbox").join("logs"))
}

/// Pick the filter: a non-empty environment value, then the config, then the
/// default.
fn filter_directives(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|value| !value.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

/// Log application shutdown.
pub fn shutdown() {
    tracing::info!("tagbox shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_directory() {
        if let Ok(dir) = log_directory(&LogSettings::default()) {
            assert!(dir.ends_with("tagbox/logs"));
        }
    }

    #[test]
    fn test_configured_log_directory_wins() {
        let settings = LogSettings {
            directory: Some(PathBuf::from("/var/log/tagbox")),
            ..LogSettings::default()
        };
        assert_eq!(
            log_directory(&settings).unwrap(),
            PathBuf::from("/var/log/tagbox")
        );
    }

    #[test]
    fn test_filter_precedence() {
        assert_eq!(filter_directives(None, None), DEFAULT_LOG_FILTER);
        assert_eq!(filter_directives(None, Some("tagbox=debug")), "tagbox=debug");
        assert_eq!(
            filter_directives(Some("tagbox=trace".to_string()), Some("tagbox=debug")),
            "tagbox=trace"
        );
        assert_eq!(
            filter_directives(Some("  ".to_string()), Some("tagbox=debug")),
            "tagbox=debug"
        );
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
