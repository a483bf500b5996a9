use super::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "SHOPLIST_LOG";

/// Builds the filter from `SHOPLIST_LOG` if set, else from the configured
/// level scoped to this crate.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("shoplist={}", config.level)))
}

/// Installs a file-backed subscriber.
///
/// Returns the log file path, or `None` when logging is disabled.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = config.log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(build_filter(config))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert_eq!(init_logging(&config).unwrap(), None);
    }

    #[test]
    fn test_unopenable_log_file_is_an_error() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let config = LoggingConfig {
            file: Some(blocker.path().join("shoplist.log")),
            ..LoggingConfig::default()
        };

        let err = init_logging(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to"));
    }

    #[test]
    fn test_filter_uses_configured_level() {
        if std::env::var_os(LOG_ENV).is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(build_filter(&config).to_string(), "shoplist=debug");
    }
}
