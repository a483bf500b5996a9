//! Configuration file loading.
//!
//! The configuration lives at `<config dir>/shoplist/config.toml`. A missing
//! file is not an error; every field has a default so the application works
//! without one.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// List appearance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub show_ids: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_ids: false,
        }
    }
}

/// How edits are validated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BehaviorConfig {
    /// Reject edits with a bad quantity instead of saving a quantity of 1.
    #[serde(default)]
    pub strict_edit_quantity: bool,
}

/// Diagnostic log output. The terminal belongs to the UI, so logs only ever
/// go to a file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// The configured log file, or `<data dir>/shoplist/shoplist.log`.
    pub fn log_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("shoplist")
                .join("shoplist.log")
        })
    }
}

fn default_title() -> String {
    "Shopping List".to_string()
}
fn default_true() -> bool {
    true
}
fn default_level() -> String {
    "info".to_string()
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shoplist")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ui.title, "Shopping List");
        assert!(!config.ui.show_ids);
        assert!(!config.behavior.strict_edit_quantity);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[ui]\nshow_ids = true\n\n[behavior]\nstrict_edit_quantity = true\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();

        assert!(config.ui.show_ids);
        assert_eq!(config.ui.title, "Shopping List");
        assert!(config.behavior.strict_edit_quantity);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui\ntitle = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_explicit_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let log = dir.path().join("list.log");
        fs::write(
            &path,
            format!("[logging]\nlevel = \"debug\"\nfile = {:?}\n", log.display().to_string()),
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.log_path(), log);
    }

    #[test]
    fn test_default_log_path_is_named_after_the_app() {
        let path = LoggingConfig::default().log_path();
        assert!(path.ends_with("shoplist/shoplist.log"));
    }
}
