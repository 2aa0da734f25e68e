//! Application configuration.
//!
//! A small TOML file under the platform config directory; a commented
//! default is written on first run so users have something to edit.

use std::{
    fs,
    path::{Path, PathBuf},
};

use config::{Config, File};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "yachtscore";

static CONFIG_ROOT: Lazy<PathBuf> = Lazy::new(|| {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
});

/// Errors surfaced while reading or seeding the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file existed but could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    /// The default file could not be written.
    #[error("failed to write default configuration {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// User-tunable settings. Scoring rules are fixed and not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory board snapshot exports are written to.
    pub export_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the default config file, falling back to defaults when the
    /// file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file())
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

/// Path of the config file.
pub fn config_file() -> PathBuf {
    CONFIG_ROOT.join("config.toml")
}

/// Write a commented default config file if none exists yet.
pub fn ensure_default_config() -> Result<(), ConfigError> {
    ensure_default_config_at(&config_file())
}

/// Seed a default config file at an explicit path if none exists.
pub fn ensure_default_config_at(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let defaults = AppConfig::default();
    let body = format!(
        "# yachtscore configuration\n\n# Directory board exports are written to.\nexport_dir = {:?}\n\n# Tracing filter used when RUST_LOG is unset.\nlog_filter = {:?}\n",
        defaults.export_dir, defaults.log_filter
    );
    fs::write(path, body).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        let defaults = AppConfig::default();
        assert_eq!(loaded.export_dir, defaults.export_dir);
        assert_eq!(loaded.log_filter, defaults.log_filter);
    }

    #[test]
    fn seeded_default_file_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        ensure_default_config_at(&path).unwrap();
        assert!(path.exists());

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.log_filter, "info");
    }

    #[test]
    fn seeding_never_overwrites_an_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_filter = \"debug\"\n").unwrap();
        ensure_default_config_at(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.log_filter, "debug");
        // Unspecified keys fall back to defaults.
        assert_eq!(loaded.export_dir, AppConfig::default().export_dir);
    }
}
