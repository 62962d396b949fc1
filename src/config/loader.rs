use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::config::types::Config;
use crate::storage::JsonFileStorage;

const AUTOSAVE_RANGE_MS: RangeInclusive<u64> = 50..=60_000;
const TICK_RATE_RANGE_MS: RangeInclusive<u64> = 10..=5_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/vibenotes/config.toml` on Linux, or the equivalent via
    /// `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("vibenotes").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The auto-save debounce is within 50ms..=60s
    /// - The tick rate is within 10ms..=5s
    pub fn validate(&self) -> Result<(), ConfigError> {
        let debounce = self.editor.autosave_debounce_ms;
        if !AUTOSAVE_RANGE_MS.contains(&debounce) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "editor.autosave_debounce_ms must be between {} and {}, got {}",
                    AUTOSAVE_RANGE_MS.start(),
                    AUTOSAVE_RANGE_MS.end(),
                    debounce
                ),
            });
        }

        let tick = self.editor.tick_rate_ms;
        if !TICK_RATE_RANGE_MS.contains(&tick) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "editor.tick_rate_ms must be between {} and {}, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    tick
                ),
            });
        }

        if let Some(path) = &self.storage.path {
            if path.as_os_str().is_empty() || path.is_dir() {
                return Err(ConfigError::ValidationError {
                    message: format!("storage.path must name a file, got '{}'", path.display()),
                });
            }
        }

        Ok(())
    }

    /// Snapshot file: the configured path or the platform default.
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(JsonFileStorage::default_path)
    }

    /// Export directory: the configured one or the current directory.
    pub fn export_dir(&self) -> PathBuf {
        self.export
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn autosave_debounce(&self) -> Duration {
        Duration::from_millis(self.editor.autosave_debounce_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.editor.tick_rate_ms)
    }
}
