//! Configuration key access and validation.
//!
//! Type-safe get/set of configuration values by `section.key` name, used by
//! the `config` CLI commands.

use std::str::FromStr;
use thiserror::Error;

use super::file::{expand_tilde, parse_dimension, parse_zoom};
use super::settings::ConfigFile;
use crate::map::Center;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    MapZoom,
    MapWidth,
    MapHeight,
    MapCenter,
    MapUrl,
    LoggingDirectory,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "map.zoom" => Ok(ConfigKey::MapZoom),
            "map.width" => Ok(ConfigKey::MapWidth),
            "map.height" => Ok(ConfigKey::MapHeight),
            "map.center" => Ok(ConfigKey::MapCenter),
            "map.url" => Ok(ConfigKey::MapUrl),
            "logging.directory" => Ok(ConfigKey::LoggingDirectory),
            "logging.file" => Ok(ConfigKey::LoggingFile),
            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// All keys, in display order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::MapZoom,
            ConfigKey::MapWidth,
            ConfigKey::MapHeight,
            ConfigKey::MapCenter,
            ConfigKey::MapUrl,
            ConfigKey::LoggingDirectory,
            ConfigKey::LoggingFile,
        ]
    }

    /// Full `section.key` name.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::MapZoom => "map.zoom",
            ConfigKey::MapWidth => "map.width",
            ConfigKey::MapHeight => "map.height",
            ConfigKey::MapCenter => "map.center",
            ConfigKey::MapUrl => "map.url",
            ConfigKey::LoggingDirectory => "logging.directory",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    pub fn section(&self) -> &'static str {
        self.split().0
    }

    pub fn key_name(&self) -> &'static str {
        self.split().1
    }

    fn split(&self) -> (&'static str, &'static str) {
        let name = self.name();
        name.split_once('.').unwrap_or((name, ""))
    }

    /// Current value as a string; empty when unset.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::MapZoom => config.map.zoom.to_string(),
            ConfigKey::MapWidth => config.map.width.to_string(),
            ConfigKey::MapHeight => config.map.height.to_string(),
            ConfigKey::MapCenter => config
                .map
                .center
                .map(|c| c.to_string())
                .unwrap_or_default(),
            ConfigKey::MapUrl => config.map.url.clone().unwrap_or_default(),
            ConfigKey::LoggingDirectory => config.logging.directory.to_string_lossy().into_owned(),
            ConfigKey::LoggingFile => config.logging.file.clone(),
        }
    }

    /// Validates `value` and stores it. An empty value clears optional keys.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let fail = |reason: String| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        };
        let value = value.trim();

        match self {
            ConfigKey::MapZoom => config.map.zoom = parse_zoom(value).map_err(fail)?,
            ConfigKey::MapWidth => config.map.width = parse_dimension(value).map_err(fail)?,
            ConfigKey::MapHeight => config.map.height = parse_dimension(value).map_err(fail)?,
            ConfigKey::MapCenter => {
                config.map.center = if value.is_empty() {
                    None
                } else {
                    Some(
                        value
                            .parse::<Center>()
                            .map_err(|e| fail(e.to_string()))?,
                    )
                };
            }
            ConfigKey::MapUrl => {
                config.map.url = (!value.is_empty()).then(|| value.to_string());
            }
            ConfigKey::LoggingDirectory => {
                if value.is_empty() {
                    return Err(fail("must not be empty".to_string()));
                }
                config.logging.directory = expand_tilde(value);
            }
            ConfigKey::LoggingFile => {
                if value.is_empty() {
                    return Err(fail("must not be empty".to_string()));
                }
                config.logging.file = value.to_string();
            }
        }
        Ok(())
    }
}
