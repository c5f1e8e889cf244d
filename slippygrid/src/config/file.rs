//! Configuration file handling for ~/.slippygrid/config.ini.
//!
//! Loads and saves user configuration with sensible defaults. Missing keys
//! keep their defaults; present keys are validated.

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use super::keys::{ConfigKey, ConfigKeyError};
use super::settings::ConfigFile;
use crate::coord::MAX_ZOOM;
use crate::map::{Center, MapError};

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(std::io::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.slippygrid/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.slippygrid/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path, creating its directory.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        write_ini(&to_ini(self), path)?;
        debug!(path = %path.display(), "Config saved");
        Ok(())
    }
}

/// Set a single key in the config file at `path`, leaving every other entry
/// as it is on disk.
///
/// Only the new value is validated, so this also repairs a file that fails
/// to load because of a bad entry. An empty value removes optional keys.
/// Returns the value as stored, empty when the key was removed.
pub fn update_file(path: &Path, key: ConfigKey, value: &str) -> Result<String, ConfigFileError> {
    let mut scratch = ConfigFile::default();
    key.set(&mut scratch, value).map_err(|e| {
        let reason = match e {
            ConfigKeyError::ValidationFailed { reason, .. } => reason,
            other => other.to_string(),
        };
        invalid(key.section(), key.key_name(), value, reason)
    })?;
    let stored = key.get(&scratch);

    let mut ini = if path.exists() {
        Ini::load_from_file(path)?
    } else {
        Ini::new()
    };
    if stored.is_empty() {
        ini.delete_from(Some(key.section()), key.key_name());
    } else {
        ini.with_section(Some(key.section()))
            .set(key.key_name(), stored.as_str());
    }

    write_ini(&ini, path)?;
    debug!(path = %path.display(), key = key.name(), "Config value updated");
    Ok(stored)
}

fn write_ini(ini: &Ini, path: &Path) -> Result<(), ConfigFileError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
    }
    ini.write_to_file(path).map_err(ConfigFileError::WriteError)
}

/// Get the path to the config directory (~/.slippygrid).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".slippygrid")
}

/// Get the path to the config file (~/.slippygrid/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [map] section
    if let Some(section) = ini.section(Some("map")) {
        if let Some(v) = section.get("zoom") {
            config.map.zoom = parse_zoom(v).map_err(|reason| invalid("map", "zoom", v, reason))?;
        }
        if let Some(v) = section.get("width") {
            config.map.width =
                parse_dimension(v).map_err(|reason| invalid("map", "width", v, reason))?;
        }
        if let Some(v) = section.get("height") {
            config.map.height =
                parse_dimension(v).map_err(|reason| invalid("map", "height", v, reason))?;
        }
        if let Some(v) = section.get("center") {
            let v = v.trim();
            if !v.is_empty() {
                let center: Center = v
                    .parse()
                    .map_err(|e: MapError| invalid("map", "center", v, e.to_string()))?;
                config.map.center = Some(center);
            }
        }
        if let Some(v) = section.get("url") {
            let v = v.trim();
            if !v.is_empty() {
                config.map.url = Some(v.to_string());
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

/// Serialize a `ConfigFile` into an `Ini`. Unset optional values are omitted.
fn to_ini(config: &ConfigFile) -> Ini {
    let mut ini = Ini::new();

    {
        let mut map = ini.with_section(Some("map"));
        map.set("zoom", config.map.zoom.to_string())
            .set("width", config.map.width.to_string())
            .set("height", config.map.height.to_string());
        if let Some(center) = &config.map.center {
            map.set("center", center.to_string());
        }
        if let Some(url) = &config.map.url {
            map.set("url", url.as_str());
        }
    }

    ini.with_section(Some("logging"))
        .set(
            "directory",
            config.logging.directory.to_string_lossy().into_owned(),
        )
        .set("file", config.logging.file.as_str());

    ini
}

fn invalid(section: &str, key: &str, value: &str, reason: impl Into<String>) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Parses a zoom level in `0..=MAX_ZOOM`.
pub(super) fn parse_zoom(value: &str) -> Result<u8, String> {
    match value.trim().parse::<u8>() {
        Ok(zoom) if zoom <= MAX_ZOOM => Ok(zoom),
        _ => Err(format!("must be an integer between 0 and {}", MAX_ZOOM)),
    }
}

/// Parses a positive, finite pixel dimension.
pub fn parse_dimension(value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err("must be a positive number of pixels".to_string()),
    }
}

/// Expands a leading `~` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
