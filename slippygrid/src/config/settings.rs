//! Settings structs and their defaults.

use std::path::PathBuf;

use crate::map::{Center, MapOptions};

/// Default zoom level.
pub const DEFAULT_ZOOM: u8 = 0;

/// Default viewport width in pixels.
pub const DEFAULT_WIDTH: f64 = 1024.0;

/// Default viewport height in pixels.
pub const DEFAULT_HEIGHT: f64 = 768.0;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "slippygrid.log";

/// User configuration loaded from `~/.slippygrid/config.ini`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub map: MapSettings,
    pub logging: LoggingSettings,
}

/// `[map]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
    /// `None` falls back to [`Center::default`].
    pub center: Option<Center>,
    /// Tile url template, `None` for the built-in default.
    pub url: Option<String>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            center: None,
            url: None,
        }
    }
}

impl MapSettings {
    /// Converts the section into [`MapOptions`].
    pub fn to_options(&self) -> MapOptions {
        MapOptions {
            center: self.center.unwrap_or_default(),
            zoom: self.zoom,
            url: self.url.clone(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: super::file::config_directory().join("logs"),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
