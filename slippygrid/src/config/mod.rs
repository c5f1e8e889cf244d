//! User configuration.
//!
//! Settings live in `~/.slippygrid/config.ini`:
//!
//! ```ini
//! [map]
//! zoom = 12
//! width = 1024
//! height = 768
//! center = 52.52,13.405
//! url = https://tile.example.org/{z}/{x}/{y}.png
//!
//! [logging]
//! directory = ~/.slippygrid/logs
//! file = slippygrid.log
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults of
//! [`MapSettings`] and [`LoggingSettings`].

mod file;
mod keys;
mod settings;

pub use file::{
    config_directory, config_file_path, parse_dimension, update_file, ConfigFileError,
};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{
    ConfigFile, LoggingSettings, MapSettings, DEFAULT_HEIGHT, DEFAULT_LOG_FILE, DEFAULT_WIDTH,
    DEFAULT_ZOOM,
};
