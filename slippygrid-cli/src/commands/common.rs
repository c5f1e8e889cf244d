//! Common types and utilities shared across CLI commands.

use clap::{Args, ValueEnum};
use slippygrid::config::{parse_dimension, ConfigFile};
use slippygrid::coord::MAX_ZOOM;
use slippygrid::map::{Center, Map, MapOptions};

/// Output format for commands that print tiles.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `index<TAB>z/x/y` line per tile, then the view box
    #[default]
    Text,
    /// A single JSON document with tiles and view box
    Json,
}

/// Map arguments shared by `grid` and `svg`.
///
/// Unset arguments fall back to the `[map]` section of the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct MapArgs {
    /// Map center as "lat,lng" in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub center: Option<Center>,

    /// Zoom level
    #[arg(long, value_parser = clap::value_parser!(u8).range(..=MAX_ZOOM as i64))]
    pub zoom: Option<u8>,

    /// Viewport width in pixels
    #[arg(long, value_parser = parse_dimension)]
    pub width: Option<f64>,

    /// Viewport height in pixels
    #[arg(long, value_parser = parse_dimension)]
    pub height: Option<f64>,
}

/// Viewport size plus map options, after resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMap {
    pub width: f64,
    pub height: f64,
    pub options: MapOptions,
}

impl ResolvedMap {
    /// Enumerates the tiles for this map.
    pub fn build(self) -> Map {
        Map::new(self.width, self.height, self.options)
    }
}

/// Resolve map settings from CLI args and config.
pub fn resolve_map(args: &MapArgs, url: Option<String>, config: &ConfigFile) -> ResolvedMap {
    // CLI takes precedence, then config
    let mut options = config.map.to_options();
    if let Some(center) = args.center {
        options = options.with_center(center);
    }
    if let Some(zoom) = args.zoom {
        options = options.with_zoom(zoom);
    }
    if let Some(url) = url {
        options = options.with_url(url);
    }

    ResolvedMap {
        width: args.width.unwrap_or(config.map.width),
        height: args.height.unwrap_or(config.map.height),
        options,
    }
}
