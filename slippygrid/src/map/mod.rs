//! Tile map assembly and rendering.
//!
//! [`Map`] ties the pieces together: it projects the configured center,
//! enumerates the tiles covering a pixel viewport, derives the view box and
//! renders the result as SVG.
//!
//! # Example
//!
//! ```
//! use slippygrid::map::{Map, MapOptions};
//!
//! let options = MapOptions::new()
//!     .with_center("51.5074,-0.1278".parse::<slippygrid::map::Center>()?)
//!     .with_zoom(10);
//! let map = Map::new(512.0, 512.0, options);
//!
//! assert!(!map.tiles().is_empty());
//! assert!(map.svg().contains("<title>Tile Layer</title>"));
//! # Ok::<(), slippygrid::map::MapError>(())
//! ```

mod options;
mod svg;

pub use options::{
    Center, MapOptions, DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_URL_TEMPLATE,
};
pub use svg::{render, tile_url};

use thiserror::Error;
use tracing::debug;

use crate::coord::{Tile, TileCoordinate};
use crate::grid::{ViewBox, Viewport};

/// Errors raised while building map options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Center string is not of the form `lat,lng`
    #[error("Invalid center '{0}': expected 'lat,lng' in decimal degrees")]
    InvalidCenter(String),
}

/// A tile layer covering a pixel viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    options: MapOptions,
    viewport: Viewport,
    tiles: Vec<Tile>,
    view_box: Option<ViewBox>,
}

impl Map {
    /// Builds the tile layer for a `width` × `height` pixel viewport.
    pub fn new(width: f64, height: f64, options: MapOptions) -> Self {
        let center =
            TileCoordinate::from_geographic(options.center.lng, options.center.lat, options.zoom);
        let viewport = Viewport::new(center, width, height);
        let tiles = viewport.tiles();
        let view_box = ViewBox::from_tiles(&tiles);

        debug!(
            center = %options.center,
            zoom = options.zoom,
            tiles = tiles.len(),
            view_box = ?view_box.map(|v| v.to_string()),
            "Map built"
        );

        Self {
            options,
            viewport,
            tiles,
            view_box,
        }
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Tiles in emission order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// View box spanning the tiles, `None` when the viewport has no tiles.
    pub fn view_box(&self) -> Option<&ViewBox> {
        self.view_box.as_ref()
    }

    /// Image url of every tile, in emission order.
    pub fn tile_urls(&self) -> Vec<String> {
        let template = self.options.url_template();
        self.tiles.iter().map(|t| tile_url(template, t)).collect()
    }

    /// Renders the layer as an SVG document.
    pub fn svg(&self) -> String {
        render(
            &self.tiles,
            self.view_box.as_ref(),
            self.options.url_template(),
        )
    }
}
