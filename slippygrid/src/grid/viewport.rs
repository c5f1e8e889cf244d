//! Pixel viewport centered on a tile coordinate.

use tracing::debug;

use super::bounds::TileBounds;
use super::iter::TileGridIter;
use crate::coord::{Tile, TileCoordinate};

/// A `width` × `height` pixel rectangle centered on a point.
///
/// Tiles are [`TILE_SIZE`](crate::coord::TILE_SIZE) pixels square, so a
/// 512×256 viewport spans two tiles horizontally and one vertically (more if
/// the center is not tile-aligned).
///
/// # Example
///
/// ```
/// use slippygrid::coord::TileCoordinate;
/// use slippygrid::grid::Viewport;
///
/// let center = TileCoordinate::from_geographic(13.405, 52.52, 12);
/// let viewport = Viewport::new(center, 800.0, 600.0);
///
/// // Attach a sequential index (or any other per-tile mapping) after the fact.
/// let paths: Vec<String> = viewport
///     .iter()
///     .enumerate()
///     .map(|(index, tile)| format!("{index}: {tile}"))
///     .collect();
/// assert_eq!(paths.len(), viewport.tiles().len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: TileCoordinate,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(center: TileCoordinate, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> &TileCoordinate {
        &self.center
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Unwrapped index range covering the viewport.
    pub fn bounds(&self) -> TileBounds {
        TileBounds::around(&self.center, self.width, self.height)
    }

    /// Iterates the covering tiles in emission order (outer x, inner y).
    pub fn iter(&self) -> TileGridIter {
        TileGridIter::new(self.bounds(), self.center.zoom())
    }

    /// Collects the covering tiles in emission order.
    pub fn tiles(&self) -> Vec<Tile> {
        let iter = self.iter();
        let bounds = *iter.bounds();

        debug!(
            zoom = self.center.zoom(),
            center_x = self.center.x(),
            center_y = self.center.y(),
            width = self.width,
            height = self.height,
            x_min = bounds.x_min,
            x_max = bounds.x_max,
            y_min = bounds.y_min,
            y_max = bounds.y_max,
            tiles = iter.len(),
            "Enumerating viewport tiles"
        );

        iter.collect()
    }
}

impl<'a> IntoIterator for &'a Viewport {
    type Item = Tile;
    type IntoIter = TileGridIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
