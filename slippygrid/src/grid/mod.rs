//! Viewport tile enumeration.
//!
//! Given a center [`TileCoordinate`](crate::coord::TileCoordinate) and a
//! viewport size in pixels, computes which tiles cover the viewport and
//! yields them in a fixed order: outer loop over columns (x), inner loop over
//! rows (y). Indices that fall off the grid, e.g. when the viewport crosses
//! the antimeridian, are wrapped modulo `2^zoom`.
//!
//! The enumeration always returns plain [`Tile`](crate::coord::Tile) values.
//! Per-tile transforms are applied by the caller over the iterator, which
//! keeps the length and order intact:
//!
//! ```
//! use slippygrid::coord::TileCoordinate;
//! use slippygrid::grid::Viewport;
//!
//! let center = TileCoordinate::from_geographic(179.9, 0.0, 1);
//! let urls: Vec<String> = Viewport::new(center, 512.0, 512.0)
//!     .iter()
//!     .map(|tile| format!("/{}/{}/{}.png", tile.zoom, tile.x, tile.y))
//!     .collect();
//! assert_eq!(urls[0], "/1/0/0.png");
//! ```

mod bounds;
mod iter;
mod viewbox;
mod viewport;

pub use bounds::TileBounds;
pub use iter::TileGridIter;
pub use viewbox::ViewBox;
pub use viewport::Viewport;
