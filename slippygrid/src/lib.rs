//! slippygrid - slippy-map tile math
//!
//! Converts geographic coordinates to Web Mercator tile grid coordinates and
//! enumerates the tiles covering a pixel viewport, with dateline wraparound.
//!
//! - [`coord`]: [`TileCoordinate`](coord::TileCoordinate) and [`Tile`](coord::Tile)
//! - [`grid`]: viewport tile enumeration
//! - [`map`]: map options, view box and SVG rendering
//! - [`config`]: `~/.slippygrid/config.ini`
//! - [`logging`]: tracing setup for binaries

pub mod config;
pub mod coord;
pub mod grid;
pub mod logging;
pub mod map;

/// Crate version, for banners and `--version` output.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
