//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and fractional Web Mercator tile grid coordinates, following the standard
//! slippy-map tiling scheme.

mod types;

pub use types::{
    CoordError, Tile, TileCoordinate, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM,
    TILE_SIZE,
};

pub(crate) use types::wrap_index;

use std::f64::consts::PI;

const DEGREE_TO_RADIAN: f64 = PI / 180.0;
const RADIAN_TO_DEGREE: f64 = 180.0 / PI;

/// Number of tiles along each axis at `zoom` (`2^zoom`).
///
/// Exact for every zoom level, since powers of two are representable.
#[inline]
pub fn tile_count(zoom: u8) -> f64 {
    2.0_f64.powi(zoom as i32)
}

/// Converts a longitude in degrees to a fractional grid x.
#[inline]
pub fn lon_to_x(longitude: f64, tile_count: f64) -> f64 {
    (longitude + 180.0) / 360.0 * tile_count
}

/// Converts a latitude in degrees to a fractional grid y.
///
/// Uses `ln(tan φ + sec φ)`, which diverges at the poles.
#[inline]
pub fn lat_to_y(latitude: f64, tile_count: f64) -> f64 {
    let lat_rad = latitude * DEGREE_TO_RADIAN;
    (1.0 - (lat_rad.tan() + lat_rad.cos().recip()).ln() / PI) / 2.0 * tile_count
}

/// Converts a fractional grid x back to longitude in degrees.
#[inline]
pub fn x_to_lon(x: f64, tile_count: f64) -> f64 {
    x / tile_count * 360.0 - 180.0
}

/// Converts a fractional grid y back to latitude in degrees
/// (inverse Web Mercator).
#[inline]
pub fn y_to_lat(y: f64, tile_count: f64) -> f64 {
    (PI * (1.0 - 2.0 * y / tile_count)).sinh().atan() * RADIAN_TO_DEGREE
}

#[cfg(test)]
mod tests;
