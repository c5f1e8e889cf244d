//! Coordinate type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{lat_to_y, lon_to_x, tile_count, x_to_lon, y_to_lat};

/// Edge length of one tile in logical pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Zoom range accepted by the checked constructors.
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 30;

/// A point on the Web Mercator tile grid at a fixed zoom level.
///
/// Holds both the fractional grid position (`x`, `y`) and the geographic
/// position it corresponds to. Whichever pair was passed to the constructor
/// is kept verbatim; the other is derived from it. The value never changes
/// after construction, so the grid scale always matches `zoom`.
///
/// # Example
///
/// ```
/// use slippygrid::coord::TileCoordinate;
///
/// let coord = TileCoordinate::from_geographic(0.0, 0.0, 1);
/// assert_eq!(coord.tile_count(), 2.0);
/// assert_eq!((coord.x(), coord.y()), (1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileCoordinate {
    zoom: u8,
    tile_count: f64,
    x: f64,
    y: f64,
    longitude: f64,
    latitude: f64,
}

impl TileCoordinate {
    /// Projects a geographic point onto the tile grid.
    ///
    /// No validation is performed. Latitudes at or near ±90° make the
    /// projection diverge and produce huge or non-finite `y` values; use
    /// [`TileCoordinate::checked_from_geographic`] to reject them instead.
    pub fn from_geographic(longitude: f64, latitude: f64, zoom: u8) -> Self {
        let tile_count = tile_count(zoom);
        Self {
            zoom,
            tile_count,
            x: lon_to_x(longitude, tile_count),
            y: lat_to_y(latitude, tile_count),
            longitude,
            latitude,
        }
    }

    /// Places a point at fractional grid position `(x, y)` and derives its
    /// geographic position. No validation is performed.
    pub fn from_grid(x: f64, y: f64, zoom: u8) -> Self {
        let tile_count = tile_count(zoom);
        Self {
            zoom,
            tile_count,
            x,
            y,
            longitude: x_to_lon(x, tile_count),
            latitude: y_to_lat(y, tile_count),
        }
    }

    /// Like [`TileCoordinate::from_geographic`], but rejects input outside
    /// the Web Mercator domain.
    pub fn checked_from_geographic(
        longitude: f64,
        latitude: f64,
        zoom: u8,
    ) -> Result<Self, CoordError> {
        if !latitude.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(CoordError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(CoordError::InvalidLongitude(longitude));
        }
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom));
        }
        Ok(Self::from_geographic(longitude, latitude, zoom))
    }

    /// Like [`TileCoordinate::from_grid`], but rejects positions outside
    /// `[0, tile_count]` on either axis.
    pub fn checked_from_grid(x: f64, y: f64, zoom: u8) -> Result<Self, CoordError> {
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom));
        }
        let max = tile_count(zoom);
        for value in [x, y] {
            if !value.is_finite() || !(0.0..=max).contains(&value) {
                return Err(CoordError::OutOfGrid { value, zoom, max });
            }
        }
        Ok(Self::from_grid(x, y, zoom))
    }

    /// Returns the same geographic point projected at another zoom level.
    #[must_use]
    pub fn with_zoom(&self, zoom: u8) -> Self {
        Self::from_geographic(self.longitude, self.latitude, zoom)
    }

    #[inline]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Number of tiles along each axis (`2^zoom`).
    #[inline]
    pub fn tile_count(&self) -> f64 {
        self.tile_count
    }

    /// Fractional x position on the grid.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Fractional y position on the grid, 0 at the north edge.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Floored x index. May fall outside the grid for out-of-range input.
    #[inline]
    pub fn tile_x(&self) -> i64 {
        self.x.floor() as i64
    }

    /// Floored y index. May fall outside the grid for out-of-range input.
    #[inline]
    pub fn tile_y(&self) -> i64 {
        self.y.floor() as i64
    }

    /// Floored `(x, y)` index pair.
    #[inline]
    pub fn tile_index(&self) -> (i64, i64) {
        (self.tile_x(), self.tile_y())
    }

    /// The tile containing this point, with both indices wrapped into the
    /// grid.
    pub fn tile(&self) -> Tile {
        Tile::wrapped(self.tile_x(), self.tile_y(), self.zoom)
    }
}

/// One cell of the tile grid.
///
/// Produced with both indices already wrapped into `[0, 2^zoom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Column, 0 at the antimeridian west edge
    pub x: u64,
    /// Row, 0 at the north edge
    pub y: u64,
    pub zoom: u8,
}

impl Tile {
    /// Builds a tile from unwrapped indices, folding each axis back into
    /// the grid so that crossing the antimeridian (or the poles) wraps.
    pub fn wrapped(x: i64, y: i64, zoom: u8) -> Self {
        Self {
            x: wrap_index(x, zoom),
            y: wrap_index(y, zoom),
            zoom,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Largest zoom whose tile count still fits the `u64` tile indices.
const MAX_WRAP_ZOOM: u8 = 64;

/// Folds `value` into `[0, 2^zoom)`, i.e. `((value % n) + n) % n`.
///
/// Exact up to zoom 64. Above that the grid outgrows `u64`, and indices are
/// folded modulo `2^64` instead.
#[inline]
pub(crate) fn wrap_index(value: i64, zoom: u8) -> u64 {
    let count = 1_i128 << zoom.min(MAX_WRAP_ZOOM);
    i128::from(value).rem_euclid(count) as u64
}

/// Errors returned by the checked coordinate constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude is outside the Web Mercator range or not finite
    #[error("Invalid latitude: {0} (must be between {min} and {max})", min = MIN_LAT, max = MAX_LAT)]
    InvalidLatitude(f64),

    /// Longitude is outside -180..=180 or not finite
    #[error("Invalid longitude: {0} (must be between {min} and {max})", min = MIN_LON, max = MAX_LON)]
    InvalidLongitude(f64),

    #[error("Invalid zoom level: {0} (must be between {min} and {max})", min = MIN_ZOOM, max = MAX_ZOOM)]
    InvalidZoom(u8),

    /// Grid position is outside the grid at this zoom
    #[error("Grid position {value} is outside 0..={max} at zoom {zoom}")]
    OutOfGrid { value: f64, zoom: u8, max: f64 },
}
