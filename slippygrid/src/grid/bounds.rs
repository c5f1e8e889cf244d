//! Covering range of tile indices for a viewport.

use crate::coord::{TileCoordinate, TILE_SIZE};

/// Half-open range of unwrapped tile indices, `[x_min, x_max) × [y_min, y_max)`.
///
/// Indices may be negative or exceed the grid when the viewport crosses the
/// antimeridian or the grid edge; wrapping happens when tiles are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBounds {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl TileBounds {
    /// Computes the range of tiles covering a `width` × `height` pixel
    /// rectangle centered on `center`.
    ///
    /// The fractional center is used rather than the floored tile index so
    /// the box stays symmetric around the actual point. A viewport without
    /// area (zero, negative, NaN or infinite size) or a non-finite center
    /// yields an empty range instead of an error.
    pub fn around(center: &TileCoordinate, width: f64, height: f64) -> Self {
        let (cx, cy) = (center.x(), center.y());
        let has_area = width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite();
        if !has_area || !cx.is_finite() || !cy.is_finite() {
            return Self::EMPTY;
        }

        let half_width = 0.5 * width / TILE_SIZE;
        let half_height = 0.5 * height / TILE_SIZE;

        Self {
            x_min: (cx - half_width).floor() as i64,
            x_max: (cx + half_width).ceil() as i64,
            y_min: (cy - half_height).floor() as i64,
            y_max: (cy + half_height).ceil() as i64,
        }
    }

    const EMPTY: Self = Self {
        x_min: 0,
        x_max: 0,
        y_min: 0,
        y_max: 0,
    };

    /// Number of columns, 0 when the range is inverted.
    #[inline]
    pub fn columns(&self) -> u64 {
        span(self.x_min, self.x_max)
    }

    /// Number of rows, 0 when the range is inverted.
    #[inline]
    pub fn rows(&self) -> u64 {
        span(self.y_min, self.y_max)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns() == 0 || self.rows() == 0
    }

    /// Total number of tiles in the range.
    #[inline]
    pub fn len(&self) -> u64 {
        self.columns().saturating_mul(self.rows())
    }
}

#[inline]
fn span(min: i64, max: i64) -> u64 {
    if max > min {
        max.abs_diff(min)
    } else {
        0
    }
}
