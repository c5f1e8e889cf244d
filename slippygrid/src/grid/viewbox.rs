//! SVG view box derived from an enumerated tile list.

use serde::Serialize;
use std::fmt;

use crate::coord::Tile;

/// Rectangle in tile units spanning an enumeration, from its first tile to
/// its last.
///
/// Relies on emission order: the first tile is the top-left corner and the
/// last one the bottom-right. When the enumeration wraps across the
/// antimeridian the last column folds back, and the width comes out smaller
/// than the number of columns actually emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewBox {
    pub min_x: i64,
    pub min_y: i64,
    pub width: i64,
    pub height: i64,
}

impl ViewBox {
    /// Derives the view box from an ordered tile list. Returns `None` for an
    /// empty list.
    pub fn from_tiles(tiles: &[Tile]) -> Option<Self> {
        let first = tiles.first()?;
        let last = tiles.last()?;

        let (min_x, min_y) = (first.x as i64, first.y as i64);
        Some(Self {
            min_x,
            min_y,
            width: last.x as i64 + 1 - min_x,
            height: last.y as i64 + 1 - min_y,
        })
    }
}

impl fmt::Display for ViewBox {
    /// Formats as `"minX minY width height"`, the SVG `viewBox` syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}
