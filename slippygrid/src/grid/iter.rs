//! Iterator over the tiles of a [`TileBounds`] range.

use super::bounds::TileBounds;
use crate::coord::{wrap_index, Tile};

/// Iterator over every tile in a bounds range.
///
/// Yields columns left to right and, within each column, rows top to bottom
/// (outer x, inner y). Each index is wrapped into `[0, 2^zoom)` as it is
/// emitted, so a range crossing the antimeridian continues from column 0.
#[derive(Debug, Clone)]
pub struct TileGridIter {
    bounds: TileBounds,
    zoom: u8,
    rows: u64,
    current: u64,
    len: u64,
}

impl TileGridIter {
    pub fn new(bounds: TileBounds, zoom: u8) -> Self {
        Self {
            bounds,
            zoom,
            rows: bounds.rows(),
            current: 0,
            len: bounds.len(),
        }
    }

    /// The unwrapped range being walked.
    pub fn bounds(&self) -> &TileBounds {
        &self.bounds
    }
}

impl Iterator for TileGridIter {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.len {
            return None;
        }

        let column = (self.current / self.rows) as i64;
        let row = (self.current % self.rows) as i64;
        self.current += 1;

        Some(Tile {
            x: wrap_index(self.bounds.x_min + column, self.zoom),
            y: wrap_index(self.bounds.y_min + row, self.zoom),
            zoom: self.zoom,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileGridIter {}

impl std::iter::FusedIterator for TileGridIter {}
