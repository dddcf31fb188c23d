//! Hemisphere splitting of the dense global grid.

use ocean_common::{Geometry, OceanError, OceanResult};

/// One hemisphere of the reconstructed grid, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct HemisphereTile<T> {
    /// Tile values in row-major order
    pub data: Vec<T>,
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl<T: Copy> HemisphereTile<T> {
    /// Value at (row, col), or `None` outside the tile.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Tile shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tile holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Split a dense flat grid into the east and west hemisphere tiles.
///
/// The index transform is a fixed constant of the geometry, mirroring the
/// simulation's face layout: the first `east_rows * east_cols` flat elements
/// fill the east tile row-major, the remaining elements fill the west tile
/// row-major. Because the west shape is the transpose of the east shape,
/// this realizes the transpose-style reshape of the rotated western faces.
///
/// Every source element lands in exactly one tile and the inverse transform
/// is [`merge`]. Fails with [`OceanError::ShapeMismatch`] when the dense
/// length disagrees with the geometry.
pub fn split<T: Copy>(
    dense: &[T],
    geometry: &Geometry,
) -> OceanResult<(HemisphereTile<T>, HemisphereTile<T>)> {
    if dense.len() != geometry.n_global() {
        return Err(OceanError::shape_mismatch(
            format!("dense length vs geometry {}", geometry.name),
            geometry.n_global(),
            dense.len(),
        ));
    }

    let (east_flat, west_flat) = dense.split_at(geometry.east_len());

    let east = HemisphereTile {
        data: east_flat.to_vec(),
        rows: geometry.east_rows,
        cols: geometry.east_cols,
    };
    let west = HemisphereTile {
        data: west_flat.to_vec(),
        rows: geometry.west_rows,
        cols: geometry.west_cols,
    };
    Ok((east, west))
}

/// Inverse of [`split`]: reassemble the dense flat grid from its tiles.
///
/// Fails with [`OceanError::ShapeMismatch`] when either tile's shape or
/// element count disagrees with the geometry.
pub fn merge<T: Copy>(
    east: &HemisphereTile<T>,
    west: &HemisphereTile<T>,
    geometry: &Geometry,
) -> OceanResult<Vec<T>> {
    check_tile_shape(east, geometry.east_rows, geometry.east_cols, "east", geometry)?;
    check_tile_shape(west, geometry.west_rows, geometry.west_cols, "west", geometry)?;

    let mut dense = Vec::with_capacity(geometry.n_global());
    dense.extend_from_slice(&east.data);
    dense.extend_from_slice(&west.data);
    Ok(dense)
}

fn check_tile_shape<T: Copy>(
    tile: &HemisphereTile<T>,
    rows: usize,
    cols: usize,
    which: &str,
    geometry: &Geometry,
) -> OceanResult<()> {
    if tile.rows != rows || tile.cols != cols || tile.len() != rows * cols {
        return Err(OceanError::shape_mismatch(
            format!(
                "{which} tile {}x{} vs geometry {}",
                tile.rows, tile.cols, geometry.name
            ),
            rows * cols,
            tile.len(),
        ));
    }
    Ok(())
}
