//! Grid geometries for simulation hemisphere tilings.

use serde::{Deserialize, Serialize};

use crate::error::{OceanError, OceanResult};

/// Fixed hemisphere tiling of one simulation grid configuration.
///
/// The flat global vector lays out the eastern hemisphere first, row-major
/// over `east_rows x east_cols`, followed by the western hemisphere,
/// row-major over `west_rows x west_cols`. The west shape is the transpose
/// of the east shape because the simulation stores its western faces
/// rotated; a plain `reshape(rows, cols)` of the whole vector does not
/// reproduce the split.
///
/// Tile shapes come from the originating simulation's face decomposition.
/// They are registered constants per geometry version (see [`geometries`]),
/// never derived from the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    /// Registry name of this geometry version
    pub name: String,
    /// Rows of the eastern hemisphere tile
    pub east_rows: usize,
    /// Columns of the eastern hemisphere tile
    pub east_cols: usize,
    /// Rows of the western hemisphere tile
    pub west_rows: usize,
    /// Columns of the western hemisphere tile
    pub west_cols: usize,
}

impl Geometry {
    /// Element count of the eastern hemisphere tile.
    pub fn east_len(&self) -> usize {
        self.east_rows * self.east_cols
    }

    /// Element count of the western hemisphere tile.
    pub fn west_len(&self) -> usize {
        self.west_rows * self.west_cols
    }

    /// Total flat grid length: every mask, dense grid, and snapshot of this
    /// geometry is defined against this element count.
    pub fn n_global(&self) -> usize {
        self.east_len() + self.west_len()
    }
}

/// Registered geometries for known simulation configurations.
pub mod geometries {
    use super::Geometry;

    /// MITgcm llc4320 hemisphere tiling used by the SSS/SST shrunk archives.
    ///
    /// The east tile stacks the two eastern faces side by side
    /// (12960 x 8640); the west tile holds the rotated western faces
    /// (8640 x 12960).
    pub fn llc4320() -> Geometry {
        Geometry {
            name: "llc4320".to_string(),
            east_rows: 12960,
            east_cols: 8640,
            west_rows: 8640,
            west_cols: 12960,
        }
    }
}

/// Look up a registered geometry by name.
///
/// Fails with [`OceanError::GeometryUnknown`] when no geometry of that name
/// has been registered.
pub fn lookup_geometry(name: &str) -> OceanResult<Geometry> {
    match name {
        "llc4320" => Ok(geometries::llc4320()),
        other => Err(OceanError::GeometryUnknown(other.to_string())),
    }
}
