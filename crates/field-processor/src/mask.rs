//! Wet-cell mask over the flat global grid.

use ocean_common::{Geometry, OceanError, OceanResult};

/// Immutable wetness mask for one grid geometry.
///
/// Each element is a wetness weight: nonzero means ocean (wet), zero means
/// land (dry). The mask defines the sparsity pattern for every snapshot of
/// its geometry, so it is loaded once and shared by reference across
/// reconstructions; nothing in this crate writes through it.
#[derive(Debug, Clone)]
pub struct WetMask {
    weights: Vec<f32>,
    wet_count: usize,
}

impl WetMask {
    /// Wrap raw mask weights. The wet-cell count is computed once here and
    /// cached for the lifetime of the mask.
    pub fn new(weights: Vec<f32>) -> Self {
        let wet_count = weights.iter().filter(|w| **w != 0.0).count();
        Self { weights, wet_count }
    }

    /// Wrap raw mask weights, validating the length against a geometry.
    pub fn with_geometry(weights: Vec<f32>, geometry: &Geometry) -> OceanResult<Self> {
        if weights.len() != geometry.n_global() {
            return Err(OceanError::shape_mismatch(
                format!("mask length vs geometry {}", geometry.name),
                geometry.n_global(),
                weights.len(),
            ));
        }
        Ok(Self::new(weights))
    }

    /// Total number of grid cells.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the mask covers no cells at all.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of wet (nonzero-weight) cells; the expected shrunk length.
    pub fn wet_count(&self) -> usize {
        self.wet_count
    }

    /// The raw wetness weights.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Whether the cell at flat index `i` is wet. Out-of-range indices are
    /// dry.
    pub fn is_wet(&self, i: usize) -> bool {
        self.weights.get(i).is_some_and(|w| *w != 0.0)
    }
}
