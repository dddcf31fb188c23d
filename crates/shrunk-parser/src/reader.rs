//! Flat big-endian binary readers.
//!
//! The wire format has no header, no magic bytes, and no length field: the
//! element count is implied by the file size and validated against the grid
//! geometry by the caller.

use bytes::Bytes;
use std::fs;
use std::path::Path;
use tracing::debug;

use ocean_common::{Geometry, OceanError, OceanResult};

/// Read a headerless flat array of big-endian f32 values.
///
/// Fails with [`OceanError::MissingFile`] when the path does not exist and
/// with [`OceanError::ShapeMismatch`] when the byte length is not a multiple
/// of 4 (a truncated or foreign file).
pub fn read_flat_be_f32(path: &Path) -> OceanResult<Vec<f32>> {
    if !path.exists() {
        return Err(OceanError::MissingFile(path.to_path_buf()));
    }

    let raw = Bytes::from(fs::read(path)?);
    if raw.len() % 4 != 0 {
        // Counts in the message are bytes, matching the context.
        return Err(OceanError::shape_mismatch(
            format!("{} byte length is not a multiple of 4", path.display()),
            raw.len() / 4 * 4,
            raw.len(),
        ));
    }

    let values: Vec<f32> = raw
        .chunks_exact(4)
        .map(|b| f32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .collect();

    debug!(path = %path.display(), elements = values.len(), "Read flat f32 file");
    Ok(values)
}

/// Read a wetness mask file, validating its length against a geometry.
///
/// The mask is loaded once per geometry and reused across every snapshot of
/// that geometry, so the length check happens here rather than per snapshot.
pub fn read_mask(path: &Path, geometry: &Geometry) -> OceanResult<Vec<f32>> {
    let weights = read_flat_be_f32(path)?;
    if weights.len() != geometry.n_global() {
        return Err(OceanError::shape_mismatch(
            format!("mask {} vs geometry {}", path.display(), geometry.name),
            geometry.n_global(),
            weights.len(),
        ));
    }
    Ok(weights)
}

/// Read a shrunk snapshot file.
///
/// Snapshot length is one value per wet cell; it is validated against the
/// mask's wet count by the reconstructor, not here, since the expected
/// length is a property of the mask rather than of the geometry.
pub fn read_snapshot(path: &Path) -> OceanResult<Vec<f32>> {
    read_flat_be_f32(path)
}
