//! Tile and sidecar writers.
//!
//! Tiles are written in the same wire convention as the inputs: headerless
//! flat arrays of big-endian f32, row-major. The JSON sidecar carries the
//! shapes and provenance a downstream consumer needs to interpret them.

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use field_processor::{HemisphereTile, WetMask};
use ocean_common::Geometry;
use shrunk_parser::SnapshotId;

#[derive(Debug, Serialize)]
struct TileShape {
    rows: usize,
    cols: usize,
}

#[derive(Debug, Serialize)]
struct TileSidecar {
    snapshot: String,
    field: String,
    iteration: u64,
    geometry: String,
    wet_count: usize,
    east: TileShape,
    west: TileShape,
    east_file: String,
    west_file: String,
}

/// Write both hemisphere tiles and their JSON sidecar.
///
/// Returns the sidecar path. File names are derived from the snapshot id:
/// `SSS.0001400112_east.bin`, `SSS.0001400112_west.bin`,
/// `SSS.0001400112.tiles.json`.
pub fn write_tiles(
    out_dir: &Path,
    snapshot: &SnapshotId,
    geometry: &Geometry,
    mask: &WetMask,
    east: &HemisphereTile<f32>,
    west: &HemisphereTile<f32>,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let stem = format!("{}.{:010}", snapshot.field, snapshot.iteration);
    let east_file = format!("{stem}_east.bin");
    let west_file = format!("{stem}_west.bin");

    write_flat_be_f32(&out_dir.join(&east_file), &east.data)?;
    write_flat_be_f32(&out_dir.join(&west_file), &west.data)?;

    let sidecar = TileSidecar {
        snapshot: snapshot.file_name(),
        field: snapshot.field.clone(),
        iteration: snapshot.iteration,
        geometry: geometry.name.clone(),
        wet_count: mask.wet_count(),
        east: TileShape {
            rows: east.rows,
            cols: east.cols,
        },
        west: TileShape {
            rows: west.rows,
            cols: west.cols,
        },
        east_file,
        west_file,
    };

    let sidecar_path = out_dir.join(format!("{stem}.tiles.json"));
    fs::write(&sidecar_path, serde_json::to_vec_pretty(&sidecar)?)?;
    Ok(sidecar_path)
}

/// Write a smoothed preview of the east tile.
pub fn write_preview(
    out_dir: &Path,
    snapshot: &SnapshotId,
    data: &[f32],
    rows: usize,
    cols: usize,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!(
        "{}.{:010}_east_smooth_{rows}x{cols}.bin",
        snapshot.field, snapshot.iteration
    ));
    write_flat_be_f32(&path, data)?;
    Ok(path)
}

fn write_flat_be_f32(path: &Path, data: &[f32]) -> Result<()> {
    let mut out = BufWriter::new(fs::File::create(path)?);
    for v in data {
        out.write_all(&v.to_be_bytes())?;
    }
    out.flush()?;
    Ok(())
}
