//! Ocean snapshot tile-preparation service.
//!
//! Given a base data directory holding a wetness mask and shrunk snapshot
//! files, reconstructs one snapshot into the dense global grid, splits it
//! into the east/west hemisphere tiles, and writes the tiles plus a JSON
//! sidecar for the downstream plotting or ML dataset pipeline.

mod output;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use field_processor::{block_mean, reconstruct, split, WetMask};
use ocean_common::lookup_geometry;
use shrunk_parser::{discover_snapshots, read_mask, read_snapshot, SnapshotId};

#[derive(Parser, Debug)]
#[command(name = "tile-prep")]
#[command(about = "Reconstruct shrunk ocean snapshots into hemisphere tiles")]
struct Args {
    /// Base data directory holding the mask and snapshot files
    #[arg(short, long)]
    data_dir: PathBuf,

    /// Mask file name inside the data directory
    #[arg(long, default_value = "mask.bin")]
    mask: String,

    /// Snapshot file name to process (e.g. SSS.0001400112.shrunk)
    #[arg(short, long)]
    snapshot: Option<String>,

    /// List discovered snapshots in the data directory and exit
    #[arg(long)]
    list: bool,

    /// Grid geometry name
    #[arg(short, long, default_value = "llc4320")]
    geometry: String,

    /// Output directory for tile files
    #[arg(short, long, default_value = "tiles")]
    out_dir: PathBuf,

    /// Also write a block-mean smoothed preview of the east tile (block size)
    #[arg(long)]
    smooth: Option<usize>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting tile preparation");

    let geometry = lookup_geometry(&args.geometry)?;
    info!(
        geometry = %geometry.name,
        east = ?(geometry.east_rows, geometry.east_cols),
        west = ?(geometry.west_rows, geometry.west_cols),
        "Resolved grid geometry"
    );

    if args.list {
        let found = discover_snapshots(&args.data_dir)?;
        for snap in &found {
            println!("{}", snap.id);
        }
        info!(count = found.len(), "Snapshot discovery completed");
        return Ok(());
    }

    let Some(snapshot_name) = &args.snapshot else {
        bail!("either --snapshot or --list is required");
    };
    let snapshot_id = SnapshotId::parse(snapshot_name).with_context(|| {
        format!("snapshot name '{snapshot_name}' is not <FIELD>.<ITERATION>.shrunk")
    })?;

    // The mask is loaded once; it backs every snapshot of this geometry.
    let mask_path = args.data_dir.join(&args.mask);
    let weights = read_mask(&mask_path, &geometry)?;
    let mask = WetMask::with_geometry(weights, &geometry)?;
    info!(wet = mask.wet_count(), total = mask.len(), "Loaded wetness mask");

    let snapshot_path = args.data_dir.join(snapshot_name);
    let shrunk = read_snapshot(&snapshot_path)?;
    info!(snapshot = %snapshot_id, values = shrunk.len(), "Loaded shrunk snapshot");

    let dense = reconstruct(&mask, &shrunk)?;
    let (east, west) = split(&dense, &geometry)?;
    info!(east = ?east.shape(), west = ?west.shape(), "Split dense grid into hemisphere tiles");

    let sidecar = output::write_tiles(&args.out_dir, &snapshot_id, &geometry, &mask, &east, &west)?;
    info!(sidecar = %sidecar.display(), "Wrote hemisphere tiles");

    if let Some(block) = args.smooth {
        let (preview, rows, cols) = block_mean(&east.data, east.rows, east.cols, block)?;
        let path = output::write_preview(&args.out_dir, &snapshot_id, &preview, rows, cols)?;
        info!(rows, cols, path = %path.display(), "Wrote smoothed east preview");
    }

    info!("Tile preparation completed");
    Ok(())
}
