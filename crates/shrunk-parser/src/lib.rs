//! Readers for the shrunk ocean-field wire format.
//!
//! Mask and snapshot files are headerless flat arrays of big-endian
//! IEEE-754 f32 values, exactly as the simulation writes them. A mask file
//! holds one wetness weight per global grid cell; a snapshot file holds one
//! value per wet cell, named `<FIELD>.<ITERATION>.shrunk`
//! (e.g. `SSS.0001400112.shrunk`).

pub mod reader;
pub mod snapshot;

pub use reader::{read_flat_be_f32, read_mask, read_snapshot};
pub use snapshot::{discover_snapshots, DiscoveredSnapshot, SnapshotId};
