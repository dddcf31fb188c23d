//! Reconstruction and hemisphere tiling of shrunk ocean fields.
//!
//! The simulation stores each scalar snapshot (sea-surface salinity,
//! temperature) "shrunk": only the values over ocean cells, in the order the
//! wetness mask's nonzero entries appear in the flat global grid. This crate
//! expands those snapshots back to the dense grid and partitions the result
//! into the two hemisphere tiles consumed by plotting and dataset pipelines:
//!
//! ```text
//! mask file ──► WetMask ─┐
//!                        ├─► reconstruct ──► dense grid ──► split
//! snapshot ──► shrunk ───┘                                   │
//!                                                 (east tile, west tile)
//! ```
//!
//! The mask is immutable and shared: one `WetMask` backs any number of
//! snapshot reconstructions, each of which returns a fresh dense buffer.
//!
//! # Example
//!
//! ```
//! use field_processor::{reconstruct, split, WetMask};
//! use ocean_common::Geometry;
//!
//! let geom = Geometry {
//!     name: "demo".to_string(),
//!     east_rows: 1,
//!     east_cols: 3,
//!     west_rows: 3,
//!     west_cols: 1,
//! };
//!
//! let mask = WetMask::new(vec![0.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
//! let dense = reconstruct(&mask, &[10.0_f32, 20.0, 30.0])?;
//! let (east, west) = split(&dense, &geom)?;
//! assert_eq!(east.shape(), (1, 3));
//! assert_eq!(west.shape(), (3, 1));
//! # Ok::<(), ocean_common::OceanError>(())
//! ```

pub mod mask;
pub mod reconstruct;
pub mod smoothing;
pub mod split;

// Re-export commonly used items at crate root
pub use mask::WetMask;
pub use reconstruct::{reconstruct, reconstruct_with_missing, ChunkedReconstructor};
pub use smoothing::{block_mean, psd_frequencies, welch_psd};
pub use split::{merge, split, HemisphereTile};
