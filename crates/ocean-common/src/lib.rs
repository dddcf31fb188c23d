//! Common types shared across the ocean-tiles workspace.

pub mod error;
pub mod geometry;

pub use error::{OceanError, OceanResult};
pub use geometry::{geometries, lookup_geometry, Geometry};
