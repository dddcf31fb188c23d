//! Snapshot file naming and discovery.
//!
//! Snapshot files are named `<FIELD>.<ITERATION>.shrunk`, where FIELD is the
//! scalar field code (SSS, SST, ...) and ITERATION is a 10-digit zero-padded
//! model iteration number. The iteration encoding is opaque metadata from
//! the simulation; it is round-tripped, never interpreted.

use std::fmt;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

use ocean_common::{OceanError, OceanResult};

/// Parsed snapshot file name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SnapshotId {
    /// Scalar field code, e.g. "SSS"
    pub field: String,
    /// Model iteration number
    pub iteration: u64,
}

impl SnapshotId {
    /// Parse a `<FIELD>.<ITERATION>.shrunk` file name.
    ///
    /// Returns `None` for anything that does not match exactly: three
    /// dot-separated parts, a non-empty field code, a 10-digit iteration,
    /// and the `shrunk` extension. The 10-digit requirement keeps
    /// [`SnapshotId::file_name`] an exact inverse.
    pub fn parse(file_name: &str) -> Option<Self> {
        let mut parts = file_name.split('.');
        let field = parts.next()?;
        let iteration = parts.next()?;
        let extension = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        if field.is_empty() || extension != "shrunk" {
            return None;
        }
        if iteration.len() != 10 || !iteration.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            field: field.to_string(),
            iteration: iteration.parse().ok()?,
        })
    }

    /// The snapshot file name this id was parsed from.
    pub fn file_name(&self) -> String {
        format!("{}.{:010}.shrunk", self.field, self.iteration)
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// A snapshot file found under the data directory.
#[derive(Debug, Clone)]
pub struct DiscoveredSnapshot {
    pub id: SnapshotId,
    pub path: PathBuf,
}

/// Find all snapshot files under a data directory.
///
/// Walks the directory recursively, keeps files whose names parse as
/// snapshot ids, and returns them sorted by (field, iteration). Files that
/// do not match the naming scheme are skipped.
pub fn discover_snapshots(dir: &std::path::Path) -> OceanResult<Vec<DiscoveredSnapshot>> {
    if !dir.is_dir() {
        return Err(OceanError::MissingFile(dir.to_path_buf()));
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| OceanError::FileRead(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        match SnapshotId::parse(&name) {
            Some(id) => found.push(DiscoveredSnapshot {
                id,
                path: entry.path().to_path_buf(),
            }),
            None => debug!(file = %name, "Skipping non-snapshot file"),
        }
    }

    found.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(found)
}
