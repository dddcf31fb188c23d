//! Error types for ocean-tiles operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using OceanError.
pub type OceanResult<T> = Result<T, OceanError>;

/// Primary error type for reconstruction and tiling operations.
///
/// All of these are fatal to the operation that raised them: the inputs are
/// local files and in-memory arrays, so there is no transient failure mode
/// and nothing is retried. Validation errors are raised before any output
/// is produced.
#[derive(Debug, Error)]
pub enum OceanError {
    // === Input validation ===
    #[error("Required input file missing: {0}")]
    MissingFile(PathBuf),

    #[error("Shape mismatch ({context}): expected {expected}, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown grid geometry: {0}")]
    GeometryUnknown(String),

    // === Smoothing demo ===
    #[error("Block size {block} does not evenly divide a {rows}x{cols} grid")]
    BlockMismatch {
        block: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid spectral configuration: {0}")]
    InvalidSpectrum(String),

    // === Infrastructure ===
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
}

impl OceanError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = OceanError::shape_mismatch("shrunk length vs mask wet count", 2, 1);
        let msg = err.to_string();
        assert!(msg.contains("expected 2"));
        assert!(msg.contains("got 1"));
        assert!(msg.contains("shrunk length"));
    }

    #[test]
    fn test_missing_file_message() {
        let err = OceanError::MissingFile(PathBuf::from("/data/mask.bin"));
        assert!(err.to_string().contains("/data/mask.bin"));
    }
}
