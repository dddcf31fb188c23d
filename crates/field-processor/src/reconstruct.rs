//! Sparse-to-dense reconstruction of shrunk snapshots.
//!
//! A shrunk snapshot carries one value per wet cell, in the order the mask's
//! nonzero entries appear when the flat grid is traversed in increasing
//! index order. Reconstruction overlays those values onto the wet positions
//! of a freshly allocated dense grid and fills dry positions with a missing
//! sentinel.

use num_traits::Float;
use tracing::debug;

use crate::mask::WetMask;
use ocean_common::{OceanError, OceanResult};

/// Expand a shrunk snapshot into a dense flat grid, dry cells set to NaN.
///
/// Quiet NaN is the conventional missing sentinel: plotting libraries leave
/// those cells blank without any extra masking step.
pub fn reconstruct<T: Float>(mask: &WetMask, shrunk: &[T]) -> OceanResult<Vec<T>> {
    reconstruct_with_missing(mask, shrunk, T::nan())
}

/// Expand a shrunk snapshot with an explicit missing-value sentinel.
///
/// The k-th nonzero mask position (in increasing flat order) receives
/// `shrunk[k]`; every zero position receives `missing`. Fails with
/// [`OceanError::ShapeMismatch`] before any allocation when the shrunk
/// length disagrees with the mask's wet count — a silently truncated or
/// padded reconstruction would corrupt the science.
///
/// Both inputs are borrowed immutably and the output is a new buffer, so a
/// single mask can back any number of snapshot reconstructions, sequential
/// or concurrent.
pub fn reconstruct_with_missing<T: Float>(
    mask: &WetMask,
    shrunk: &[T],
    missing: T,
) -> OceanResult<Vec<T>> {
    if shrunk.len() != mask.wet_count() {
        return Err(OceanError::shape_mismatch(
            "shrunk length vs mask wet count",
            mask.wet_count(),
            shrunk.len(),
        ));
    }

    let mut dense = vec![missing; mask.len()];
    let mut next = 0;
    for (i, w) in mask.weights().iter().enumerate() {
        if *w != 0.0 {
            dense[i] = shrunk[next];
            next += 1;
        }
    }

    debug!(wet = next, total = dense.len(), "Reconstructed dense grid");
    Ok(dense)
}

/// Streaming reconstruction that yields the dense grid in flat chunks.
///
/// For production geometries the dense grid runs to hundreds of millions of
/// cells; this iterator produces it `chunk_len` flat elements at a time so
/// a consumer can stream tiles to disk without holding the whole grid.
/// Inputs are validated once at construction; concatenating every yielded
/// chunk equals the [`reconstruct`] output exactly.
#[derive(Debug)]
pub struct ChunkedReconstructor<'a, T> {
    mask: &'a WetMask,
    shrunk: &'a [T],
    missing: T,
    chunk_len: usize,
    pos: usize,
    taken: usize,
}

impl<'a, T: Float> ChunkedReconstructor<'a, T> {
    /// Chunked reconstruction with the NaN missing sentinel.
    pub fn new(mask: &'a WetMask, shrunk: &'a [T], chunk_len: usize) -> OceanResult<Self> {
        Self::with_missing(mask, shrunk, T::nan(), chunk_len)
    }

    /// Chunked reconstruction with an explicit missing-value sentinel.
    pub fn with_missing(
        mask: &'a WetMask,
        shrunk: &'a [T],
        missing: T,
        chunk_len: usize,
    ) -> OceanResult<Self> {
        if chunk_len == 0 {
            return Err(OceanError::shape_mismatch(
                "chunk length must be nonzero",
                1,
                0,
            ));
        }
        if shrunk.len() != mask.wet_count() {
            return Err(OceanError::shape_mismatch(
                "shrunk length vs mask wet count",
                mask.wet_count(),
                shrunk.len(),
            ));
        }
        Ok(Self {
            mask,
            shrunk,
            missing,
            chunk_len,
            pos: 0,
            taken: 0,
        })
    }
}

impl<T: Float> Iterator for ChunkedReconstructor<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.mask.len() {
            return None;
        }

        let end = (self.pos + self.chunk_len).min(self.mask.len());
        let mut chunk = vec![self.missing; end - self.pos];
        for (offset, w) in self.mask.weights()[self.pos..end].iter().enumerate() {
            if *w != 0.0 {
                chunk[offset] = self.shrunk[self.taken];
                self.taken += 1;
            }
        }

        self.pos = end;
        Some(chunk)
    }
}
