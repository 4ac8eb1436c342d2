//! Composite keys for multi-dimensional bin coordinates
//!
//! A coordinate `(p_0, ..., p_{d-1})` over dimensions with `n_0, ..., n_{d-1}`
//! bins is encoded in mixed radix: `key = sum(p_j * stride_j)` with
//! `stride_0 = 1` and `stride_j = stride_{j-1} * n_{j-1}`. Strides come from
//! the bin counts, never from the coordinate values, so distinct coordinates
//! always get distinct keys.

use varbin_core::{Error, Result};

/// Mixed-radix encoder between bin coordinates and `u64` keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEncoder {
    counts: Vec<usize>,
    strides: Vec<u64>,
    cell_count: u64,
}

impl KeyEncoder {
    /// Create an encoder for dimensions with the given bin counts
    ///
    /// Fails if any count is zero or if the total number of cells does not fit
    /// in a `u64`.
    pub fn new(counts: &[usize]) -> Result<Self> {
        if counts.is_empty() {
            return Err(Error::InvalidParameter(
                "key encoder needs at least one dimension".to_string(),
            ));
        }

        let mut strides = Vec::with_capacity(counts.len());
        let mut stride: u64 = 1;
        for &count in counts {
            if count == 0 {
                return Err(Error::InvalidParameter(
                    "every dimension needs at least one bin".to_string(),
                ));
            }
            strides.push(stride);
            stride = stride.checked_mul(count as u64).ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "bin counts {counts:?} overflow the 64-bit key space"
                ))
            })?;
        }

        Ok(Self {
            counts: counts.to_vec(),
            strides,
            cell_count: stride,
        })
    }

    /// Number of dimensions
    pub fn dims(&self) -> usize {
        self.counts.len()
    }

    /// Bin count of each dimension
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn strides(&self) -> &[u64] {
        &self.strides
    }

    /// Total number of addressable cells
    pub fn cell_count(&self) -> u64 {
        self.cell_count
    }

    /// Encode a coordinate vector
    ///
    /// # Panics
    ///
    /// Debug builds assert that `positions` has one in-range entry per dimension.
    pub fn encode(&self, positions: &[usize]) -> u64 {
        debug_assert_eq!(positions.len(), self.dims());
        debug_assert!(positions.iter().zip(&self.counts).all(|(&p, &n)| p < n));

        positions
            .iter()
            .zip(&self.strides)
            .map(|(&p, &stride)| p as u64 * stride)
            .sum()
    }

    /// Decode `key` back into per-dimension positions
    pub fn decode(&self, key: u64, positions: &mut [usize]) {
        debug_assert_eq!(positions.len(), self.dims());
        debug_assert!(key < self.cell_count);

        let mut rest = key;
        for (slot, &count) in positions.iter_mut().zip(&self.counts) {
            let count = count as u64;
            *slot = (rest % count) as usize;
            rest /= count;
        }
    }
}
