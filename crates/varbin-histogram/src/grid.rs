//! Multi-dimensional bin grids

use crate::bins::{BinSet, OutOfRangePolicy};
use crate::key::KeyEncoder;
use varbin_core::{Error, Result};

/// One [`BinSet`] per dimension plus the encoder addressing its cells
#[derive(Debug, Clone, PartialEq)]
pub struct BinGrid {
    bin_sets: Vec<BinSet>,
    encoder: KeyEncoder,
}

impl BinGrid {
    /// Create a grid from per-dimension bin sets
    pub fn new(bin_sets: Vec<BinSet>) -> Result<Self> {
        let counts: Vec<usize> = bin_sets.iter().map(BinSet::nbins).collect();
        let encoder = KeyEncoder::new(&counts)?;
        Ok(Self { bin_sets, encoder })
    }

    /// Create a grid with `nbins` equal-width bins over `[start, end)` in every dimension
    pub fn uniform(dims: usize, start: f64, end: f64, nbins: usize) -> Result<Self> {
        let bins = BinSet::uniform(start, end, nbins)?;
        Self::new(vec![bins; dims])
    }

    pub fn dims(&self) -> usize {
        self.bin_sets.len()
    }

    pub fn bin_sets(&self) -> &[BinSet] {
        &self.bin_sets
    }

    pub fn encoder(&self) -> &KeyEncoder {
        &self.encoder
    }

    /// Composite key of the cell containing `values`
    ///
    /// `positions` is scratch space of length `dims()`.
    pub fn key_for(
        &self,
        values: &[f64],
        policy: OutOfRangePolicy,
        positions: &mut [usize],
    ) -> Result<u64> {
        if values.len() != self.dims() {
            return Err(Error::size_mismatch(self.dims(), values.len(), "grid lookup"));
        }
        for (dimension, ((slot, bins), &value)) in positions
            .iter_mut()
            .zip(&self.bin_sets)
            .zip(values)
            .enumerate()
        {
            *slot = bins.locate(value, dimension, policy)?;
        }
        Ok(self.encoder.encode(positions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_grid() {
        let grid = BinGrid::uniform(3, 0.0, 1.0, 4).unwrap();
        assert_eq!(grid.dims(), 3);
        assert_eq!(grid.encoder().cell_count(), 64);
        assert!(grid.bin_sets().iter().all(|b| b.nbins() == 4));
    }

    #[test]
    fn test_key_for() {
        let grid = BinGrid::uniform(2, 0.0, 1.0, 4).unwrap();
        let mut scratch = [0usize; 2];

        let key = grid
            .key_for(&[0.3, 0.9], OutOfRangePolicy::Clamp, &mut scratch)
            .unwrap();
        assert_eq!(scratch, [1, 3]);
        assert_eq!(key, 1 + 3 * 4);

        let clamped = grid
            .key_for(&[1.0, 0.0], OutOfRangePolicy::Clamp, &mut scratch)
            .unwrap();
        assert_eq!(clamped, 3);

        assert!(grid
            .key_for(&[1.0, 0.0], OutOfRangePolicy::Reject, &mut scratch)
            .is_err());
    }

    #[test]
    fn test_key_for_dimension_mismatch() {
        let grid = BinGrid::uniform(2, 0.0, 1.0, 4).unwrap();
        let mut scratch = [0usize; 2];
        let err = grid
            .key_for(&[0.1, 0.2, 0.3], OutOfRangePolicy::Clamp, &mut scratch)
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_zero_dimensional_grid_rejected() {
        assert!(BinGrid::uniform(0, 0.0, 1.0, 4).is_err());
    }
}
