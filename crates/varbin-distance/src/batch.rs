//! Many independent distance computations
//!
//! Levels inside one computation depend on each other and always run in
//! order; separate dataset pairs do not, so with the `parallel` feature they
//! are spread over the rayon thread pool.

use crate::distance::VarBinDistance;
use varbin_core::{Dataset, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl VarBinDistance {
    /// Distance from `reference` to every candidate, in candidate order
    pub fn compare_many<R, C>(&self, reference: &R, candidates: &[C]) -> Result<Vec<f64>>
    where
        R: Dataset + Sync + ?Sized,
        C: Dataset + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            candidates
                .par_iter()
                .map(|candidate| self.distance(reference, candidate))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            candidates
                .iter()
                .map(|candidate| self.distance(reference, candidate))
                .collect()
        }
    }

    /// Symmetric matrix of distances between every pair of datasets
    ///
    /// The diagonal is zero without being computed.
    pub fn pairwise<D>(&self, datasets: &[D]) -> Result<Vec<Vec<f64>>>
    where
        D: Dataset + Sync,
    {
        let n = datasets.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();

        #[cfg(feature = "parallel")]
        let distances: Vec<f64> = pairs
            .par_iter()
            .map(|&(i, j)| self.distance(&datasets[i], &datasets[j]))
            .collect::<Result<_>>()?;

        #[cfg(not(feature = "parallel"))]
        let distances: Vec<f64> = pairs
            .iter()
            .map(|&(i, j)| self.distance(&datasets[i], &datasets[j]))
            .collect::<Result<_>>()?;

        let mut matrix = vec![vec![0.0; n]; n];
        for (&(i, j), &d) in pairs.iter().zip(&distances) {
            matrix[i][j] = d;
            matrix[j][i] = d;
        }
        Ok(matrix)
    }
}
