//! Histogram construction over a bin grid

use crate::bins::OutOfRangePolicy;
use crate::grid::BinGrid;
use crate::traits::HistogramBuilder;
use crate::types::SparseHistogram;
use tracing::trace;
use varbin_core::{Dataset, Error, Result};

/// Builds histograms by binning every point of a dataset into a [`BinGrid`]
///
/// Each point contributes one count to the cell containing it; the finished
/// histogram is divided by the number of points, giving a probability mass
/// function over cells.
#[derive(Debug, Clone, Copy)]
pub struct GridBuilder<'a> {
    grid: &'a BinGrid,
    policy: OutOfRangePolicy,
}

impl<'a> GridBuilder<'a> {
    /// Create a builder that clamps out-of-range values
    pub fn new(grid: &'a BinGrid) -> Self {
        Self {
            grid,
            policy: OutOfRangePolicy::Clamp,
        }
    }

    /// Set the out-of-range policy
    pub fn with_policy(mut self, policy: OutOfRangePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn grid(&self) -> &BinGrid {
        self.grid
    }

    pub fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }

    /// Key of the cell holding each point of `dataset`, in dataset order
    pub fn cell_keys<D: Dataset + ?Sized>(&self, dataset: &D) -> Result<Vec<u64>> {
        if dataset.dims() != self.grid.dims() {
            return Err(Error::size_mismatch(
                self.grid.dims(),
                dataset.dims(),
                "dataset and bin grid",
            ));
        }

        let mut keys = Vec::with_capacity(dataset.len());
        let mut values = vec![0.0; dataset.dims()];
        let mut positions = vec![0usize; dataset.dims()];
        for i in 0..dataset.len() {
            dataset.value_at(i, &mut values);
            keys.push(self.grid.key_for(&values, self.policy, &mut positions)?);
        }
        Ok(keys)
    }
}

impl HistogramBuilder for GridBuilder<'_> {
    fn build<D: Dataset + ?Sized>(&self, dataset: &D) -> Result<SparseHistogram> {
        let mut hist = self.build_counts(dataset)?;
        if !dataset.is_empty() {
            hist.scale(1.0 / dataset.len() as f64);
        }
        Ok(hist)
    }

    fn build_counts<D: Dataset + ?Sized>(&self, dataset: &D) -> Result<SparseHistogram> {
        let keys = self.cell_keys(dataset)?;
        let hist = SparseHistogram::from_cells(keys.into_iter().map(|key| (key, 1.0)));

        trace!(
            points = dataset.len(),
            cells = hist.len(),
            "Binned dataset into grid"
        );
        Ok(hist)
    }
}

/// Build a normalized histogram of `dataset` over `grid`, clamping out-of-range values
pub fn build_histogram<D: Dataset + ?Sized>(dataset: &D, grid: &BinGrid) -> Result<SparseHistogram> {
    GridBuilder::new(grid).build(dataset)
}
