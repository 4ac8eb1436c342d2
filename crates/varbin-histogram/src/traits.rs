//! Core traits for histogram building

use crate::types::SparseHistogram;
use varbin_core::{Dataset, Result};

/// Trait for building histograms from datasets
pub trait HistogramBuilder {
    /// Build a normalized histogram from every point of `dataset`
    fn build<D: Dataset + ?Sized>(&self, dataset: &D) -> Result<SparseHistogram>;

    /// Build a histogram of raw point counts, without normalizing
    fn build_counts<D: Dataset + ?Sized>(&self, dataset: &D) -> Result<SparseHistogram>;
}
