//! Multi-resolution histogram distance between multi-dimensional datasets
//!
//! Umbrella crate re-exporting the varbin workspace:
//!
//! - [`varbin_core`]: error type and the [`Dataset`] contract, plus matrix and image datasets
//! - [`varbin_histogram`]: bin sets, composite keys, sparse histograms and their algebra
//! - [`varbin_distance`]: the variable-bin distance orchestrator
//!
//! # Example
//!
//! ```rust
//! use varbin_stats::{var_bin_distance, ImageDataset};
//!
//! let a = ImageDataset::<u8>::solid(4, 4, [10, 200, 30, 255]);
//! let b = ImageDataset::<u8>::solid(4, 4, [10, 200, 30, 255]);
//! assert_eq!(var_bin_distance(&a, &b, 256).unwrap(), 0.0);
//! ```

pub use varbin_core;
pub use varbin_distance;
pub use varbin_histogram;

pub use varbin_core::{Dataset, Error, ImageDataset, MatrixDataset, Result};
pub use varbin_distance::{
    var_bin_distance, LevelDistance, LevelMetric, VarBinConfig, VarBinDistance, VarBinReport,
};
pub use varbin_histogram::{
    build_histogram, BinGrid, BinSet, HistogramOps, KeyEncoder, OutOfRangePolicy, SparseHistogram,
};
