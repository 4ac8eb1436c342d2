//! Variable-bin histogram distance
//!
//! This crate compares two multi-dimensional datasets (typically the pixels of
//! two images) by building histograms of both at a shrinking sequence of bin
//! counts and averaging the per-level distances. Committing to a single bin
//! width makes a histogram distance either blind to structure (too coarse) or
//! oversensitive to tiny shifts (too fine); averaging across resolutions
//! approximates a multi-scale, earth-mover style comparison without solving a
//! transportation problem.
//!
//! # Algorithm
//!
//! Starting at `initial_bins` bins per dimension over `[0, 1)`:
//!
//! 1. Record the distance between the two current histograms
//! 2. Remove the mass both histograms share (their pointwise minimum)
//! 3. Halve the bin count and re-histogram the points, each weighted by its
//!    share of the residual mass, over the coarser grid
//! 4. Repeat until the bin count reaches zero, then average the recorded distances
//!
//! There are always `floor(log2(initial_bins)) + 1` levels.
//!
//! # Examples
//!
//! ## Comparing Two Images
//!
//! ```rust
//! use varbin_core::ImageDataset;
//! use varbin_distance::var_bin_distance;
//!
//! let red = ImageDataset::<u8>::solid(8, 8, [220, 20, 20, 255]);
//! let dark_red = ImageDataset::<u8>::solid(8, 8, [200, 20, 20, 255]);
//! let blue = ImageDataset::<u8>::solid(8, 8, [20, 20, 220, 255]);
//!
//! let near = var_bin_distance(&red, &dark_red, 256).unwrap();
//! let far = var_bin_distance(&red, &blue, 256).unwrap();
//! assert!(near < far);
//! ```
//!
//! ## Inspecting Every Level
//!
//! ```rust
//! use varbin_core::MatrixDataset;
//! use varbin_distance::{LevelMetric, VarBinConfig, VarBinDistance};
//!
//! let a = MatrixDataset::new(1, vec![0.10, 0.20, 0.30]).unwrap();
//! let b = MatrixDataset::new(1, vec![0.12, 0.22, 0.80]).unwrap();
//!
//! let varbin = VarBinDistance::new(
//!     VarBinConfig::new().with_initial_bins(16).with_metric(LevelMetric::L1),
//! )
//! .unwrap();
//! let report = varbin.compute(&a, &b).unwrap();
//! assert_eq!(report.levels.len(), 5);
//! println!("{report}");
//! ```

mod batch;
pub mod config;
pub mod distance;

// Re-exports
pub use config::{LevelMetric, VarBinConfig, DEFAULT_INITIAL_BINS};
pub use distance::{var_bin_distance, LevelDistance, VarBinDistance, VarBinReport};

pub use varbin_core::{Error, Result};
