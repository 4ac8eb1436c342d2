//! Sparse multi-dimensional histograms for distribution comparison
//!
//! This crate turns a [`Dataset`](varbin_core::Dataset) into a normalized,
//! sparse histogram over a grid of equal-width bins and provides the pointwise
//! algebra needed to compare two such histograms.
//!
//! # Key Features
//!
//! - **Bin sets**: equal-width or explicit boundaries per dimension, with a
//!   clamp-or-reject policy for values outside the range
//! - **Composite keys**: mixed-radix `u64` addressing of multi-dimensional cells
//! - **Sparse storage**: only occupied cells are stored, so the key space can be
//!   far larger than the dataset
//! - **Histogram algebra**: intersection, residual, L1 and squared L2 distance
//!
//! # Examples
//!
//! ## Building and Comparing Histograms
//!
//! ```rust
//! use varbin_core::MatrixDataset;
//! use varbin_histogram::{build_histogram, BinGrid, HistogramOps};
//!
//! let a = MatrixDataset::from_rows(&[[0.1, 0.1], [0.1, 0.2], [0.8, 0.8]]).unwrap();
//! let b = MatrixDataset::from_rows(&[[0.1, 0.1], [0.8, 0.9], [0.9, 0.9]]).unwrap();
//!
//! let grid = BinGrid::uniform(2, 0.0, 1.0, 4).unwrap();
//! let h1 = build_histogram(&a, &grid).unwrap();
//! let h2 = build_histogram(&b, &grid).unwrap();
//!
//! let shared = h1.intersection(&h2);
//! println!("shared mass: {:.3}", shared.total_mass());
//! println!("L1 distance: {:.3}", h1.l1_distance(&h2));
//! ```
//!
//! ## Binning Single Values
//!
//! ```rust
//! use varbin_histogram::BinSet;
//!
//! let bins = BinSet::uniform(0.0, 10.0, 5).unwrap();
//! assert_eq!(bins.boundaries(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
//! assert_eq!(bins.index_of(3.0), 1);
//! assert_eq!(bins.index_of(42.0), 4); // clamped to the last bin
//! ```

pub mod bins;
pub mod builders;
pub mod grid;
pub mod key;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use bins::{BinSet, OutOfRangePolicy};
pub use builders::{build_histogram, GridBuilder};
pub use grid::BinGrid;
pub use key::KeyEncoder;
pub use ops::HistogramOps;
pub use traits::HistogramBuilder;
pub use types::SparseHistogram;

pub use varbin_core::{Error, Result};
