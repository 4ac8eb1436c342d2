//! Core traits and types for variable-bin histogram distances
//!
//! This crate provides the foundation shared by the histogram and distance
//! crates:
//!
//! - [`Error`] / [`Result`]: one error type for every varbin crate
//! - [`Dataset`]: the access contract histogram construction consumes
//! - [`MatrixDataset`] and [`ImageDataset`]: ready-made providers
//!
//! # Example
//!
//! ```rust
//! use varbin_core::{Dataset, ImageDataset, MatrixDataset};
//!
//! let points = MatrixDataset::from_rows(&[[0.1, 0.2], [0.7, 0.9]]).unwrap();
//! assert_eq!(points.len(), 2);
//! assert_eq!(points.dims(), 2);
//!
//! let image = ImageDataset::<u8>::solid(4, 4, [200, 10, 10, 255]);
//! assert_eq!(image.dims(), 5);
//! ```

pub mod dataset;
pub mod error;
pub mod image;

// Re-export core types
pub use dataset::{Dataset, MatrixDataset};
pub use error::{Error, Result};
pub use image::{ImageDataset, IMAGE_DIMS};
