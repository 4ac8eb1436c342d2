//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use varbin_core::MatrixDataset;

pub const EPSILON: f64 = 1e-10;

/// Uniformly distributed points in the unit cube
pub fn uniform_points(len: usize, dims: usize, seed: u64) -> MatrixDataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..len * dims).map(|_| rng.gen::<f64>()).collect();
    MatrixDataset::new(dims, values).unwrap()
}

/// Points drawn uniformly from `[lo, hi)` in every dimension
pub fn points_in(len: usize, dims: usize, lo: f64, hi: f64, seed: u64) -> MatrixDataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..len * dims).map(|_| rng.gen_range(lo..hi)).collect();
    MatrixDataset::new(dims, values).unwrap()
}
