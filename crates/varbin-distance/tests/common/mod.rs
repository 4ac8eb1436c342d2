//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use varbin_core::{Dataset, ImageDataset, MatrixDataset};

pub const EPSILON: f64 = 1e-10;

/// Image with independently random RGB values per pixel
pub fn noise_image(width: usize, height: usize, seed: u64) -> ImageDataset<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    ImageDataset::from_fn(width, height, |_, _| [rng.gen(), rng.gen(), rng.gen(), 255])
}

/// Copy of `image` with every colour channel raised by `offset`, saturating at 255
pub fn brighten(image: &ImageDataset<u8>, offset: u8) -> ImageDataset<u8> {
    ImageDataset::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.pixel(x, y);
        [
            r.saturating_add(offset),
            g.saturating_add(offset),
            b.saturating_add(offset),
            a,
        ]
    })
}

/// Points drawn uniformly from `[lo, hi)` in every dimension
pub fn points_in(len: usize, dims: usize, lo: f64, hi: f64, seed: u64) -> MatrixDataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..len * dims).map(|_| rng.gen_range(lo..hi)).collect();
    MatrixDataset::new(dims, values).unwrap()
}

/// Materialize any dataset as an owned matrix
pub fn to_matrix<D: Dataset>(dataset: &D) -> MatrixDataset {
    let rows: Vec<Vec<f64>> = (0..dataset.len()).map(|i| dataset.value_vec(i)).collect();
    MatrixDataset::from_rows(&rows).unwrap()
}
