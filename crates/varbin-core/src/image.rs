//! Pixel-backed datasets
//!
//! An [`ImageDataset`] exposes every pixel of an RGBA raster as a point in a
//! five dimensional unit cube: normalized column, normalized row, then the red,
//! green and blue channels. Alpha is carried but never binned. Decoding image
//! files is left to the caller; this type only owns already decoded channels.

use crate::{Dataset, Error, Result};
use num_traits::{PrimInt, ToPrimitive, Unsigned};

/// Number of components per pixel point: x, y, r, g, b
pub const IMAGE_DIMS: usize = 5;

/// RGBA raster viewed as a [`Dataset`]
///
/// Channels are normalized by `T::max_value() + 1`, so every component lands in
/// `[0, 1)` and, for `u8` channels at 256 bins, each channel value gets a bin
/// of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDataset<T = u8> {
    width: usize,
    height: usize,
    pixels: Vec<[T; 4]>,
    channel_scale: f64,
}

impl<T> ImageDataset<T>
where
    T: PrimInt + Unsigned + ToPrimitive,
{
    /// Build from a flat, row-major RGBA channel buffer
    pub fn from_rgba(width: usize, height: usize, channels: &[T]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| {
                Error::InvalidParameter(format!("{width}x{height} RGBA image is too large"))
            })?;
        if channels.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "{width}x{height} RGBA image needs {expected} channel values, got {}",
                channels.len()
            )));
        }

        let pixels = channels
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        Ok(Self::with_pixels(width, height, pixels))
    }

    /// Build an image where every pixel has the same colour
    pub fn solid(width: usize, height: usize, rgba: [T; 4]) -> Self {
        Self::with_pixels(width, height, vec![rgba; width * height])
    }

    /// Build an image by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> [T; 4],
    {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::with_pixels(width, height, pixels)
    }

    fn with_pixels(width: usize, height: usize, pixels: Vec<[T; 4]>) -> Self {
        let channel_scale = T::max_value().to_f64().unwrap_or(f64::MAX) + 1.0;
        Self {
            width,
            height,
            pixels,
            channel_scale,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA value of the pixel at column `x`, row `y`
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn pixel(&self, x: usize, y: usize) -> [T; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x]
    }

    fn channel(&self, value: T) -> f64 {
        value.to_f64().unwrap_or(0.0) / self.channel_scale
    }
}

impl<T> Dataset for ImageDataset<T>
where
    T: PrimInt + Unsigned + ToPrimitive,
{
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn dims(&self) -> usize {
        IMAGE_DIMS
    }

    fn value_at(&self, index: usize, out: &mut [f64]) {
        let [r, g, b, _] = self.pixels[index];
        let dx = index % self.width;
        let dy = index / self.width;

        out[0] = dx as f64 / self.width as f64;
        out[1] = dy as f64 / self.height as f64;
        out[2] = self.channel(r);
        out[3] = self.channel(g);
        out[4] = self.channel(b);
    }
}
