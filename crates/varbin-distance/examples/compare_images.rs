//! Compare synthetic images at several starting resolutions
//!
//! Run with `RUST_LOG=varbin_distance=debug` to see every resolution level.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use varbin_core::ImageDataset;
use varbin_distance::{VarBinConfig, VarBinDistance};

/// Horizontal colour gradient, optionally shifted to the right
fn gradient(width: usize, height: usize, shift: usize) -> ImageDataset<u8> {
    ImageDataset::from_fn(width, height, |x, _| {
        let t = ((x + shift) * 255 / width.max(1)).min(255) as u8;
        [t, 64, 255 - t, 255]
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base = gradient(64, 48, 0);
    let shifted = gradient(64, 48, 3);
    let inverted = ImageDataset::from_fn(64, 48, |x, y| {
        let [r, g, b, a] = base.pixel(x, y);
        [255 - r, 255 - g, 255 - b, a]
    });

    println!("=== Variable-bin distance between synthetic images ===\n");
    for initial_bins in [16, 64, 256] {
        let varbin = VarBinDistance::new(VarBinConfig::new().with_initial_bins(initial_bins))?;
        let near = varbin.distance(&base, &shifted)?;
        let far = varbin.distance(&base, &inverted)?;
        println!("nbins={initial_bins:>3}: shifted={near:.4}, inverted={far:.4}");
    }

    println!("\n=== Per-level breakdown (shifted, 256 bins) ===\n");
    let report = VarBinDistance::default().compute(&base, &shifted)?;
    print!("{report}");

    Ok(())
}
