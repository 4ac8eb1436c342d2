//! Variable-bin distance between two datasets
//!
//! A single histogram comparison depends heavily on the chosen bin width: fine
//! bins punish small shifts in position or colour that coarse bins forgive.
//! [`VarBinDistance`] compares the datasets at a descending sequence of
//! resolutions instead and averages the per-level distances.
//!
//! At each level the mass both histograms share is removed before moving to
//! the next, coarser level. The remaining (residual) mass of a cell is spread
//! back over the points that fell in it, and every level re-histograms the
//! points with those weights over its own grid. A coarse level therefore only
//! scores the mass that no finer level matched, whether or not its bins line
//! up with the finer ones.

use crate::config::{LevelMetric, VarBinConfig};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};
use varbin_core::{Dataset, Error, Result};
use varbin_histogram::{BinGrid, GridBuilder, HistogramOps, SparseHistogram};

/// Outcome of one resolution level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelDistance {
    /// Bins per dimension at this level
    pub nbins: usize,
    /// Distance between the residual histograms entering this level
    pub distance: f64,
    /// Mass matched at this level and removed before the next one
    pub shared_mass: f64,
}

/// Result of a variable-bin distance computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarBinReport {
    /// One entry per level, finest first
    pub levels: Vec<LevelDistance>,
    /// Arithmetic mean of the per-level distances
    pub distance: f64,
    /// Metric used at every level
    pub metric: LevelMetric,
}

impl VarBinReport {
    /// Per-level distances, finest first
    pub fn level_distances(&self) -> Vec<f64> {
        self.levels.iter().map(|level| level.distance).collect()
    }

    /// Total mass matched across all levels
    pub fn total_shared_mass(&self) -> f64 {
        self.levels.iter().map(|level| level.shared_mass).sum()
    }
}

impl fmt::Display for VarBinReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "VarBin distance ({}): {:.6} over {} levels",
            self.metric.name(),
            self.distance,
            self.levels.len()
        )?;
        for level in &self.levels {
            writeln!(
                f,
                "  nbins={:>5}: distance={:.6}, shared={:.6}",
                level.nbins, level.distance, level.shared_mass
            )?;
        }
        Ok(())
    }
}

/// Multi-resolution histogram distance
///
/// # Example
///
/// ```rust
/// use varbin_core::ImageDataset;
/// use varbin_distance::{VarBinConfig, VarBinDistance};
///
/// let a = ImageDataset::<u8>::solid(2, 2, [120, 40, 200, 255]);
/// let b = ImageDataset::<u8>::solid(2, 2, [120, 40, 200, 255]);
///
/// let varbin = VarBinDistance::new(VarBinConfig::default()).unwrap();
/// assert_eq!(varbin.distance(&a, &b).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VarBinDistance {
    config: VarBinConfig,
}

impl Default for VarBinDistance {
    fn default() -> Self {
        Self {
            config: VarBinConfig::default(),
        }
    }
}

impl VarBinDistance {
    /// Create a distance with a validated configuration
    pub fn new(config: VarBinConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a distance with default settings and the given finest bin count
    pub fn with_initial_bins(initial_bins: usize) -> Result<Self> {
        Self::new(VarBinConfig::default().with_initial_bins(initial_bins))
    }

    pub fn config(&self) -> &VarBinConfig {
        &self.config
    }

    /// Compare two datasets at every resolution level
    ///
    /// Fails with [`Error::DimensionMismatch`] when the datasets disagree on
    /// dimensionality and with [`Error::InsufficientData`] when either is empty.
    #[instrument(
        skip_all,
        fields(
            initial_bins = self.config.initial_bins,
            dims = d1.dims(),
            len1 = d1.len(),
            len2 = d2.len()
        )
    )]
    pub fn compute<A, B>(&self, d1: &A, d2: &B) -> Result<VarBinReport>
    where
        A: Dataset + ?Sized,
        B: Dataset + ?Sized,
    {
        if d1.dims() != d2.dims() {
            return Err(Error::size_mismatch(d1.dims(), d2.dims(), "dataset pair"));
        }
        if d1.is_empty() || d2.is_empty() {
            return Err(Error::empty_input());
        }

        let dims = d1.dims();
        let (start, end) = self.config.range;
        let metric = self.config.metric;
        let mut nbins = self.config.initial_bins;

        let mut w1 = PointWeights::uniform(d1.len());
        let mut w2 = PointWeights::uniform(d2.len());

        let mut levels = Vec::with_capacity(self.config.level_count());
        loop {
            let grid = BinGrid::uniform(dims, start, end, nbins)?;
            let builder = GridBuilder::new(&grid).with_policy(self.config.out_of_range);
            let keys1 = builder.cell_keys(d1)?;
            let keys2 = builder.cell_keys(d2)?;
            let h1 = w1.histogram(&keys1);
            let h2 = w2.histogram(&keys2);

            let distance = metric.evaluate(&h1, &h2);
            let shared = h1.intersection(&h2);
            let shared_mass = shared.total_mass();
            debug!(nbins, distance, shared_mass, "Resolution level complete");
            levels.push(LevelDistance {
                nbins,
                distance,
                shared_mass,
            });

            nbins /= 2;
            if nbins == 0 {
                break;
            }
            w1.carry(&keys1, &h1, &h1.residual(&shared));
            w2.carry(&keys2, &h2, &h2.residual(&shared));
        }

        let distance =
            levels.iter().map(|level| level.distance).sum::<f64>() / levels.len() as f64;
        debug!(distance, levels = levels.len(), "VarBin distance computed");

        Ok(VarBinReport {
            levels,
            distance,
            metric,
        })
    }

    /// Compare two datasets and return only the averaged distance
    pub fn distance<A, B>(&self, d1: &A, d2: &B) -> Result<f64>
    where
        A: Dataset + ?Sized,
        B: Dataset + ?Sized,
    {
        self.compute(d1, d2).map(|report| report.distance)
    }
}

/// Share of the not yet matched mass held by each point of one dataset
#[derive(Debug, Clone)]
struct PointWeights {
    weights: Vec<f64>,
}

impl PointWeights {
    fn uniform(len: usize) -> Self {
        Self {
            weights: vec![1.0 / len as f64; len],
        }
    }

    /// Histogram of the current weights, `keys[i]` being the cell of point `i`
    fn histogram(&self, keys: &[u64]) -> SparseHistogram {
        SparseHistogram::from_cells(keys.iter().copied().zip(self.weights.iter().copied()))
    }

    /// Spread each cell's residual over its points in proportion to their weight
    ///
    /// `before` must be the histogram these weights produced over `keys`.
    fn carry(&mut self, keys: &[u64], before: &SparseHistogram, residual: &SparseHistogram) {
        for (weight, &key) in self.weights.iter_mut().zip(keys) {
            let mass = before.get(key);
            *weight = if mass > 0.0 {
                *weight * (residual.get(key) / mass)
            } else {
                0.0
            };
        }
    }
}

/// Variable-bin L1 distance with `initial_bins` bins at the finest level
pub fn var_bin_distance<A, B>(d1: &A, d2: &B, initial_bins: usize) -> Result<f64>
where
    A: Dataset + ?Sized,
    B: Dataset + ?Sized,
{
    VarBinDistance::with_initial_bins(initial_bins)?.distance(d1, d2)
}
