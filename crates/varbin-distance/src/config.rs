//! Configuration for the variable-bin distance

use serde::{Deserialize, Serialize};
use varbin_core::{Error, Result};
use varbin_histogram::{HistogramOps, OutOfRangePolicy, SparseHistogram};

/// Default bin count of the finest resolution level
pub const DEFAULT_INITIAL_BINS: usize = 256;

/// Per-level distance between two histograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelMetric {
    /// Sum of absolute cell differences
    #[default]
    L1,
    /// Sum of squared cell differences
    L2,
}

impl LevelMetric {
    /// Get the name of this metric
    pub fn name(&self) -> &'static str {
        match self {
            Self::L1 => "l1",
            Self::L2 => "l2",
        }
    }

    /// Distance between `a` and `b` under this metric
    pub fn evaluate(&self, a: &SparseHistogram, b: &SparseHistogram) -> f64 {
        match self {
            Self::L1 => a.l1_distance(b),
            Self::L2 => a.l2_distance(b),
        }
    }
}

/// Parameters of a variable-bin distance computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VarBinConfig {
    /// Bins per dimension at the finest level; halved after every level
    pub initial_bins: usize,
    /// Value range `[start, end)` binned in every dimension
    pub range: (f64, f64),
    /// Handling of values outside `range`
    pub out_of_range: OutOfRangePolicy,
    /// Distance recorded at each level
    pub metric: LevelMetric,
}

impl Default for VarBinConfig {
    fn default() -> Self {
        Self {
            initial_bins: DEFAULT_INITIAL_BINS,
            range: (0.0, 1.0),
            out_of_range: OutOfRangePolicy::Clamp,
            metric: LevelMetric::L1,
        }
    }
}

impl VarBinConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bin count of the finest level
    pub fn with_initial_bins(mut self, initial_bins: usize) -> Self {
        self.initial_bins = initial_bins;
        self
    }

    /// Set the binned value range
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.range = (start, end);
        self
    }

    /// Set the out-of-range policy
    pub fn with_out_of_range(mut self, policy: OutOfRangePolicy) -> Self {
        self.out_of_range = policy;
        self
    }

    /// Set the per-level metric
    pub fn with_metric(mut self, metric: LevelMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Number of resolution levels: `floor(log2(initial_bins)) + 1`
    pub fn level_count(&self) -> usize {
        if self.initial_bins == 0 {
            0
        } else {
            self.initial_bins.ilog2() as usize + 1
        }
    }

    /// Check the configuration before running
    pub fn validate(&self) -> Result<()> {
        if self.initial_bins == 0 {
            return Err(Error::InvalidParameter(
                "initial bin count must be at least 1".to_string(),
            ));
        }
        let (start, end) = self.range;
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(Error::InvalidParameter(format!(
                "range [{start}, {end}) must be finite and non-empty"
            )));
        }
        Ok(())
    }
}
