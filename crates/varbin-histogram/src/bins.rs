//! Per-dimension bin boundaries

use serde::{Deserialize, Serialize};
use varbin_core::{Error, Result};

/// What to do with a value that falls in no bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    /// Assign the value to the last bin
    ///
    /// Covers values at or past the upper bound, values below the lower bound
    /// and NaN alike.
    #[default]
    Clamp,
    /// Fail with [`Error::OutOfRange`]
    Reject,
}

/// Ordered boundaries of the bins for one dimension
///
/// Holds `nbins + 1` non-decreasing values. Bin `b` covers
/// `[boundaries[b], boundaries[b + 1])`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinSet {
    boundaries: Vec<f64>,
}

impl BinSet {
    /// Create `nbins` equal-width bins spanning `[start, end)`
    ///
    /// The final boundary is set to `end` exactly rather than accumulated, so
    /// it never drifts.
    pub fn uniform(start: f64, end: f64, nbins: usize) -> Result<Self> {
        if nbins == 0 {
            return Err(Error::InvalidParameter(
                "number of bins must be at least 1".to_string(),
            ));
        }
        validate_range(start, end)?;

        let width = (end - start) / nbins as f64;
        let mut boundaries: Vec<f64> = (0..nbins).map(|i| start + i as f64 * width).collect();
        boundaries.push(end);

        Ok(Self { boundaries })
    }

    /// Create bins from explicit boundaries
    pub fn from_boundaries(boundaries: Vec<f64>) -> Result<Self> {
        if boundaries.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "need at least 2 boundaries, got {}",
                boundaries.len()
            )));
        }
        if boundaries.windows(2).any(|w| !(w[0] <= w[1])) {
            return Err(Error::InvalidParameter(
                "bin boundaries must be non-decreasing".to_string(),
            ));
        }
        validate_range(boundaries[0], boundaries[boundaries.len() - 1])?;

        Ok(Self { boundaries })
    }

    /// Number of bins
    pub fn nbins(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn start(&self) -> f64 {
        self.boundaries[0]
    }

    pub fn end(&self) -> f64 {
        self.boundaries[self.nbins()]
    }

    /// Lower (inclusive) and upper (exclusive) edge of bin `b`
    pub fn bounds(&self, b: usize) -> (f64, f64) {
        (self.boundaries[b], self.boundaries[b + 1])
    }

    /// Midpoint of bin `b`
    pub fn center(&self, b: usize) -> f64 {
        let (lo, hi) = self.bounds(b);
        (lo + hi) / 2.0
    }

    /// Bin containing `value`, or `None` when no half-open interval matches
    pub fn checked_index_of(&self, value: f64) -> Option<usize> {
        // Number of boundaries <= value; NaN compares false everywhere and gives 0.
        let above = self.boundaries.partition_point(|&b| b <= value);
        if above == 0 || above == self.boundaries.len() {
            None
        } else {
            Some(above - 1)
        }
    }

    /// Bin containing `value`, clamping misses to the last bin
    pub fn index_of(&self, value: f64) -> usize {
        self.checked_index_of(value).unwrap_or(self.nbins() - 1)
    }

    /// Bin containing `value` under an explicit out-of-range policy
    pub fn locate(&self, value: f64, dimension: usize, policy: OutOfRangePolicy) -> Result<usize> {
        match policy {
            OutOfRangePolicy::Clamp => Ok(self.index_of(value)),
            OutOfRangePolicy::Reject => {
                self.checked_index_of(value).ok_or_else(|| Error::OutOfRange {
                    value,
                    dimension,
                    start: self.start(),
                    end: self.end(),
                })
            }
        }
    }
}

fn validate_range(start: f64, end: f64) -> Result<()> {
    if !start.is_finite() || !end.is_finite() || start >= end {
        return Err(Error::InvalidParameter(format!(
            "bin range [{start}, {end}) must be finite and non-empty"
        )));
    }
    Ok(())
}
