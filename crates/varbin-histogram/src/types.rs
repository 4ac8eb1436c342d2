//! Core types for histogram representation

use std::collections::BTreeMap;
use std::fmt;

/// Sparse mapping from composite cell key to mass
///
/// Absent keys have zero mass and zero-mass cells are never stored. Keys are
/// kept ordered, so sums over the cells and anything reported from them are
/// reproducible run to run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseHistogram {
    cells: BTreeMap<u64, f64>,
}

impl SparseHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a histogram from `(key, mass)` pairs, summing repeated keys
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (u64, f64)>,
    {
        let mut hist = Self::new();
        for (key, mass) in cells {
            hist.add(key, mass);
        }
        hist.cells.retain(|_, mass| *mass > 0.0);
        hist
    }

    /// Add `mass` to cell `key`
    pub(crate) fn add(&mut self, key: u64, mass: f64) {
        *self.cells.entry(key).or_insert(0.0) += mass;
    }

    /// Insert a cell that is known to be positive
    pub(crate) fn insert_positive(&mut self, key: u64, mass: f64) {
        if mass > 0.0 {
            self.cells.insert(key, mass);
        }
    }

    /// Multiply every cell by `factor`
    pub(crate) fn scale(&mut self, factor: f64) {
        for mass in self.cells.values_mut() {
            *mass *= factor;
        }
    }

    /// Mass stored in cell `key` (zero when absent)
    pub fn get(&self, key: u64) -> f64 {
        self.cells.get(&key).copied().unwrap_or(0.0)
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell carries mass
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of all cell masses
    pub fn total_mass(&self) -> f64 {
        self.cells.values().sum()
    }

    /// Largest single cell mass
    pub fn max_mass(&self) -> f64 {
        self.cells.values().copied().fold(0.0, f64::max)
    }

    /// Occupied cells in key order
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.cells.iter().map(|(&key, &mass)| (key, mass))
    }

    /// Occupied keys in order
    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.cells.keys().copied()
    }

    /// Create a copy whose masses sum to one
    ///
    /// An empty histogram stays empty.
    pub fn normalize(&self) -> Self {
        let mut normalized = self.clone();
        let total = self.total_mass();
        if total > 0.0 {
            normalized.scale(1.0 / total);
        }
        normalized
    }
}

impl FromIterator<(u64, f64)> for SparseHistogram {
    fn from_iter<I: IntoIterator<Item = (u64, f64)>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

impl fmt::Display for SparseHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SparseHistogram({} cells, mass={:.6})",
            self.len(),
            self.total_mass()
        )
    }
}
