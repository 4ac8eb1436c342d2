//! Dataset access contract
//!
//! Histogram construction only ever needs three things from its input: how many
//! points there are, how many components each point has, and random access to
//! the components of a point. Anything that can answer those implements
//! [`Dataset`]; the histogram and distance crates never look further.

use crate::{Error, Result};

/// Random-access collection of fixed-width numeric vectors
///
/// Every component returned by [`Dataset::value_at`] is expected to lie in the
/// range the consumer bins over (normally `[0, 1)`). The contract is the
/// caller's to uphold; consumers decide whether to clamp or reject values that
/// break it.
pub trait Dataset {
    /// Number of points
    fn len(&self) -> usize;

    /// Number of components per point
    fn dims(&self) -> usize;

    /// Write the components of point `index` into `out`
    ///
    /// # Panics
    ///
    /// Implementations may panic if `index >= self.len()` or if
    /// `out.len() != self.dims()`.
    fn value_at(&self, index: usize, out: &mut [f64]);

    /// Whether the dataset has no points
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocating convenience wrapper around [`Dataset::value_at`]
    fn value_vec(&self, index: usize) -> Vec<f64> {
        let mut out = vec![0.0; self.dims()];
        self.value_at(index, &mut out);
        out
    }
}

impl<D: Dataset + ?Sized> Dataset for &D {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn dims(&self) -> usize {
        (**self).dims()
    }

    fn value_at(&self, index: usize, out: &mut [f64]) {
        (**self).value_at(index, out)
    }
}

impl<D: Dataset + ?Sized> Dataset for Box<D> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn dims(&self) -> usize {
        (**self).dims()
    }

    fn value_at(&self, index: usize, out: &mut [f64]) {
        (**self).value_at(index, out)
    }
}

/// Owned row-major matrix of points
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDataset {
    dims: usize,
    values: Vec<f64>,
}

impl MatrixDataset {
    /// Create a dataset from a flat row-major buffer
    pub fn new(dims: usize, values: Vec<f64>) -> Result<Self> {
        if dims == 0 {
            return Err(Error::InvalidParameter(
                "dataset must have at least one dimension".to_string(),
            ));
        }
        if values.len() % dims != 0 {
            return Err(Error::InvalidParameter(format!(
                "buffer of {} values is not a whole number of {dims}-dimensional points",
                values.len()
            )));
        }
        Ok(Self { dims, values })
    }

    /// Create an empty dataset with the given dimensionality
    pub fn empty(dims: usize) -> Result<Self> {
        Self::new(dims, Vec::new())
    }

    /// Create a dataset from rows of equal width
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let dims = rows
            .first()
            .map(|row| row.as_ref().len())
            .ok_or_else(|| {
                Error::InvalidParameter("cannot infer dimensionality from zero rows".to_string())
            })?;

        let mut values = Vec::with_capacity(dims * rows.len());
        for row in rows {
            let row = row.as_ref();
            if row.len() != dims {
                return Err(Error::size_mismatch(dims, row.len(), "matrix row"));
            }
            values.extend_from_slice(row);
        }
        Self::new(dims, values)
    }

    /// Borrow the components of one point
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.dims;
        &self.values[start..start + self.dims]
    }

    /// Iterate over all points
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.dims)
    }
}

impl Dataset for MatrixDataset {
    fn len(&self) -> usize {
        self.values.len() / self.dims
    }

    fn dims(&self) -> usize {
        self.dims
    }

    fn value_at(&self, index: usize, out: &mut [f64]) {
        out.copy_from_slice(self.row(index));
    }
}
