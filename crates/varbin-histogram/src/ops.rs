//! Operations on histograms
//!
//! Every operation compares two histograms cell by cell over the union of
//! their occupied keys, treating a key missing from one side as zero mass.
//! Both histograms must be built over the same grid for the comparison to be
//! meaningful; keys carry no grid identity, so that is the caller's contract.

use crate::types::SparseHistogram;
use std::cmp::Ordering;
use std::iter::Peekable;

/// Operations that can be performed on pairs of histograms
pub trait HistogramOps {
    /// Pointwise minimum: the mass both histograms share
    fn intersection(&self, other: &Self) -> Self;

    /// Mass of `self` not covered by `shared`, cell by cell
    fn residual(&self, shared: &Self) -> Self;

    /// Total mass of the intersection
    fn shared_mass(&self, other: &Self) -> f64;

    /// Sum of absolute cell differences
    fn l1_distance(&self, other: &Self) -> f64;

    /// Sum of squared cell differences
    ///
    /// This is the squared Euclidean distance; take the square root for the norm.
    fn l2_distance(&self, other: &Self) -> f64;
}

impl HistogramOps for SparseHistogram {
    fn intersection(&self, other: &Self) -> Self {
        let mut shared = SparseHistogram::new();
        for (key, a, b) in union_cells(self, other) {
            shared.insert_positive(key, a.min(b));
        }
        shared
    }

    fn residual(&self, shared: &Self) -> Self {
        let mut rest = SparseHistogram::new();
        for (key, mass) in self.iter() {
            rest.insert_positive(key, mass - shared.get(key));
        }
        rest
    }

    fn shared_mass(&self, other: &Self) -> f64 {
        union_cells(self, other).map(|(_, a, b)| a.min(b)).sum()
    }

    fn l1_distance(&self, other: &Self) -> f64 {
        union_cells(self, other).map(|(_, a, b)| (a - b).abs()).sum()
    }

    fn l2_distance(&self, other: &Self) -> f64 {
        union_cells(self, other).map(|(_, a, b)| (a - b).powi(2)).sum()
    }
}

// Helper functions

/// Walk two histograms in key order, yielding `(key, mass_a, mass_b)` for
/// every key occupied in either
fn union_cells<'a>(
    a: &'a SparseHistogram,
    b: &'a SparseHistogram,
) -> impl Iterator<Item = (u64, f64, f64)> + 'a {
    UnionCells {
        a: a.iter().peekable(),
        b: b.iter().peekable(),
    }
}

struct UnionCells<A: Iterator<Item = (u64, f64)>, B: Iterator<Item = (u64, f64)>> {
    a: Peekable<A>,
    b: Peekable<B>,
}

impl<A, B> Iterator for UnionCells<A, B>
where
    A: Iterator<Item = (u64, f64)>,
    B: Iterator<Item = (u64, f64)>,
{
    type Item = (u64, f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (self.a.peek(), self.b.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(&(ka, _)), Some(&(kb, _))) => ka.cmp(&kb),
        };

        match order {
            Ordering::Less => self.a.next().map(|(k, m)| (k, m, 0.0)),
            Ordering::Greater => self.b.next().map(|(k, m)| (k, 0.0, m)),
            Ordering::Equal => {
                let (k, ma) = self.a.next()?;
                let (_, mb) = self.b.next()?;
                Some((k, ma, mb))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hist(cells: &[(u64, f64)]) -> SparseHistogram {
        SparseHistogram::from_cells(cells.iter().copied())
    }

    #[test]
    fn test_identical_histograms() {
        let h = hist(&[(0, 0.2), (3, 0.3), (9, 0.5)]);

        assert_eq!(h.l1_distance(&h), 0.0);
        assert_eq!(h.l2_distance(&h), 0.0);
        assert_eq!(h.intersection(&h), h);
        assert_relative_eq!(h.shared_mass(&h), 1.0);
        assert!(h.residual(&h).is_empty());
    }

    #[test]
    fn test_overlapping_histograms() {
        let h1 = hist(&[(0, 0.5), (1, 0.5)]);
        let h2 = hist(&[(1, 0.25), (2, 0.75)]);

        let shared = h1.intersection(&h2);
        assert_eq!(shared, hist(&[(1, 0.25)]));
        assert_relative_eq!(h1.shared_mass(&h2), 0.25);

        let r1 = h1.residual(&shared);
        let r2 = h2.residual(&shared);
        assert_eq!(r1, hist(&[(0, 0.5), (1, 0.25)]));
        assert_eq!(r2, hist(&[(2, 0.75)]));
        assert_relative_eq!(r1.total_mass(), 1.0 - shared.total_mass());
        assert_relative_eq!(r2.total_mass(), 1.0 - shared.total_mass());

        assert_relative_eq!(h1.l1_distance(&h2), 0.5 + 0.25 + 0.75);
        assert_relative_eq!(h1.l2_distance(&h2), 0.25 + 0.0625 + 0.5625);
    }

    #[test]
    fn test_disjoint_histograms() {
        let h1 = hist(&[(0, 0.4), (1, 0.6)]);
        let h2 = hist(&[(5, 1.0)]);

        let shared = h1.intersection(&h2);
        assert!(shared.is_empty());
        assert_eq!(shared.total_mass(), 0.0);
        assert_eq!(h1.residual(&shared), h1);
        assert_eq!(h2.residual(&shared), h2);
        assert_relative_eq!(h1.l1_distance(&h2), 2.0);
    }

    #[test]
    fn test_symmetry() {
        let h1 = hist(&[(0, 0.1), (2, 0.6), (4, 0.3)]);
        let h2 = hist(&[(1, 0.3), (2, 0.2), (4, 0.5)]);

        assert_eq!(h1.l1_distance(&h2), h2.l1_distance(&h1));
        assert_eq!(h1.l2_distance(&h2), h2.l2_distance(&h1));
        assert_eq!(h1.intersection(&h2), h2.intersection(&h1));
    }

    #[test]
    fn test_empty_operands() {
        let empty = SparseHistogram::new();
        let h = hist(&[(7, 1.0)]);

        assert_relative_eq!(h.l1_distance(&empty), 1.0);
        assert_relative_eq!(empty.l2_distance(&h), 1.0);
        assert!(h.intersection(&empty).is_empty());
        assert_eq!(h.residual(&empty), h);
    }

    #[test]
    fn test_union_cells_order() {
        let h1 = hist(&[(1, 0.5), (4, 0.5)]);
        let h2 = hist(&[(0, 0.5), (4, 0.25), (9, 0.25)]);
        let keys: Vec<u64> = union_cells(&h1, &h2).map(|(k, _, _)| k).collect();
        assert_eq!(keys, vec![0, 1, 4, 9]);
    }
}
