//! Brute-force k-nearest-neighbor index.

use super::Metric;
use crate::error::{CentinelaError, Result};
use crate::primitives::Matrix;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Exact nearest-neighbor index over a fixed training set.
///
/// Each query performs an exhaustive scan of the training rows, sorts by
/// distance ascending, and returns the k closest `(row_index, distance)`
/// pairs. Ties are broken by training-set insertion order, so query
/// results are deterministic.
///
/// Built once per `fit` call and read-only afterward.
///
/// # Examples
///
/// ```
/// use centinela::neighbors::{BruteForceIndex, Metric};
/// use centinela::primitives::Matrix;
///
/// let train = Matrix::from_vec(3, 1, vec![0.0, 1.0, 10.0]).unwrap();
/// let index = BruteForceIndex::build(&train, Metric::Euclidean, 1).unwrap();
///
/// let hits = index.query(&[0.2], 2).unwrap();
/// assert_eq!(hits[0].0, 0); // nearest is row 0
/// assert_eq!(hits[1].0, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BruteForceIndex {
    /// Training points, one per row.
    data: Matrix<f32>,
    /// Metric fixed at build time.
    metric: Metric,
    /// Parallelism hint: 1 runs batch queries sequentially, 0 uses all
    /// available cores, any other value also runs on the rayon pool.
    n_jobs: usize,
}

impl BruteForceIndex {
    /// Builds an index over the training set.
    ///
    /// # Errors
    ///
    /// Returns [`CentinelaError::IndexBuild`] if the training set is empty
    /// or its points have zero dimensions.
    pub fn build(x: &Matrix<f32>, metric: Metric, n_jobs: usize) -> Result<Self> {
        let (n_samples, n_features) = x.shape();
        if n_samples == 0 {
            return Err(CentinelaError::IndexBuild {
                message: "empty training set".to_string(),
            });
        }
        if n_features == 0 {
            return Err(CentinelaError::IndexBuild {
                message: "points have zero dimensions".to_string(),
            });
        }
        Ok(Self {
            data: x.clone(),
            metric,
            n_jobs,
        })
    }

    /// Number of indexed training points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.n_rows()
    }

    /// Returns true if the index holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.n_rows() == 0
    }

    /// Dimensionality of the indexed points.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.n_cols()
    }

    /// Returns the metric the index was built with.
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Returns the indexed training set.
    #[must_use]
    pub fn data(&self) -> &Matrix<f32> {
        &self.data
    }

    /// Finds the k nearest training points to `point`.
    ///
    /// Results are sorted ascending by distance, ties broken by insertion
    /// order. When k exceeds the number of indexed points, all points are
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`CentinelaError::DimensionMismatch`] if the query width
    /// differs from the indexed points.
    pub fn query(&self, point: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        if point.len() != self.dim() {
            return Err(CentinelaError::dimension_mismatch(self.dim(), point.len()));
        }

        let mut hits: Vec<(usize, f32)> = (0..self.len())
            .map(|j| (j, self.metric.distance(point, self.data.row_slice(j))))
            .collect();

        // Stable sort keeps insertion order among equal distances.
        hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        hits.truncate(k);
        Ok(hits)
    }

    /// Runs [`Self::query`] for every row of `x`, in row order.
    ///
    /// Queries are independent, so with `n_jobs != 1` they run on the
    /// rayon pool; indexed collection keeps the output order and numeric
    /// content identical to the sequential path.
    ///
    /// # Errors
    ///
    /// Returns [`CentinelaError::DimensionMismatch`] if `x` has a
    /// different number of columns than the indexed points.
    pub fn query_batch(&self, x: &Matrix<f32>, k: usize) -> Result<Vec<Vec<(usize, f32)>>> {
        if x.n_cols() != self.dim() {
            return Err(CentinelaError::dimension_mismatch(self.dim(), x.n_cols()));
        }

        if self.n_jobs == 1 {
            (0..x.n_rows())
                .map(|i| self.query(x.row_slice(i), k))
                .collect()
        } else {
            (0..x.n_rows())
                .into_par_iter()
                .map(|i| self.query(x.row_slice(i), k))
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "tests_index_contract.rs"]
mod tests_contract;

#[cfg(test)]
mod tests {
    use super::*;

    fn line_points() -> Matrix<f32> {
        Matrix::from_vec(4, 1, vec![0.0, 1.0, 2.0, 10.0]).unwrap()
    }

    #[test]
    fn test_build_empty_fails() {
        let x = Matrix::from_vec(0, 2, vec![]).unwrap();
        let result = BruteForceIndex::build(&x, Metric::Euclidean, 1);
        assert!(matches!(result, Err(CentinelaError::IndexBuild { .. })));
    }

    #[test]
    fn test_build_zero_dim_fails() {
        let x = Matrix::from_vec(3, 0, vec![]).unwrap();
        let result = BruteForceIndex::build(&x, Metric::Euclidean, 1);
        assert!(matches!(result, Err(CentinelaError::IndexBuild { .. })));
    }

    #[test]
    fn test_query_sorted_ascending() {
        let index = BruteForceIndex::build(&line_points(), Metric::Euclidean, 1).unwrap();
        let hits = index.query(&[1.4], 4).unwrap();
        for pair in hits.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
        assert_eq!(hits[0].0, 1);
    }

    #[test]
    fn test_query_truncates_to_k() {
        let index = BruteForceIndex::build(&line_points(), Metric::Euclidean, 1).unwrap();
        let hits = index.query(&[0.0], 2).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_query_k_larger_than_index() {
        let index = BruteForceIndex::build(&line_points(), Metric::Euclidean, 1).unwrap();
        let hits = index.query(&[0.0], 100).unwrap();
        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_query_dimension_mismatch() {
        let index = BruteForceIndex::build(&line_points(), Metric::Euclidean, 1).unwrap();
        let result = index.query(&[0.0, 1.0], 2);
        assert!(matches!(
            result,
            Err(CentinelaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_tie_break_by_insertion_order() {
        // Rows 0 and 1 are equidistant from the query.
        let x = Matrix::from_vec(3, 1, vec![-1.0, 1.0, 5.0]).unwrap();
        let index = BruteForceIndex::build(&x, Metric::Euclidean, 1).unwrap();
        let hits = index.query(&[0.0], 2).unwrap();
        assert_eq!(hits[0].0, 0);
        assert_eq!(hits[1].0, 1);
    }

    #[test]
    fn test_query_batch_matches_sequential() {
        let x = line_points();
        let seq = BruteForceIndex::build(&x, Metric::Euclidean, 1).unwrap();
        let par = BruteForceIndex::build(&x, Metric::Euclidean, 4).unwrap();
        let a = seq.query_batch(&x, 3).unwrap();
        let b = par.query_batch(&x, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_query_batch_dimension_mismatch() {
        let index = BruteForceIndex::build(&line_points(), Metric::Euclidean, 1).unwrap();
        let bad = Matrix::from_vec(1, 2, vec![0.0, 0.0]).unwrap();
        assert!(index.query_batch(&bad, 2).is_err());
    }

    #[test]
    fn test_accessors() {
        let index = BruteForceIndex::build(&line_points(), Metric::Manhattan, 1).unwrap();
        assert_eq!(index.len(), 4);
        assert!(!index.is_empty());
        assert_eq!(index.dim(), 1);
        assert_eq!(index.metric(), Metric::Manhattan);
        assert_eq!(index.data().n_rows(), 4);
    }
}
