//! Local Outlier Factor (LOF) for density-based anomaly detection.
//!
//! LOF identifies local outliers by comparing the local density of a point
//! with the local densities of its neighbors. A score near 1 means the
//! point sits in a region as dense as its neighborhood; scores well above
//! 1 mean the point is in a sparser region than its neighbors (outlier).
//!
//! # Algorithm
//!
//! Reference: Breunig, Kriegel, Ng & Sander (2000). "LOF: Identifying
//! Density-based Local Outliers", ACM SIGMOD.
//!
//! 1. For each training point, find the k nearest neighbors and the
//!    neighborhood radius (distance to the k-th neighbor)
//! 2. Reachability distance: reach-dist(p, o) = max(radius(o), d(p, o))
//! 3. Local reachability density: lrd(p) = k / Σ reach-dist(p, o)
//! 4. LOF(p) = mean(lrd of neighbors) / lrd(p)
//! 5. Threshold = (1 − contamination) quantile of the training scores;
//!    points at or above it are labeled outliers
//!
//! # Examples
//!
//! ```
//! use centinela::prelude::*;
//!
//! // Dense cluster near the origin plus one far outlier
//! let mut rows: Vec<f32> = Vec::new();
//! for i in 0..30 {
//!     rows.push(i as f32 * 0.1);
//!     rows.push(0.0);
//! }
//! rows.extend_from_slice(&[100.0, 100.0]);
//! let data = Matrix::from_vec(31, 2, rows).unwrap();
//!
//! let mut lof = LocalOutlierFactor::new()
//!     .with_n_neighbors(5)
//!     .with_contamination(0.05);
//! lof.fit(&data).unwrap();
//!
//! let scores = lof.decision_scores();
//! let max_idx = scores
//!     .iter()
//!     .enumerate()
//!     .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
//!     .unwrap()
//!     .0;
//! assert_eq!(max_idx, 30); // the far point has the highest LOF
//! assert_eq!(lof.labels()[30], 1);
//! ```

use crate::error::{CentinelaError, Result};
use crate::neighbors::{BruteForceIndex, Metric};
use crate::primitives::Matrix;
use crate::stats::quantile;
use crate::traits::UnsupervisedEstimator;
use serde::{Deserialize, Serialize};

/// Neighbor sets for a batch of query points: per point, the neighbor
/// indices into the training set and the matching distances, both sorted
/// ascending by distance.
type Neighborhoods = Vec<(Vec<usize>, Vec<f32>)>;

/// State produced by a successful `fit`, immutable thereafter.
///
/// Scoring operations read this state but never mutate it; a new `fit`
/// replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedLof {
    /// Distance from each training point to its k-th nearest neighbor.
    radius: Vec<f32>,
    /// Local reachability density per training point.
    lrd: Vec<f32>,
    /// LOF score per training point (higher = more anomalous).
    decision_scores: Vec<f32>,
    /// Decision threshold at the (1 − contamination) quantile.
    threshold: f32,
    /// 1 for training points scoring at or above the threshold, else 0.
    labels: Vec<i32>,
    /// Neighbor index built over the training set.
    index: BruteForceIndex,
}

impl FittedLof {
    /// Neighborhood radius (k-distance) per training point.
    #[must_use]
    pub fn radius(&self) -> &[f32] {
        &self.radius
    }

    /// Local reachability density per training point.
    #[must_use]
    pub fn lrd(&self) -> &[f32] {
        &self.lrd
    }

    /// LOF score per training point.
    #[must_use]
    pub fn decision_scores(&self) -> &[f32] {
        &self.decision_scores
    }

    /// Decision threshold.
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Outlier labels (1 = outlier, 0 = inlier) for the training set.
    #[must_use]
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// The neighbor index built over the training set.
    #[must_use]
    pub fn index(&self) -> &BruteForceIndex {
        &self.index
    }
}

/// Local Outlier Factor anomaly detector.
///
/// Construction stores hyperparameters only; all validation happens at
/// `fit` time. The engine has exactly two states: unfitted (only
/// hyperparameters) and fitted (hyperparameters plus [`FittedLof`]),
/// transitioning only via a successful [`Self::fit`].
///
/// # Performance
///
/// - Fit: O(n² d) brute-force neighbor search, O(nk) density/score passes
/// - Scoring m query points: O(mnd + mk)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalOutlierFactor {
    /// Number of nearest neighbors (k).
    n_neighbors: usize,
    /// Distance metric.
    metric: Metric,
    /// Expected fraction of outliers in the training set.
    ///
    /// Kept as f64 so the threshold quantile position
    /// (n − 1) · (1 − contamination) is exact for values like 0.1.
    contamination: f64,
    /// Parallelism hint forwarded to the neighbor index
    /// (1 = sequential, 0 = all cores).
    n_jobs: usize,
    /// Fitted state, present only after a successful `fit`.
    fitted: Option<FittedLof>,
}

impl Default for LocalOutlierFactor {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalOutlierFactor {
    /// Creates a detector with default hyperparameters
    /// (k = 10, Euclidean metric, contamination = 0.01, sequential).
    #[must_use]
    pub fn new() -> Self {
        Self {
            n_neighbors: 10,
            metric: Metric::Euclidean,
            contamination: 0.01,
            n_jobs: 1,
            fitted: None,
        }
    }

    /// Sets the number of neighbors (k).
    #[must_use]
    pub fn with_n_neighbors(mut self, n_neighbors: usize) -> Self {
        self.n_neighbors = n_neighbors;
        self
    }

    /// Sets the distance metric.
    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the expected fraction of outliers, in (0, 1).
    #[must_use]
    pub fn with_contamination(mut self, contamination: f64) -> Self {
        self.contamination = contamination;
        self
    }

    /// Sets the parallelism hint for neighbor queries: 1 (the default)
    /// runs them sequentially, 0 runs them on all available cores, and
    /// any other value also uses the rayon pool.
    #[must_use]
    pub fn with_n_jobs(mut self, n_jobs: usize) -> Self {
        self.n_jobs = n_jobs;
        self
    }

    /// Returns the number of neighbors (k).
    #[must_use]
    pub fn n_neighbors(&self) -> usize {
        self.n_neighbors
    }

    /// Returns the configured metric.
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Returns the configured contamination.
    #[must_use]
    pub fn contamination(&self) -> f64 {
        self.contamination
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Returns the fitted state, if any.
    #[must_use]
    pub fn fitted_model(&self) -> Option<&FittedLof> {
        self.fitted.as_ref()
    }

    /// LOF scores of the training points.
    ///
    /// # Panics
    ///
    /// Panics if the model has not been fitted.
    #[must_use]
    pub fn decision_scores(&self) -> &[f32] {
        self.require_fitted().decision_scores()
    }

    /// Training labels (1 = outlier, 0 = inlier).
    ///
    /// # Panics
    ///
    /// Panics if the model has not been fitted.
    #[must_use]
    pub fn labels(&self) -> &[i32] {
        self.require_fitted().labels()
    }

    /// Decision threshold.
    ///
    /// # Panics
    ///
    /// Panics if the model has not been fitted.
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.require_fitted().threshold()
    }

    fn require_fitted(&self) -> &FittedLof {
        self.fitted
            .as_ref()
            .expect("Model not fitted. Call fit() first.")
    }

    /// Fits the model to the training set.
    ///
    /// Builds the neighbor index, computes every neighborhood radius
    /// before any density (lrd(i) depends on radius(j) of i's neighbors),
    /// derives LOF scores from the same neighbor sets, and fixes the
    /// decision threshold at the (1 − contamination) quantile of the
    /// scores.
    ///
    /// # Errors
    ///
    /// - [`CentinelaError::InvalidHyperparameter`] if k < 1, contamination
    ///   is outside (0, 1), or the training set has fewer than k + 1 points
    /// - [`CentinelaError::IndexBuild`] if the neighbor index cannot be
    ///   built
    /// - [`CentinelaError::DegenerateDensity`] if some point's k
    ///   reach-distances sum to exactly zero (k + 1 coincident points)
    pub fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        let k = self.n_neighbors;
        let n_samples = x.n_rows();

        if k < 1 {
            return Err(CentinelaError::InvalidHyperparameter {
                param: "n_neighbors".to_string(),
                value: k.to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        if !(self.contamination > 0.0 && self.contamination < 1.0) {
            return Err(CentinelaError::InvalidHyperparameter {
                param: "contamination".to_string(),
                value: self.contamination.to_string(),
                constraint: "in (0, 1)".to_string(),
            });
        }
        if n_samples < k + 1 {
            return Err(CentinelaError::InvalidHyperparameter {
                param: "n_neighbors".to_string(),
                value: k.to_string(),
                constraint: format!("< n_samples (got {n_samples} samples)"),
            });
        }

        let index = BruteForceIndex::build(x, self.metric, self.n_jobs)?;

        // Every training point is its own zero-distance match, so query
        // k + 1 and drop the first hit.
        let hoods = Self::neighborhoods(&index, x, k, true)?;

        // All radii must exist before any lrd is computed.
        let radius: Vec<f32> = hoods
            .iter()
            .map(|(_, dists)| dists.last().copied().unwrap_or(0.0))
            .collect();

        let lrd = Self::lrd_from_neighborhoods(&hoods, &radius, k)?;

        // Ratios accumulate in f64; f32 sums drift enough to flip labels
        // sitting exactly on the threshold boundary.
        let decision_scores: Vec<f32> = hoods
            .iter()
            .zip(lrd.iter())
            .map(|((neighbors, _), &lrd_i)| {
                let neighbor_mean: f64 =
                    neighbors.iter().map(|&j| f64::from(lrd[j])).sum::<f64>() / k as f64;
                (neighbor_mean / f64::from(lrd_i)) as f32
            })
            .collect();

        let threshold = quantile(&decision_scores, 1.0 - self.contamination)?;
        let labels: Vec<i32> = decision_scores
            .iter()
            .map(|&s| i32::from(s >= threshold))
            .collect();

        self.fitted = Some(FittedLof {
            radius,
            lrd,
            decision_scores,
            threshold,
            labels,
            index,
        });
        Ok(())
    }

    /// Local reachability density of arbitrary query points against the
    /// fitted training set.
    ///
    /// Follows the reference behavior: queries k + 1 neighbors and drops
    /// the first, which is the self match when the query point is a
    /// training member. For genuinely novel points this drops one true
    /// neighbor; see [`Self::decision_function_novel`] for the corrected
    /// variant.
    ///
    /// # Errors
    ///
    /// - [`CentinelaError::NotFitted`] if called before `fit`
    /// - [`CentinelaError::DimensionMismatch`] if query width differs from
    ///   the training set
    /// - [`CentinelaError::DegenerateDensity`] if a query point's
    ///   reach-distance sum is exactly zero
    pub fn lrd(&self, x: &Matrix<f32>) -> Result<Vec<f32>> {
        let fitted = self
            .fitted
            .as_ref()
            .ok_or_else(|| CentinelaError::not_fitted("lrd"))?;
        let hoods = Self::neighborhoods(&fitted.index, x, self.n_neighbors, true)?;
        Self::lrd_from_neighborhoods(&hoods, &fitted.radius, self.n_neighbors)
    }

    /// Anomaly score for each query point: mean fitted lrd of its k
    /// nearest training neighbors divided by the point's own lrd.
    /// Larger means more anomalous.
    ///
    /// Uses the reference self-exclusion behavior (k + 1, drop first).
    ///
    /// # Errors
    ///
    /// Same error conditions as [`Self::lrd`].
    pub fn decision_function(&self, x: &Matrix<f32>) -> Result<Vec<f32>> {
        self.score_with_exclusion(x, true, "decision_function")
    }

    /// Corrected scoring variant for points that are not training members:
    /// keeps exactly the k true nearest neighbors instead of dropping the
    /// closest match.
    ///
    /// # Errors
    ///
    /// Same error conditions as [`Self::lrd`].
    pub fn decision_function_novel(&self, x: &Matrix<f32>) -> Result<Vec<f32>> {
        self.score_with_exclusion(x, false, "decision_function_novel")
    }

    /// Labels each query point 1 (outlier) if its anomaly score is at or
    /// above the fitted threshold, else 0 (inlier).
    ///
    /// # Errors
    ///
    /// Same error conditions as [`Self::lrd`].
    pub fn predict(&self, x: &Matrix<f32>) -> Result<Vec<i32>> {
        let threshold = self
            .fitted
            .as_ref()
            .ok_or_else(|| CentinelaError::not_fitted("predict"))?
            .threshold;
        let scores = self.decision_function(x)?;
        Ok(scores.iter().map(|&s| i32::from(s >= threshold)).collect())
    }

    fn score_with_exclusion(
        &self,
        x: &Matrix<f32>,
        drop_first: bool,
        operation: &str,
    ) -> Result<Vec<f32>> {
        let fitted = self
            .fitted
            .as_ref()
            .ok_or_else(|| CentinelaError::not_fitted(operation))?;
        let k = self.n_neighbors;

        let hoods = Self::neighborhoods(&fitted.index, x, k, drop_first)?;
        let lrd_x = Self::lrd_from_neighborhoods(&hoods, &fitted.radius, k)?;

        Ok(hoods
            .iter()
            .zip(lrd_x.iter())
            .map(|((neighbors, _), &lrd_q)| {
                let neighbor_mean: f64 = neighbors
                    .iter()
                    .map(|&j| f64::from(fitted.lrd[j]))
                    .sum::<f64>()
                    / neighbors.len() as f64;
                (neighbor_mean / f64::from(lrd_q)) as f32
            })
            .collect())
    }

    /// Queries k neighbors per row of `x`, optionally requesting k + 1
    /// and dropping the closest match (self-exclusion).
    fn neighborhoods(
        index: &BruteForceIndex,
        x: &Matrix<f32>,
        k: usize,
        drop_first: bool,
    ) -> Result<Neighborhoods> {
        let requested = if drop_first { k + 1 } else { k };
        let batch = index.query_batch(x, requested)?;

        Ok(batch
            .into_iter()
            .map(|hits| {
                let skip = usize::from(drop_first);
                let neighbors: Vec<usize> = hits.iter().skip(skip).map(|&(j, _)| j).collect();
                let dists: Vec<f32> = hits.iter().skip(skip).map(|&(_, d)| d).collect();
                (neighbors, dists)
            })
            .collect())
    }

    /// lrd(p) = k / Σ max(radius(neighbor), d(p, neighbor)).
    ///
    /// A zero sum means every neighbor coincides exactly with the point;
    /// the resulting infinite density would silently corrupt every LOF
    /// ratio that references it, so it is reported as an error instead.
    fn lrd_from_neighborhoods(
        hoods: &Neighborhoods,
        radius: &[f32],
        k: usize,
    ) -> Result<Vec<f32>> {
        hoods
            .iter()
            .enumerate()
            .map(|(i, (neighbors, dists))| {
                let reach_sum: f64 = neighbors
                    .iter()
                    .zip(dists.iter())
                    .map(|(&j, &d)| f64::from(radius[j].max(d)))
                    .sum();
                if reach_sum == 0.0 {
                    return Err(CentinelaError::DegenerateDensity { index: i });
                }
                Ok((k as f64 / reach_sum) as f32)
            })
            .collect()
    }
}

impl UnsupervisedEstimator for LocalOutlierFactor {
    type Labels = Vec<i32>;

    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        LocalOutlierFactor::fit(self, x)
    }

    /// Predicts outlier labels (1 = outlier, 0 = inlier).
    ///
    /// # Panics
    ///
    /// Panics if the model has not been fitted or the query points don't
    /// match the training dimensionality. Use [`LocalOutlierFactor::predict`]
    /// for the fallible variant.
    fn predict(&self, x: &Matrix<f32>) -> Vec<i32> {
        LocalOutlierFactor::predict(self, x).expect("Model not fitted. Call fit() first.")
    }
}

#[cfg(test)]
#[path = "tests_lof_contract.rs"]
mod tests_contract;
