//! Core traits for estimators.
//!
//! These traits define the API contracts for the algorithms in this crate.

use crate::error::Result;
use crate::primitives::Matrix;

/// Trait for unsupervised learning models.
///
/// Estimators implement fit/predict following sklearn conventions.
///
/// # Examples
///
/// ```
/// use centinela::prelude::*;
///
/// // Dense cluster plus one far outlier
/// let mut rows: Vec<f32> = Vec::new();
/// for i in 0..10 {
///     rows.push(i as f32 * 0.1);
///     rows.push(0.0);
/// }
/// rows.extend_from_slice(&[50.0, 50.0]);
/// let data = Matrix::from_vec(11, 2, rows).unwrap();
///
/// let mut lof = LocalOutlierFactor::new()
///     .with_n_neighbors(3)
///     .with_contamination(0.1);
/// UnsupervisedEstimator::fit(&mut lof, &data).unwrap();
/// let labels = UnsupervisedEstimator::predict(&lof, &data);
/// assert_eq!(labels.len(), 11);
/// ```
pub trait UnsupervisedEstimator {
    /// The type of labels produced.
    type Labels;

    /// Fits the model to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (empty data, invalid parameters, etc.).
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()>;

    /// Predicts labels for data.
    fn predict(&self, x: &Matrix<f32>) -> Self::Labels;
}
