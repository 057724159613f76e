//! Synthetic data generation for demos and tests.

use crate::error::{CentinelaError, Result};
use crate::primitives::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates isotropic Gaussian clusters ("blobs").
///
/// Samples are assigned to centers round-robin, so each cluster receives
/// an equal share (the first `n_samples % centers` clusters get one
/// extra). Seeded for reproducibility.
///
/// # Arguments
///
/// * `n_samples` - Total number of points
/// * `centers` - Cluster centers, all with the same dimensionality
/// * `cluster_std` - Per-cluster standard deviation (one per center)
/// * `seed` - RNG seed
///
/// # Errors
///
/// Returns an error if `centers` is empty, the center dimensionalities
/// disagree, or `cluster_std` length doesn't match `centers`.
///
/// # Examples
///
/// ```
/// use centinela::synthetic::make_blobs;
///
/// let data = make_blobs(
///     90,
///     &[vec![1.0, 1.0], vec![5.0, 2.0], vec![3.0, 10.0]],
///     &[0.25, 0.25, 0.3],
///     42,
/// )
/// .unwrap();
/// assert_eq!(data.shape(), (90, 2));
/// ```
pub fn make_blobs(
    n_samples: usize,
    centers: &[Vec<f32>],
    cluster_std: &[f32],
    seed: u64,
) -> Result<Matrix<f32>> {
    if centers.is_empty() {
        return Err(CentinelaError::Other(
            "make_blobs requires at least one center".to_string(),
        ));
    }
    let dim = centers[0].len();
    if centers.iter().any(|c| c.len() != dim) {
        return Err(CentinelaError::DimensionMismatch {
            expected: format!("{dim} features"),
            actual: "centers with mixed dimensionality".to_string(),
        });
    }
    if cluster_std.len() != centers.len() {
        return Err(CentinelaError::Other(format!(
            "expected {} cluster_std values, got {}",
            centers.len(),
            cluster_std.len()
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(n_samples * dim);

    for i in 0..n_samples {
        let c = i % centers.len();
        for j in 0..dim {
            data.push(centers[c][j] + cluster_std[c] * sample_standard_normal(&mut rng));
        }
    }

    Matrix::from_vec(n_samples, dim, data).map_err(CentinelaError::from)
}

/// Standard normal sample via the Box-Muller transform.
fn sample_standard_normal(rng: &mut StdRng) -> f32 {
    let u1: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);
    ((-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()) as f32
}
