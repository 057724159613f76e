//! Centinela: density-based anomaly detection with the Local Outlier Factor.
//!
//! Centinela scores each point of a dataset by comparing its local density
//! to the densities of its nearest neighbors (Breunig et al. 2000), then
//! fits a contamination-derived threshold that splits points into inliers
//! and outliers.
//!
//! # Quick Start
//!
//! ```
//! use centinela::prelude::*;
//!
//! // Tight cluster with one planted outlier
//! let mut rows: Vec<f32> = Vec::new();
//! for i in 0..20 {
//!     rows.push(i as f32 * 0.1);
//!     rows.push(0.0);
//! }
//! rows.extend_from_slice(&[50.0, 50.0]);
//! let data = Matrix::from_vec(21, 2, rows).unwrap();
//!
//! let mut lof = LocalOutlierFactor::new()
//!     .with_n_neighbors(5)
//!     .with_contamination(0.05);
//! lof.fit(&data).unwrap();
//!
//! assert_eq!(lof.labels()[20], 1); // planted outlier detected
//! let scores = lof.decision_function(&data).unwrap();
//! assert_eq!(scores.len(), 21);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`neighbors`]: Nearest-neighbor index and distance metrics
//! - [`lof`]: The Local Outlier Factor engine
//! - [`stats`]: Quantile helpers for the decision threshold
//! - [`synthetic`]: Seeded Gaussian blob generation for demos and tests
//! - [`traits`]: Estimator API contracts
//! - [`error`]: Error types

pub mod error;
pub mod lof;
pub mod neighbors;
pub mod prelude;
pub mod primitives;
pub mod stats;
pub mod synthetic;
pub mod traits;

pub use error::{CentinelaError, Result};
pub use lof::{FittedLof, LocalOutlierFactor};
pub use neighbors::{BruteForceIndex, Metric};
pub use primitives::{Matrix, Vector};
pub use traits::UnsupervisedEstimator;
