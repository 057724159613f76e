//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use centinela::prelude::*;
//! ```

pub use crate::error::{CentinelaError, Result};
pub use crate::lof::{FittedLof, LocalOutlierFactor};
pub use crate::neighbors::{BruteForceIndex, Metric};
pub use crate::primitives::{Matrix, Vector};
pub use crate::traits::UnsupervisedEstimator;
