//! Error types for centinela operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for centinela operations.
///
/// Covers the failure modes of the LOF pipeline: scoring before `fit`,
/// invalid hyperparameters, query/training dimension mismatches, degenerate
/// neighborhoods, and neighbor-index construction failures.
///
/// # Examples
///
/// ```
/// use centinela::error::CentinelaError;
///
/// let err = CentinelaError::InvalidHyperparameter {
///     param: "contamination".to_string(),
///     value: "1.5".to_string(),
///     constraint: "in (0, 1)".to_string(),
/// };
/// assert!(err.to_string().contains("contamination"));
/// ```
#[derive(Debug)]
pub enum CentinelaError {
    /// A scoring operation was invoked before a successful `fit`.
    NotFitted {
        /// Operation that was attempted (e.g. "decision_function")
        operation: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Query points don't match the training set dimensionality.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A point's k reach-distances sum to exactly zero (all neighbors
    /// coincide with the point), making its local reachability density
    /// undefined.
    DegenerateDensity {
        /// Index of the offending query/training point
        index: usize,
    },

    /// The neighbor index could not be built.
    IndexBuild {
        /// Failure description
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for CentinelaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CentinelaError::NotFitted { operation } => {
                write!(f, "Model not fitted: call fit() before {operation}()")
            }
            CentinelaError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            CentinelaError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            CentinelaError::DegenerateDensity { index } => {
                write!(
                    f,
                    "Degenerate density at point {index}: all k neighbors coincide \
                     with the point (reach-distance sum is zero)"
                )
            }
            CentinelaError::IndexBuild { message } => {
                write!(f, "Neighbor index build failed: {message}")
            }
            CentinelaError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CentinelaError {}

impl From<&str> for CentinelaError {
    fn from(msg: &str) -> Self {
        CentinelaError::Other(msg.to_string())
    }
}

impl From<String> for CentinelaError {
    fn from(msg: String) -> Self {
        CentinelaError::Other(msg)
    }
}

impl CentinelaError {
    /// Create a not-fitted error naming the attempted operation.
    #[must_use]
    pub fn not_fitted(operation: &str) -> Self {
        Self::NotFitted {
            operation: operation.to_string(),
        }
    }

    /// Create a dimension mismatch error from expected/actual widths.
    #[must_use]
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{expected} features"),
            actual: format!("{actual} features"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, CentinelaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_fitted_display() {
        let err = CentinelaError::not_fitted("predict");
        let msg = err.to_string();
        assert!(msg.contains("not fitted"));
        assert!(msg.contains("predict"));
    }

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = CentinelaError::InvalidHyperparameter {
            param: "n_neighbors".to_string(),
            value: "0".to_string(),
            constraint: ">= 1".to_string(),
        };
        assert!(err.to_string().contains("Invalid hyperparameter"));
        assert!(err.to_string().contains("n_neighbors"));
        assert!(err.to_string().contains(">= 1"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = CentinelaError::dimension_mismatch(3, 2);
        let msg = err.to_string();
        assert!(msg.contains("Dimension mismatch"));
        assert!(msg.contains("3 features"));
        assert!(msg.contains("2 features"));
    }

    #[test]
    fn test_degenerate_density_display() {
        let err = CentinelaError::DegenerateDensity { index: 7 };
        let msg = err.to_string();
        assert!(msg.contains("Degenerate density"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_index_build_display() {
        let err = CentinelaError::IndexBuild {
            message: "empty training set".to_string(),
        };
        assert!(err.to_string().contains("index build failed"));
        assert!(err.to_string().contains("empty training set"));
    }

    #[test]
    fn test_from_str() {
        let err: CentinelaError = "test error".into();
        assert!(matches!(err, CentinelaError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: CentinelaError = "test error".to_string().into();
        assert!(matches!(err, CentinelaError::Other(_)));
    }

    #[test]
    fn test_error_debug_impl() {
        let err = CentinelaError::Other("test".to_string());
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("Other"));
    }

    #[test]
    fn test_error_source_none() {
        use std::error::Error;
        let err = CentinelaError::not_fitted("lrd");
        assert!(err.source().is_none());
    }
}
