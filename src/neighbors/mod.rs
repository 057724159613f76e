//! Nearest-neighbor search over a fixed training set.
//!
//! The LOF engine only needs one capability from this module: given a
//! query point and k, return the k nearest training points and their
//! distances under one configured metric. [`BruteForceIndex`] provides
//! that capability with an exhaustive O(n) scan per query.

mod brute_force;

pub use brute_force::BruteForceIndex;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance metric used by the neighbor index.
///
/// All metrics are symmetric and non-negative. The metric is fixed for
/// the lifetime of a built index.
///
/// # Examples
///
/// ```
/// use centinela::neighbors::Metric;
///
/// let m: Metric = "euclidean".parse().unwrap();
/// assert_eq!(m, Metric::Euclidean);
/// assert!((m.distance(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Metric {
    /// Euclidean (L2) distance.
    #[default]
    Euclidean,
    /// Manhattan (L1) distance.
    Manhattan,
}

impl Metric {
    /// Computes the distance between two points.
    ///
    /// # Panics
    ///
    /// Panics if the slices have different lengths.
    #[must_use]
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        assert_eq!(a.len(), b.len(), "Point dimensions must match");
        match self {
            Metric::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f32>()
                .sqrt(),
            Metric::Manhattan => a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Euclidean => write!(f, "euclidean"),
            Metric::Manhattan => write!(f, "manhattan"),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" | "l2" => Ok(Metric::Euclidean),
            "manhattan" | "l1" | "cityblock" => Ok(Metric::Manhattan),
            other => Err(format!("unknown metric: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        let m = Metric::Euclidean;
        assert!((m.distance(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-6);
        assert_eq!(m.distance(&[1.0, 1.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_manhattan_distance() {
        let m = Metric::Manhattan;
        assert!((m.distance(&[0.0, 0.0], &[3.0, 4.0]) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_symmetry() {
        for m in [Metric::Euclidean, Metric::Manhattan] {
            let a = [1.0, -2.0, 3.5];
            let b = [-4.0, 0.5, 2.0];
            assert!((m.distance(&a, &b) - m.distance(&b, &a)).abs() < 1e-6);
            assert!(m.distance(&a, &b) >= 0.0);
        }
    }

    #[test]
    #[should_panic(expected = "Point dimensions must match")]
    fn test_distance_dimension_panic() {
        let _ = Metric::Euclidean.distance(&[1.0], &[1.0, 2.0]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("euclidean".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert_eq!("L2".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert_eq!("manhattan".parse::<Metric>().unwrap(), Metric::Manhattan);
        assert!("cosine".parse::<Metric>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for m in [Metric::Euclidean, Metric::Manhattan] {
            let parsed: Metric = m.to_string().parse().unwrap();
            assert_eq!(parsed, m);
        }
    }

    #[test]
    fn test_default_is_euclidean() {
        assert_eq!(Metric::default(), Metric::Euclidean);
    }
}
