//! Descriptive statistics used by the decision-threshold logic.

use crate::error::{CentinelaError, Result};

/// Compute a quantile using linear interpolation (R-7 method).
///
/// Uses the method from Hyndman & Fan (1996) commonly used in statistical
/// packages (R, NumPy, Pandas), so thresholds are deterministic and match
/// `numpy.percentile` defaults. Uses `select_nth_unstable_by` for O(n)
/// average-case performance instead of a full sort.
///
/// # Arguments
/// * `data` - Sample values (must be non-empty, NaN-free)
/// * `q` - Quantile value in [0, 1]
///
/// # Errors
///
/// Returns an error if `data` is empty or `q` is outside [0, 1].
///
/// # Examples
///
/// ```
/// use centinela::stats::quantile;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(quantile(&data, 0.5).unwrap(), 3.0);
/// assert_eq!(quantile(&data, 0.0).unwrap(), 1.0);
/// assert_eq!(quantile(&data, 1.0).unwrap(), 5.0);
/// ```
pub fn quantile(data: &[f32], q: f64) -> Result<f32> {
    if data.is_empty() {
        return Err(CentinelaError::Other(
            "cannot compute quantile of empty data".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(CentinelaError::InvalidHyperparameter {
            param: "q".to_string(),
            value: format!("{q}"),
            constraint: "in [0, 1]".to_string(),
        });
    }

    let n = data.len();
    if n == 1 {
        return Ok(data[0]);
    }

    // R-7: h = (n - 1) * q, interpolate between floor(h) and ceil(h).
    let h = (n - 1) as f64 * q;
    let h_floor = h.floor() as usize;
    let h_ceil = h.ceil() as usize;

    let mut working = data.to_vec();

    if h_floor == h_ceil {
        working.select_nth_unstable_by(h_floor, |a, b| {
            a.partial_cmp(b)
                .expect("f32 values should be comparable (not NaN)")
        });
        return Ok(working[h_floor]);
    }

    working.select_nth_unstable_by(h_floor, |a, b| {
        a.partial_cmp(b)
            .expect("f32 values should be comparable (not NaN)")
    });
    let lower = working[h_floor];

    working.select_nth_unstable_by(h_ceil, |a, b| {
        a.partial_cmp(b)
            .expect("f32 values should be comparable (not NaN)")
    });
    let upper = working[h_ceil];

    let fraction = h - h_floor as f64;
    Ok(lower + (fraction as f32) * (upper - lower))
}
