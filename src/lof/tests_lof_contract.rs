// =========================================================================
// FALSIFY-LF: Local Outlier Factor contract (centinela lof)
//
// References:
//   - Breunig et al. (2000) "LOF: Identifying Density-Based Local Outliers"
// =========================================================================

use super::*;
use crate::primitives::Matrix;

fn tight_blob() -> Matrix<f32> {
    Matrix::from_vec(
        8,
        2,
        vec![
            1.0, 1.0, 1.1, 1.0, 1.0, 1.1, 0.9, 0.9, 1.1, 1.1, 1.0, 0.9, 0.9, 1.1, 1.05, 0.95,
        ],
    )
    .expect("valid matrix")
}

/// FALSIFY-LF-001: LOF scores are positive and finite
#[test]
fn falsify_lf_001_scores_positive() {
    let data = tight_blob();
    let mut lof = LocalOutlierFactor::new()
        .with_n_neighbors(3)
        .with_contamination(0.1);
    lof.fit(&data).expect("fit succeeds");

    for (i, &score) in lof.decision_scores().iter().enumerate() {
        assert!(
            score > 0.0 && score.is_finite(),
            "FALSIFIED LF-001: score[{i}]={score}, expected finite > 0.0"
        );
    }
}

/// FALSIFY-LF-002: Labels are binary, 1 = outlier / 0 = inlier
#[test]
fn falsify_lf_002_labels_binary() {
    let data = tight_blob();
    let mut lof = LocalOutlierFactor::new()
        .with_n_neighbors(3)
        .with_contamination(0.1);
    lof.fit(&data).expect("fit succeeds");

    for (i, &l) in lof.labels().iter().enumerate() {
        assert!(
            l == 0 || l == 1,
            "FALSIFIED LF-002: label[{i}]={l}, expected 0 or 1"
        );
    }
}

/// FALSIFY-LF-003: Scores, labels, and training set have equal lengths
#[test]
fn falsify_lf_003_lengths_match() {
    let data = tight_blob();
    let mut lof = LocalOutlierFactor::new()
        .with_n_neighbors(3)
        .with_contamination(0.1);
    lof.fit(&data).expect("fit succeeds");

    let n = data.n_rows();
    assert_eq!(
        lof.decision_scores().len(),
        n,
        "FALSIFIED LF-003: scores length"
    );
    assert_eq!(lof.labels().len(), n, "FALSIFIED LF-003: labels length");
    let fitted = lof.fitted_model().expect("fitted");
    assert_eq!(fitted.radius().len(), n, "FALSIFIED LF-003: radius length");
    assert_eq!(fitted.lrd().len(), n, "FALSIFIED LF-003: lrd length");
}

/// FALSIFY-LF-004: label[i] == 1 exactly when score[i] >= threshold
#[test]
fn falsify_lf_004_threshold_boundary() {
    let data = tight_blob();
    let mut lof = LocalOutlierFactor::new()
        .with_n_neighbors(3)
        .with_contamination(0.25);
    lof.fit(&data).expect("fit succeeds");

    let threshold = lof.threshold();
    for (i, (&score, &label)) in lof
        .decision_scores()
        .iter()
        .zip(lof.labels().iter())
        .enumerate()
    {
        let expected = i32::from(score >= threshold);
        assert_eq!(
            label, expected,
            "FALSIFIED LF-004: label[{i}]={label}, score={score}, threshold={threshold}"
        );
    }
}

/// FALSIFY-LF-005: Threshold sits at the (1 - contamination) quantile
#[test]
fn falsify_lf_005_threshold_is_quantile() {
    let data = tight_blob();
    let contamination = 0.2_f64;
    let mut lof = LocalOutlierFactor::new()
        .with_n_neighbors(3)
        .with_contamination(contamination);
    lof.fit(&data).expect("fit succeeds");

    let expected =
        crate::stats::quantile(lof.decision_scores(), 1.0 - contamination).expect("quantile");
    assert!(
        (lof.threshold() - expected).abs() < 1e-6,
        "FALSIFIED LF-005: threshold={}, quantile={expected}",
        lof.threshold()
    );
}

/// FALSIFY-LF-006: Uniform-density interior points score near 1
#[test]
fn falsify_lf_006_uniform_density_near_one() {
    let data =
        Matrix::from_vec(20, 1, (0..20).map(|i| i as f32).collect()).expect("valid matrix");
    let mut lof = LocalOutlierFactor::new()
        .with_n_neighbors(3)
        .with_contamination(0.1);
    lof.fit(&data).expect("fit succeeds");

    for i in 4..16 {
        let score = lof.decision_scores()[i];
        assert!(
            (score - 1.0).abs() < 0.5,
            "FALSIFIED LF-006: interior point {i} scored {score}, expected ~1.0"
        );
    }
}

/// FALSIFY-LF-007: lrd values are positive and finite after fit
#[test]
fn falsify_lf_007_lrd_positive() {
    let data = tight_blob();
    let mut lof = LocalOutlierFactor::new()
        .with_n_neighbors(3)
        .with_contamination(0.1);
    lof.fit(&data).expect("fit succeeds");

    for (i, &lrd) in lof.fitted_model().expect("fitted").lrd().iter().enumerate() {
        assert!(
            lrd > 0.0 && lrd.is_finite(),
            "FALSIFIED LF-007: lrd[{i}]={lrd}, expected finite > 0.0"
        );
    }
}

/// FALSIFY-LF-008: reach-distance lower bound — lrd(p) <= k / sum(d(p, o))
/// never exceeds the plain inverse-mean-distance density
#[test]
fn falsify_lf_008_lrd_bounded_by_raw_density() {
    // reach-dist(p, o) >= d(p, o), so lrd(p) = k / sum(reach) <= k / sum(d).
    let data = tight_blob();
    let k = 3;
    let mut lof = LocalOutlierFactor::new()
        .with_n_neighbors(k)
        .with_contamination(0.1);
    lof.fit(&data).expect("fit succeeds");

    let fitted = lof.fitted_model().expect("fitted");
    for i in 0..data.n_rows() {
        let hits = fitted
            .index()
            .query(data.row_slice(i), k + 1)
            .expect("query");
        let raw_sum: f32 = hits.iter().skip(1).map(|&(_, d)| d).sum();
        if raw_sum > 0.0 {
            let raw_density = k as f32 / raw_sum;
            assert!(
                fitted.lrd()[i] <= raw_density + 1e-4,
                "FALSIFIED LF-008: lrd[{i}]={} > raw density {raw_density}",
                fitted.lrd()[i]
            );
        }
    }
}
