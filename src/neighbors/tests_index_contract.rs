// =========================================================================
// FALSIFY-NI: Neighbor index contract (centinela neighbors)
//
// References:
//   - Breunig et al. (2000) "LOF: Identifying Density-Based Local Outliers"
//     (section 4: LOF requires exact k-NN sets with stable ordering)
// =========================================================================

use super::*;
use crate::primitives::Matrix;

fn grid() -> Matrix<f32> {
    Matrix::from_vec(
        6,
        2,
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 5.0, 5.0, 6.0, 5.0],
    )
    .expect("valid matrix")
}

/// FALSIFY-NI-001: Query results are sorted ascending by distance
#[test]
fn falsify_ni_001_ascending_order() {
    let index = BruteForceIndex::build(&grid(), Metric::Euclidean, 1).expect("build");
    let hits = index.query(&[0.4, 0.4], 6).expect("query");

    for (w, pair) in hits.windows(2).enumerate() {
        assert!(
            pair[0].1 <= pair[1].1,
            "FALSIFIED NI-001: hits[{w}].dist={} > hits[{}].dist={}",
            pair[0].1,
            w + 1,
            pair[1].1
        );
    }
}

/// FALSIFY-NI-002: Distances are non-negative and zero only for exact matches
#[test]
fn falsify_ni_002_distances_nonneg() {
    let index = BruteForceIndex::build(&grid(), Metric::Euclidean, 1).expect("build");
    let hits = index.query(&[1.0, 1.0], 6).expect("query");

    for &(j, d) in &hits {
        assert!(d >= 0.0, "FALSIFIED NI-002: dist[{j}]={d}, expected >= 0");
    }
    assert_eq!(hits[0].0, 3, "FALSIFIED NI-002: exact match not first");
    assert_eq!(hits[0].1, 0.0, "FALSIFIED NI-002: exact match dist nonzero");
}

/// FALSIFY-NI-003: Result length is min(k, index size)
#[test]
fn falsify_ni_003_result_length() {
    let index = BruteForceIndex::build(&grid(), Metric::Euclidean, 1).expect("build");

    for k in [1, 3, 6, 9] {
        let hits = index.query(&[0.0, 0.0], k).expect("query");
        assert_eq!(
            hits.len(),
            k.min(6),
            "FALSIFIED NI-003: k={k} returned {} hits",
            hits.len()
        );
    }
}

/// FALSIFY-NI-004: Returned indices refer back into the training set
#[test]
fn falsify_ni_004_indices_in_range() {
    let index = BruteForceIndex::build(&grid(), Metric::Euclidean, 1).expect("build");
    let hits = index.query(&[2.0, 2.0], 6).expect("query");

    for &(j, d) in &hits {
        assert!(j < 6, "FALSIFIED NI-004: index {j} out of range");
        let expected = Metric::Euclidean.distance(&[2.0, 2.0], index.data().row_slice(j));
        assert!(
            (d - expected).abs() < 1e-6,
            "FALSIFIED NI-004: stored dist {d} != recomputed {expected}"
        );
    }
}

/// FALSIFY-NI-005: Batch queries preserve input order and match single queries
#[test]
fn falsify_ni_005_batch_order() {
    let x = grid();
    let index = BruteForceIndex::build(&x, Metric::Euclidean, 0).expect("build");
    let batch = index.query_batch(&x, 3).expect("batch");

    assert_eq!(batch.len(), 6, "FALSIFIED NI-005: batch length");
    for i in 0..6 {
        let single = index.query(x.row_slice(i), 3).expect("query");
        assert_eq!(
            batch[i], single,
            "FALSIFIED NI-005: batch[{i}] differs from single query"
        );
    }
}

/// FALSIFY-NI-006: Metric choice is honored
#[test]
fn falsify_ni_006_metric_honored() {
    let x = Matrix::from_vec(2, 2, vec![0.0, 0.0, 3.0, 4.0]).expect("valid matrix");
    let l2 = BruteForceIndex::build(&x, Metric::Euclidean, 1).expect("build");
    let l1 = BruteForceIndex::build(&x, Metric::Manhattan, 1).expect("build");

    let d2 = l2.query(&[0.0, 0.0], 2).expect("query")[1].1;
    let d1 = l1.query(&[0.0, 0.0], 2).expect("query")[1].1;

    assert!((d2 - 5.0).abs() < 1e-6, "FALSIFIED NI-006: L2 dist {d2}");
    assert!((d1 - 7.0).abs() < 1e-6, "FALSIFIED NI-006: L1 dist {d1}");
}
