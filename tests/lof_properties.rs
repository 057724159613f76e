//! Property tests for the LOF engine.

use centinela::prelude::*;
use proptest::prelude::*;

/// Random 2D datasets: enough points for k = 5 neighborhoods, coordinates
/// spread over a bounded box so exact duplicates are vanishingly unlikely.
fn points_strategy() -> impl Strategy<Value = Vec<(f32, f32)>> {
    proptest::collection::vec((0.0f32..100.0, 0.0f32..100.0), 20..60)
}

fn to_matrix(points: &[(f32, f32)]) -> Matrix<f32> {
    let rows: Vec<f32> = points.iter().flat_map(|&(x, y)| [x, y]).collect();
    Matrix::from_vec(points.len(), 2, rows).expect("matrix")
}

proptest! {
    #[test]
    fn fitted_state_is_consistent(points in points_strategy()) {
        let data = to_matrix(&points);
        let mut lof = LocalOutlierFactor::new()
            .with_n_neighbors(5)
            .with_contamination(0.1);
        prop_assume!(lof.fit(&data).is_ok());

        let n = data.n_rows();
        prop_assert_eq!(lof.decision_scores().len(), n);
        prop_assert_eq!(lof.labels().len(), n);

        let threshold = lof.threshold();
        for (i, &score) in lof.decision_scores().iter().enumerate() {
            prop_assert!(score > 0.0 && score.is_finite());
            prop_assert_eq!(lof.labels()[i], i32::from(score >= threshold));
        }

        // Threshold always flags at least one point: the max score is >= it.
        let max_score = lof
            .decision_scores()
            .iter()
            .fold(f32::NEG_INFINITY, |m, &s| m.max(s));
        prop_assert!(max_score >= threshold);
    }

    #[test]
    fn contamination_is_monotone(points in points_strategy()) {
        let data = to_matrix(&points);
        let mut counts = Vec::new();
        for contamination in [0.05, 0.1, 0.2, 0.4] {
            let mut lof = LocalOutlierFactor::new()
                .with_n_neighbors(5)
                .with_contamination(contamination);
            prop_assume!(lof.fit(&data).is_ok());
            counts.push(lof.labels().iter().filter(|&&l| l == 1).count());
        }
        for pair in counts.windows(2) {
            prop_assert!(
                pair[1] >= pair[0],
                "outlier count decreased: {:?}",
                counts
            );
        }
    }

    #[test]
    fn labels_are_scale_invariant(points in points_strategy(), scale in 0.5f32..20.0) {
        let data = to_matrix(&points);
        let scaled = Matrix::from_vec(
            data.n_rows(),
            data.n_cols(),
            data.as_slice().iter().map(|v| v * scale).collect(),
        )
        .expect("matrix");

        let mut lof_a = LocalOutlierFactor::new()
            .with_n_neighbors(5)
            .with_contamination(0.1);
        let mut lof_b = lof_a.clone();
        prop_assume!(lof_a.fit(&data).is_ok());
        prop_assume!(lof_b.fit(&scaled).is_ok());

        prop_assert_eq!(lof_a.labels(), lof_b.labels());
    }

    #[test]
    fn rescoring_training_set_reproduces_fit_scores(points in points_strategy()) {
        let data = to_matrix(&points);
        let mut lof = LocalOutlierFactor::new()
            .with_n_neighbors(5)
            .with_contamination(0.1);
        prop_assume!(lof.fit(&data).is_ok());

        let rescored = lof.decision_function(&data).expect("score");
        for (a, b) in lof.decision_scores().iter().zip(rescored.iter()) {
            prop_assert!((a - b).abs() < 1e-4, "fit score {} != rescored {}", a, b);
        }
    }
}
