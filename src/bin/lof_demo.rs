//! Local Outlier Factor (LOF) anomaly detection demo.
//!
//! Builds three Gaussian clusters plus a handful of planted outliers,
//! fits the detector, and prints scores, threshold, and labels.
//!
//! Run with:
//! ```bash
//! cargo run --bin lof_demo
//! ```

use centinela::prelude::*;
use centinela::synthetic::make_blobs;

fn main() -> Result<()> {
    println!("=== Local Outlier Factor (LOF) Anomaly Detection ===\n");

    // Three inlier clusters, mirrored from the classic blob demo.
    let n_inliers = 1500;
    let inliers = make_blobs(
        n_inliers,
        &[vec![1.0, 1.0], vec![5.0, 2.0], vec![3.0, 10.0]],
        &[0.25, 0.25, 0.3],
        42,
    )?;

    // Planted outliers scattered between and around the clusters.
    let outliers: Vec<Vec<f32>> = vec![
        vec![2.2, 1.0],
        vec![1.5, 2.5],
        vec![5.0, 4.0],
        vec![0.5, 5.8],
        vec![5.0, 10.0],
        vec![2.0, 7.8],
        vec![3.0, 6.0],
        vec![3.1, 5.9],
        vec![2.9, 6.1],
        vec![3.0, 6.3],
        vec![3.1, 6.1],
    ];
    let n_outliers = outliers.len();

    let mut rows: Vec<f32> = inliers.as_slice().to_vec();
    rows.extend(outliers.iter().flatten());
    let data = Matrix::from_vec(n_inliers + n_outliers, 2, rows)
        .map_err(CentinelaError::from)?;

    println!(
        "Dataset: {} inliers + {} planted outliers, {} features",
        n_inliers,
        n_outliers,
        data.n_cols()
    );

    let contamination = n_outliers as f64 / data.n_rows() as f64;
    let mut lof = LocalOutlierFactor::new()
        .with_n_neighbors(20)
        .with_contamination(contamination)
        .with_n_jobs(0);
    lof.fit(&data)?;

    println!("\nFitted model:");
    println!("  n_neighbors   = {}", lof.n_neighbors());
    println!("  metric        = {}", lof.metric());
    println!("  contamination = {contamination:.4}");
    println!("  threshold     = {:.4}", lof.threshold());

    let scores = lof.decision_scores();
    let labels = lof.labels();
    let mean_inlier_score = Vector::from_slice(&scores[..n_inliers]).mean();
    println!("  mean inlier LOF = {mean_inlier_score:.4}");

    println!("\nScore interpretation:");
    println!("  LOF ~ 1: density similar to neighbors (inlier)");
    println!("  LOF >> 1: lower density than neighbors (outlier)\n");

    println!("Planted outliers:");
    for (offset, point) in outliers.iter().enumerate() {
        let i = n_inliers + offset;
        let verdict = if labels[i] == 1 { "OUTLIER" } else { "inlier" };
        println!(
            "  ({:>4.1}, {:>4.1})  score = {:>7.3}  -> {verdict}",
            point[0], point[1], scores[i]
        );
    }

    let flagged = labels.iter().filter(|&&l| l == 1).count();
    let caught = labels[n_inliers..].iter().filter(|&&l| l == 1).count();
    println!(
        "\nFlagged {flagged} of {} points as outliers ({caught}/{n_outliers} planted ones caught)",
        data.n_rows()
    );

    // Score a grid of novel probe points against the fitted model.
    let probes = Matrix::from_vec(3, 2, vec![3.0, 1.5, 3.0, 6.0, -4.0, -4.0])
        .map_err(CentinelaError::from)?;
    let probe_scores = lof.decision_function_novel(&probes)?;
    let probe_labels = lof.predict(&probes)?;

    println!("\nNovel probe points:");
    for i in 0..probes.n_rows() {
        println!(
            "  ({:>5.1}, {:>5.1})  score = {:>8.3}  label = {}",
            probes.get(i, 0),
            probes.get(i, 1),
            probe_scores[i],
            probe_labels[i]
        );
    }

    Ok(())
}
