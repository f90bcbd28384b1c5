//! Turning the soft factor `H` into clusters, and scoring clusterings.
//!
//! This module provides:
//! - `assign_clusters`: hard labels from `H` (row-wise argmax)
//! - `kmeans_lloyd`: k-means baseline through smartcore, seeded
//! - `silhouette_score`: mean silhouette coefficient with Euclidean distance
//!
//! The silhouette score is what the analysis binary uses to compare SymNMF
//! labels against the k-means baseline on the same data.

use std::collections::BTreeMap;

use log::{debug, info};
use rayon::prelude::*;
use smartcore::cluster::kmeans::{KMeans, KMeansParameters};
use smartcore::linalg::basic::matrix::DenseMatrix;

use symnmf_core::distance::euclidean_distance;
use symnmf_core::{Matrix, SymNmfError, SymNmfResult};

/// Label of each row of `h`: the column holding its largest value.
///
/// Ties resolve to the lowest column; NaN entries never win.
pub fn assign_clusters(h: &Matrix) -> Vec<usize> {
    h.rows_iter()
        .map(|row| {
            let mut best = 0;
            let mut best_value = f64::NEG_INFINITY;
            for (j, &v) in row.iter().enumerate() {
                if v > best_value {
                    best_value = v;
                    best = j;
                }
            }
            best
        })
        .collect()
}

/// Seeded k-means over the rows of `data`; returns one label per row.
pub fn kmeans_lloyd(data: &Matrix, k: usize, max_iter: usize, seed: u64) -> SymNmfResult<Vec<usize>> {
    let n = data.nrows();
    if n == 0 {
        return Ok(Vec::new());
    }
    if k == 0 {
        return Err(SymNmfError::InvalidParameter(
            "k-means needs at least one cluster".to_string(),
        ));
    }
    let k = k.min(n);
    debug!("k-means baseline: n={}, k={}, max_iter={}", n, k, max_iter);

    let x: DenseMatrix<f64> = data.to_dense()?;

    let params = KMeansParameters {
        k,
        max_iter,
        seed: Some(seed),
    };

    let km: KMeans<f64, usize, DenseMatrix<f64>, Vec<usize>> =
        KMeans::fit(&x, params).map_err(|e| SymNmfError::Clustering(e.to_string()))?;

    km.predict(&x)
        .map_err(|e| SymNmfError::Clustering(e.to_string()))
}

/// Mean silhouette coefficient of `labels` over the rows of `data`.
///
/// For point `i` with `a` its mean distance to its own cluster and `b` the
/// lowest mean distance to another cluster, `s(i) = (b - a) / max(a, b)`.
/// Points alone in their cluster score 0. Needs between 2 and `n - 1`
/// distinct labels.
pub fn silhouette_score(data: &Matrix, labels: &[usize]) -> SymNmfResult<f64> {
    let n = data.nrows();
    if labels.len() != n {
        return Err(SymNmfError::InvalidParameter(format!(
            "expected {} labels, got {}",
            n,
            labels.len()
        )));
    }

    // compact label ids
    let mut sizes: BTreeMap<usize, usize> = BTreeMap::new();
    for &l in labels {
        *sizes.entry(l).or_insert(0) += 1;
    }
    let n_labels = sizes.len();
    if n_labels < 2 || n_labels > n - 1 {
        return Err(SymNmfError::InvalidParameter(format!(
            "silhouette needs 2 <= labels <= n - 1, got {} labels for {} points",
            n_labels, n
        )));
    }
    let index: BTreeMap<usize, usize> = sizes.keys().enumerate().map(|(i, &l)| (l, i)).collect();
    let counts: Vec<usize> = sizes.values().copied().collect();
    let compact: Vec<usize> = labels.iter().map(|l| index[l]).collect();

    let total: f64 = (0..n)
        .into_par_iter()
        .map(|i| {
            let own = compact[i];
            if counts[own] == 1 {
                return 0.0;
            }

            let mut sums = vec![0.0; n_labels];
            for j in 0..n {
                if j != i {
                    sums[compact[j]] += euclidean_distance(data.row(i), data.row(j));
                }
            }

            let a = sums[own] / (counts[own] - 1) as f64;
            let b = (0..n_labels)
                .filter(|&c| c != own)
                .map(|c| sums[c] / counts[c] as f64)
                .fold(f64::INFINITY, f64::min);

            let denom = a.max(b);
            if denom > 0.0 {
                (b - a) / denom
            } else {
                0.0
            }
        })
        .sum();

    let score = total / n as f64;
    info!("Silhouette score over {} points, {} clusters: {:.4}", n, n_labels, score);
    Ok(score)
}
