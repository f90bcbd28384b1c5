// symnmf-core/src/similarity.rs
//! Gaussian similarity graph over a point set.

use log::{debug, info};
use rayon::prelude::*;

use crate::distance::{gaussian_affinity, squared_euclidean_distance};
use crate::error::SymNmfResult;
use crate::matrix::Matrix;

/// Build the `n×n` similarity matrix `A` of the `n` rows of `data`.
///
/// `A[i][j] = exp(-‖xᵢ - xⱼ‖² / 2)` for `i ≠ j` and `A[i][i] = 0`. Only the
/// upper triangle is evaluated (one rayon task per row), then mirrored.
///
/// # Complexity
/// * **Time**: O(n² × d)
/// * **Space**: O(n²)
pub fn similarity(data: &Matrix) -> SymNmfResult<Matrix> {
    let (n, d) = data.shape();
    info!("Building similarity matrix for {} points with {} features", n, d);

    let mut a = Matrix::zeros(n, n)?;

    if n == 0 {
        return Ok(a);
    }

    // upper triangle, one row per task
    a.as_mut_slice()
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, row)| {
            let row_i = data.row(i);
            for (j, cell) in row.iter_mut().enumerate().skip(i + 1) {
                *cell = gaussian_affinity(squared_euclidean_distance(row_i, data.row(j)));
            }
        });

    // mirror into the lower triangle; the diagonal stays 0
    for i in 0..n {
        for j in 0..i {
            let value = a.get(j, i);
            a.set(i, j, value);
        }
    }

    debug!(
        "Similarity matrix {:?} filled ({} pairs)",
        a.shape(),
        n * (n - 1) / 2
    );
    Ok(a)
}
