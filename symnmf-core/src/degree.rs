// symnmf-core/src/degree.rs
//! Weighted degree of every vertex in the similarity graph.

use log::{debug, warn};

use crate::error::{SymNmfError, SymNmfResult};
use crate::matrix::Matrix;

/// Diagonal degree matrix: `D[i][i] = Σⱼ A[i][j]`, every other entry 0.
pub fn degree(similarity: &Matrix) -> SymNmfResult<Matrix> {
    if !similarity.is_square() {
        return Err(SymNmfError::DimensionMismatch {
            op: "degree",
            left: similarity.shape(),
            right: similarity.shape(),
        });
    }
    let n = similarity.nrows();
    let mut d = Matrix::zeros(n, n)?;
    for i in 0..n {
        let sum: f64 = similarity.row(i).iter().sum();
        d.set(i, i, sum);
    }
    debug!("Degree matrix {}x{} computed", n, n);
    Ok(d)
}

/// `D^(-1/2)` of a diagonal degree matrix, plus the number of zero-degree
/// vertices.
///
/// A vertex with zero total similarity gets 0 instead of an infinite inverse
/// square root, which zeroes its row and column in the normalised matrix.
pub fn inverse_sqrt_degree(degree: &Matrix) -> SymNmfResult<(Matrix, usize)> {
    if !degree.is_square() {
        return Err(SymNmfError::DimensionMismatch {
            op: "inverse_sqrt_degree",
            left: degree.shape(),
            right: degree.shape(),
        });
    }
    let n = degree.nrows();
    let mut inv = Matrix::zeros(n, n)?;
    let mut zero_degree = 0usize;

    for i in 0..n {
        let value = degree.get(i, i);
        if value == 0.0 {
            zero_degree += 1;
        } else {
            inv.set(i, i, value.powf(-0.5));
        }
    }

    if zero_degree > 0 {
        warn!(
            "{} zero-degree vertices: inverse square root set to 0",
            zero_degree
        );
    }
    Ok((inv, zero_degree))
}
