// symnmf-core/src/ops.rs
//! Allocation-producing matrix kernels: multiply, transpose, difference and
//! the Frobenius norm.
//!
//! Output rows are independent, so `multiply` fills them in parallel with
//! rayon. Each cell is still accumulated in ascending inner index, so the
//! result matches the sequential triple loop bit for bit.

use log::trace;
use rayon::prelude::*;

use crate::error::{SymNmfError, SymNmfResult};
use crate::matrix::Matrix;

/// `R = M1 · M2` for `M1: r1×c1`, `M2: c1×c2`.
pub fn multiply(m1: &Matrix, m2: &Matrix) -> SymNmfResult<Matrix> {
    if m1.ncols() != m2.nrows() {
        return Err(SymNmfError::DimensionMismatch {
            op: "multiply",
            left: m1.shape(),
            right: m2.shape(),
        });
    }
    trace!("multiply {:?} x {:?}", m1.shape(), m2.shape());

    let (r1, inner) = m1.shape();
    let c2 = m2.ncols();
    let mut result = Matrix::zeros(r1, c2)?;
    if c2 == 0 {
        return Ok(result);
    }

    // i-k-j order keeps the inner loop on contiguous rows of M2
    result
        .as_mut_slice()
        .par_chunks_mut(c2)
        .enumerate()
        .for_each(|(i, out_row)| {
            let lhs = m1.row(i);
            for (k, &a) in lhs.iter().enumerate().take(inner) {
                for (out, &b) in out_row.iter_mut().zip(m2.row(k)) {
                    *out += a * b;
                }
            }
        });

    Ok(result)
}

/// `Mᵗ` for `M: r×c`.
pub fn transpose(m: &Matrix) -> SymNmfResult<Matrix> {
    let (r, c) = m.shape();
    let mut result = Matrix::zeros(c, r)?;
    for i in 0..r {
        for (j, &v) in m.row(i).iter().enumerate() {
            result.set(j, i, v);
        }
    }
    Ok(result)
}

/// Elementwise `M1 - M2`; shapes must match.
pub fn subtract(m1: &Matrix, m2: &Matrix) -> SymNmfResult<Matrix> {
    if m1.shape() != m2.shape() {
        return Err(SymNmfError::DimensionMismatch {
            op: "subtract",
            left: m1.shape(),
            right: m2.shape(),
        });
    }
    let (r, c) = m1.shape();
    let mut result = Matrix::zeros(r, c)?;
    for ((out, &a), &b) in result
        .as_mut_slice()
        .iter_mut()
        .zip(m1.as_slice())
        .zip(m2.as_slice())
    {
        *out = a - b;
    }
    Ok(result)
}

/// `sqrt(Σ M[i][j]²)`; zero only for the all-zero matrix.
pub fn frobenius_norm(m: &Matrix) -> f64 {
    m.as_slice().iter().map(|v| v * v).sum::<f64>().sqrt()
}
