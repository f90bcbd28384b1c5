// symnmf-core/src/normalize.rs
//! Symmetric degree normalisation `W = D^(-1/2) · A · D^(-1/2)`.

use log::{debug, info};

use crate::degree::{degree, inverse_sqrt_degree};
use crate::error::SymNmfResult;
use crate::matrix::Matrix;
use crate::ops::multiply;
use crate::similarity::similarity;

/// Normalised similarity matrix `W` of the rows of `data`.
///
/// Runs similarity → degree → `D^(-1/2)` → `(D^(-1/2) · A) · D^(-1/2)`.
/// Intermediates (A, D and the first product) drop before returning; any
/// failing step releases everything already built in this frame.
pub fn normalize(data: &Matrix) -> SymNmfResult<Matrix> {
    info!("Normalising similarity graph for {} points", data.nrows());
    let a = similarity(data)?;
    normalize_similarity(&a)
}

/// Same as [`normalize`] for a caller that already owns the similarity matrix.
pub fn normalize_similarity(similarity: &Matrix) -> SymNmfResult<Matrix> {
    let d = degree(similarity)?;
    let (d_inv_sqrt, zero_degree) = inverse_sqrt_degree(&d)?;
    drop(d);

    let left = multiply(&d_inv_sqrt, similarity)?;
    let w = multiply(&left, &d_inv_sqrt)?;

    debug!(
        "Normalised matrix {:?} built ({} degenerate vertices)",
        w.shape(),
        zero_degree
    );
    Ok(w)
}
