//! Nested-list boundary for host languages.
//!
//! Hosts hand over `Vec<Vec<f64>>` and get `Vec<Vec<f64>>` back. Epsilon and
//! the iteration cap are fixed to the algorithm defaults here; callers that
//! need to tune them use [`crate::SymNmfBuilder`] or
//! [`symnmf_core::factorize`] directly.

use log::debug;

use symnmf_core::{
    degree, factorize, normalize, similarity, FactorizeConfig, Matrix, SymNmfError, SymNmfResult,
};

fn checked_matrix(rows: &[Vec<f64>], nrows: usize, ncols: usize, name: &str) -> SymNmfResult<Matrix> {
    let m = Matrix::from_rows(rows)?;
    if m.nrows() != nrows || (nrows > 0 && m.ncols() != ncols) {
        return Err(SymNmfError::MalformedInput {
            line: 0,
            reason: format!(
                "{} is {}x{}, expected {}x{}",
                name,
                m.nrows(),
                m.ncols(),
                nrows,
                ncols
            ),
        });
    }
    Ok(m)
}

/// Similarity matrix of the points in `x`.
pub fn sym(x: &[Vec<f64>]) -> SymNmfResult<Vec<Vec<f64>>> {
    let data = Matrix::from_rows(x)?;
    Ok(similarity(&data)?.to_rows())
}

/// Diagonal degree matrix of the points in `x`.
pub fn ddg(x: &[Vec<f64>]) -> SymNmfResult<Vec<Vec<f64>>> {
    let data = Matrix::from_rows(x)?;
    let a = similarity(&data)?;
    Ok(degree(&a)?.to_rows())
}

/// Normalised similarity matrix of the points in `x`.
pub fn norm(x: &[Vec<f64>]) -> SymNmfResult<Vec<Vec<f64>>> {
    let data = Matrix::from_rows(x)?;
    Ok(normalize(&data)?.to_rows())
}

/// Factorise `w` (`n×n`) starting from `h0` (`n×k`) with default settings.
pub fn symnmf(h0: &[Vec<f64>], w: &[Vec<f64>], n: usize, k: usize) -> SymNmfResult<Vec<Vec<f64>>> {
    let h0 = checked_matrix(h0, n, k, "H0")?;
    let w = checked_matrix(w, n, n, "W")?;
    debug!("Binding call: symnmf n={}, k={}", n, k);

    let result = factorize(h0, &w, &FactorizeConfig::default())?;
    Ok(result.h.to_rows())
}
