// symnmf-core/src/matrix.rs
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{SymNmfError, SymNmfResult};

/// Dense row-major matrix of `f64` with a shape fixed at construction.
///
/// Storage is one contiguous buffer indexed by `row * ncols + col`; it is
/// released when the value drops. `Clone` is a deep copy, so no two matrices
/// ever share storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Zero-initialised `nrows × ncols` matrix.
    ///
    /// Fails with `AllocationFailure` if the element count overflows or the
    /// buffer cannot be reserved; nothing is left half-built.
    pub fn zeros(nrows: usize, ncols: usize) -> SymNmfResult<Self> {
        let failure = || SymNmfError::AllocationFailure {
            rows: nrows,
            cols: ncols,
        };
        let len = nrows.checked_mul(ncols).ok_or_else(failure)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| failure())?;
        data.resize(len, 0.0);

        Ok(Self { nrows, ncols, data })
    }

    pub fn identity(n: usize) -> SymNmfResult<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        Ok(m)
    }

    /// Wrap a row-major buffer; `data.len()` must equal `nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<f64>) -> SymNmfResult<Self> {
        if nrows.checked_mul(ncols) != Some(data.len()) {
            return Err(SymNmfError::MalformedInput {
                line: 0,
                reason: format!(
                    "buffer of {} values cannot hold a {}x{} matrix",
                    data.len(),
                    nrows,
                    ncols
                ),
            });
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Build from nested rows. Every row must have the length of the first
    /// one; the offending row index is reported otherwise.
    pub fn from_rows(rows: &[Vec<f64>]) -> SymNmfResult<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());

        let mut m = Self::zeros(nrows, ncols)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(SymNmfError::MalformedInput {
                    line: i + 1,
                    reason: format!("expected {} values, found {}", ncols, row.len()),
                });
            }
            m.row_mut(i).copy_from_slice(row);
        }
        Ok(m)
    }

    /// Convert a smartcore matrix (the interchange type of the clustering code).
    pub fn from_dense(dense: &DenseMatrix<f64>) -> SymNmfResult<Self> {
        let (nrows, ncols) = dense.shape();
        let mut m = Self::zeros(nrows, ncols)?;
        for i in 0..nrows {
            for j in 0..ncols {
                m.set(i, j, *dense.get((i, j)));
            }
        }
        Ok(m)
    }

    /// Row-by-row copy into a smartcore matrix; `dense.get((i, j)) == self.get(i, j)`.
    pub fn to_dense(&self) -> SymNmfResult<DenseMatrix<f64>> {
        DenseMatrix::from_2d_vec(&self.to_rows()).map_err(|e| {
            SymNmfError::InvalidParameter(format!(
                "cannot convert {}x{} matrix to DenseMatrix: {}",
                self.nrows, self.ncols, e
            ))
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows_iter().map(|r| r.to_vec()).collect()
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.nrows && col < self.ncols);
        self.data[row * self.ncols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.nrows && col < self.ncols);
        self.data[row * self.ncols + col] = value;
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.ncols..(row + 1) * self.ncols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        &mut self.data[row * self.ncols..(row + 1) * self.ncols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.nrows).map(move |i| self.row(i))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Exact symmetry check up to `tol` on every mirrored pair.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        (0..self.nrows).all(|i| {
            (i + 1..self.ncols).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol)
        })
    }
}
