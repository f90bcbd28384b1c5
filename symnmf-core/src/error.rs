//! Error types shared by the matrix kernels, the pipeline stages and the
//! outer surfaces (loader, command line, bindings).

use thiserror::Error;

/// Failures surfaced by SymNMF operations.
///
/// Zero-degree vertices are not an error: they are handled by the normaliser
/// (inverse square root defined as 0) and only logged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymNmfError {
    /// A matrix buffer could not be reserved, or `rows * cols` overflowed.
    #[error("allocation failed for a {rows}x{cols} matrix")]
    AllocationFailure { rows: usize, cols: usize },

    /// Operand shapes do not satisfy the operation's contract.
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Input data could not be turned into a well-formed matrix.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// The dataset file could not be read.
    #[error("IO error: {0}")]
    Io(String),

    /// Zero denominator in the multiplicative update under `ZeroDenominator::Fail`.
    #[error("zero denominator at ({row}, {col}) in iteration {iteration}")]
    NumericDegeneracy {
        row: usize,
        col: usize,
        iteration: usize,
    },

    /// A tunable is outside its accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unknown goal selector.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The k-means baseline failed.
    #[error("clustering error: {0}")]
    Clustering(String),
}

impl From<std::io::Error> for SymNmfError {
    fn from(e: std::io::Error) -> Self {
        SymNmfError::Io(e.to_string())
    }
}

pub type SymNmfResult<T> = Result<T, SymNmfError>;
