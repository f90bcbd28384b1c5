//! Comma-separated text datasets in, fixed-precision text matrices out.
//!
//! Input: one point per line, values separated by `,`. Blank lines are
//! skipped; the first non-blank line fixes the column count.
//!
//! Output: one row per line, values formatted with four decimals.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use symnmf_core::{Matrix, SymNmfError, SymNmfResult};

/// Parse a dataset held in memory.
pub fn parse_dataset(content: &str) -> SymNmfResult<Matrix> {
    let mut values: Vec<f64> = Vec::new();
    let mut ncols: Option<usize> = None;
    let mut nrows = 0usize;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut count = 0usize;
        for (col, token) in line.split(',').enumerate() {
            let token = token.trim();
            if token.is_empty() {
                return Err(SymNmfError::MalformedInput {
                    line: line_no,
                    reason: format!("missing value in column {}", col + 1),
                });
            }
            let value = token.parse::<f64>().map_err(|_| SymNmfError::MalformedInput {
                line: line_no,
                reason: format!("'{}' is not a number", token),
            })?;
            values.push(value);
            count += 1;
        }

        match ncols {
            None => ncols = Some(count),
            Some(expected) if expected != count => {
                return Err(SymNmfError::MalformedInput {
                    line: line_no,
                    reason: format!("expected {} values, found {}", expected, count),
                });
            }
            Some(_) => {}
        }
        nrows += 1;
    }

    let ncols = ncols.ok_or_else(|| SymNmfError::MalformedInput {
        line: 0,
        reason: "dataset is empty".to_string(),
    })?;

    debug!("Parsed dataset: {} rows x {} columns", nrows, ncols);
    Matrix::from_vec(nrows, ncols, values)
}

/// Read and parse a dataset file.
pub fn load_dataset(path: impl AsRef<Path>) -> SymNmfResult<Matrix> {
    let path = path.as_ref();
    info!("Loading dataset from {}", path.display());
    let content = std::fs::read_to_string(path)
        .map_err(|e| SymNmfError::Io(format!("{}: {}", path.display(), e)))?;
    parse_dataset(&content)
}

/// Render `matrix` as comma-separated rows with four decimals.
pub fn format_matrix(matrix: &Matrix) -> String {
    let mut out = String::new();
    for row in matrix.rows_iter() {
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                out.push(',');
            }
            // writing into a String cannot fail
            let _ = write!(out, "{:.4}", value);
        }
        out.push('\n');
    }
    out
}

pub fn write_matrix<W: Write>(out: &mut W, matrix: &Matrix) -> std::io::Result<()> {
    out.write_all(format_matrix(matrix).as_bytes())?;
    out.flush()
}
