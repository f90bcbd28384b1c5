// symnmf-core/src/factorize.rs
//! Multiplicative-update solver for `min ‖W - H·Hᵗ‖²_F` subject to `H ≥ 0`.
//!
//! Each iteration computes
//!
//! ```text
//! WH   = W · H
//! HHtH = (H · Hᵗ) · H
//! H'   = H ∘ (0.5 + 0.5 · WH ⊘ HHtH)
//! ```
//!
//! and stops once `‖H' - H‖_F < epsilon` or after `max_iterations`.
//! Non-convergence is a normal terminal state, not an error.
//!
//! The transients (`Hᵗ`, `WH`, `HHᵗ`, `HHᵗH`) live inside [`update_step`], so
//! they are dropped on every exit path, including `?` returns.

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::{SymNmfError, SymNmfResult};
use crate::matrix::Matrix;
use crate::ops::{frobenius_norm, multiply, subtract, transpose};

pub const DEFAULT_EPSILON: f64 = 1e-4;
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// What to do when `HHᵗH[i][j]` is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZeroDenominator {
    /// Keep `H[i][j]` unchanged for this iteration.
    #[default]
    Hold,
    /// Divide anyway; NaN/∞ flow into `H` and later iterations.
    Propagate,
    /// Abort with `SymNmfError::NumericDegeneracy`.
    Fail,
}

/// Stopping rule and numeric policy of the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorizeConfig {
    /// Convergence threshold on `‖H' - H‖_F` (default: 1e-4)
    pub epsilon: f64,
    /// Iteration cap (default: 300)
    pub max_iterations: usize,
    pub zero_denominator: ZeroDenominator,
}

impl Default for FactorizeConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zero_denominator: ZeroDenominator::default(),
        }
    }
}

impl FactorizeConfig {
    pub fn validate(&self) -> SymNmfResult<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SymNmfError::InvalidParameter(format!(
                "epsilon must be finite and positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

/// Result of [`factorize`].
#[derive(Debug, Clone)]
pub struct Factorization {
    /// Final factor, `n×k`
    pub h: Matrix,
    /// Number of updates applied
    pub iterations: usize,
    pub converged: bool,
    /// `‖H' - H‖_F` of the last update (∞ when no update ran)
    pub delta: f64,
}

/// Refine `h0` (`n×k`) against the normalised matrix `w` (`n×n`).
///
/// `h0` is consumed: the solver owns the current factor and hands the final
/// one back inside [`Factorization`]. At most the current `H` and its
/// candidate are alive at any time.
pub fn factorize(h0: Matrix, w: &Matrix, config: &FactorizeConfig) -> SymNmfResult<Factorization> {
    config.validate()?;
    if !w.is_square() || w.nrows() != h0.nrows() {
        return Err(SymNmfError::DimensionMismatch {
            op: "factorize",
            left: h0.shape(),
            right: w.shape(),
        });
    }

    let (n, k) = h0.shape();
    info!(
        "Factorising {}x{} matrix with rank {} (epsilon={:e}, max_iterations={})",
        n, n, k, config.epsilon, config.max_iterations
    );
    debug!("Zero-denominator policy: {:?}", config.zero_denominator);

    let mut h = h0;
    let mut delta = f64::INFINITY;

    for iteration in 0..config.max_iterations {
        let h_new = update_step(&h, w, config.zero_denominator, iteration)?;
        delta = frobenius_norm(&subtract(&h_new, &h)?);
        trace!("iteration {}: delta={:e}", iteration, delta);

        h = h_new;
        if delta < config.epsilon {
            info!("Converged after {} iterations (delta={:e})", iteration + 1, delta);
            return Ok(Factorization {
                h,
                iterations: iteration + 1,
                converged: true,
                delta,
            });
        }
    }

    if config.max_iterations > 0 {
        warn!(
            "No convergence after {} iterations (delta={:e} >= {:e})",
            config.max_iterations, delta, config.epsilon
        );
    }
    Ok(Factorization {
        h,
        iterations: config.max_iterations,
        converged: false,
        delta,
    })
}

/// One multiplicative update `H → H'`.
pub fn update_step(
    h: &Matrix,
    w: &Matrix,
    policy: ZeroDenominator,
    iteration: usize,
) -> SymNmfResult<Matrix> {
    let ht = transpose(h)?;
    let wh = multiply(w, h)?;
    let hht = multiply(h, &ht)?;
    let hhth = multiply(&hht, h)?;

    let (n, k) = h.shape();
    let mut h_new = Matrix::zeros(n, k)?;

    for i in 0..n {
        for j in 0..k {
            let current = h.get(i, j);
            let denominator = hhth.get(i, j);
            let value = if denominator == 0.0 {
                match policy {
                    ZeroDenominator::Hold => current,
                    ZeroDenominator::Propagate => {
                        current * (0.5 + 0.5 * (wh.get(i, j) / denominator))
                    }
                    ZeroDenominator::Fail => {
                        return Err(SymNmfError::NumericDegeneracy {
                            row: i,
                            col: j,
                            iteration,
                        })
                    }
                }
            } else {
                current * (0.5 + 0.5 * (wh.get(i, j) / denominator))
            };
            h_new.set(i, j, value);
        }
    }

    Ok(h_new)
}

/// `‖W - H·Hᵗ‖_F`, the objective the update decreases.
pub fn reconstruction_error(w: &Matrix, h: &Matrix) -> SymNmfResult<f64> {
    let ht = transpose(h)?;
    let hht = multiply(h, &ht)?;
    Ok(frobenius_norm(&subtract(w, &hht)?))
}
