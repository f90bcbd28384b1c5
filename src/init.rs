//! Random starting factor for the multiplicative update.
//!
//! Entries of `H₀` are drawn uniformly from `[0, 2·√(m/k))` where `m` is the
//! mean entry of `W`; the expected `H₀·H₀ᵗ` then has the same scale as `W`.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use symnmf_core::{Matrix, SymNmfError, SymNmfResult};

pub const DEFAULT_SEED: u64 = 0;

/// Upper bound of the uniform draw for a given `W` and rank.
pub fn init_upper_bound(w: &Matrix, k: usize) -> f64 {
    let n = w.nrows();
    if n == 0 || k == 0 {
        return 0.0;
    }
    let mean = w.as_slice().iter().sum::<f64>() / (n * n) as f64;
    2.0 * (mean / k as f64).sqrt()
}

/// Seeded `n×k` non-negative start for `W: n×n`. Requires `1 ≤ k ≤ n`.
pub fn initialize_h(w: &Matrix, k: usize, seed: u64) -> SymNmfResult<Matrix> {
    let n = w.nrows();
    if !w.is_square() {
        return Err(SymNmfError::DimensionMismatch {
            op: "initialize_h",
            left: w.shape(),
            right: w.shape(),
        });
    }
    if k == 0 || k > n {
        return Err(SymNmfError::InvalidParameter(format!(
            "rank k must satisfy 1 <= k <= n, got k={} with n={}",
            k, n
        )));
    }

    let upper = init_upper_bound(w, k);
    debug!("Initialising H0 {}x{} in [0, {:.6}) with seed {}", n, k, upper, seed);

    let mut h = Matrix::zeros(n, k)?;
    if upper.is_finite() && upper > 0.0 {
        let mut rng = StdRng::seed_from_u64(seed);
        for value in h.as_mut_slice() {
            *value = rng.random_range(0.0..upper);
        }
    }
    Ok(h)
}
