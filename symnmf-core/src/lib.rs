//! # symnmf-core
//!
//! Dense matrix kernels and the SymNMF pipeline:
//!
//! 1. **Similarity**: Gaussian kernel `A[i][j] = exp(-‖xᵢ - xⱼ‖² / 2)` with zero diagonal
//! 2. **Degree**: diagonal `D[i][i] = Σⱼ A[i][j]`
//! 3. **Normalisation**: `W = D^(-1/2) · A · D^(-1/2)`
//! 4. **Factorisation**: multiplicative update of `H` so that `H · Hᵗ ≈ W`
//!
//! Every matrix producer returns `Result<Matrix, SymNmfError>`; storage is
//! released when the owning `Matrix` drops, so early returns never leak.

pub mod degree;
pub mod distance;
pub mod error;
pub mod factorize;
pub mod matrix;
pub mod normalize;
pub mod ops;
pub mod similarity;

pub use degree::{degree, inverse_sqrt_degree};
pub use error::{SymNmfError, SymNmfResult};
pub use factorize::{
    factorize, reconstruction_error, update_step, FactorizeConfig, Factorization,
    ZeroDenominator, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS,
};
pub use matrix::Matrix;
pub use normalize::{normalize, normalize_similarity};
pub use ops::{frobenius_norm, multiply, subtract, transpose};
pub use similarity::similarity;

#[cfg(test)]
mod tests;

#[cfg(test)]
pub(crate) fn init() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("debug");

        let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
    });
}
