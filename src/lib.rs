//! # SymNMF
//!
//! Symmetric non-negative matrix factorisation for graph clustering.
//!
//! The numerical core lives in `symnmf-core` and is re-exported here; this
//! crate adds the pipeline builder, the random start, cluster assignment and
//! scoring, text I/O and the nested-list bindings used by host languages.
//!
//! ```ignore
//! use symnmf::{SymNmfBuilder, storage::load_dataset};
//!
//! let data = load_dataset("points.txt")?;
//! let output = SymNmfBuilder::new().with_rank(3).build(&data)?;
//! println!("{:?}", output.assignments);
//! ```

pub mod bindings;
pub mod builder;
pub mod clustering;
pub mod goal;
pub mod init;
pub mod storage;

pub use builder::{ClusterComparison, SymNmfBuilder, SymNmfOutput};
pub use goal::Goal;
pub use symnmf_core::{
    degree, factorize, frobenius_norm, multiply, normalize, reconstruction_error, similarity,
    transpose, FactorizeConfig, Factorization, Matrix, SymNmfError, SymNmfResult,
    ZeroDenominator, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS,
};

#[cfg(test)]
mod tests;
