//! Goal selector shared by the command line and the bindings.

use std::fmt;
use std::str::FromStr;

use log::info;

use symnmf_core::{degree, normalize, similarity, Matrix, SymNmfError, SymNmfResult};

use crate::builder::SymNmfBuilder;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Goal {
    /// Similarity matrix `A`
    Sym,
    /// Diagonal degree matrix `D`
    Ddg,
    /// Normalised similarity matrix `W`
    Norm,
    /// Final factor `H`
    SymNmf,
}

impl FromStr for Goal {
    type Err = SymNmfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sym" => Ok(Goal::Sym),
            "ddg" => Ok(Goal::Ddg),
            "norm" => Ok(Goal::Norm),
            "symnmf" => Ok(Goal::SymNmf),
            other => Err(SymNmfError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Goal::Sym => "sym",
            Goal::Ddg => "ddg",
            Goal::Norm => "norm",
            Goal::SymNmf => "symnmf",
        };
        f.write_str(name)
    }
}

impl Goal {
    /// Compute the matrix this goal stands for. `builder` only matters for
    /// [`Goal::SymNmf`].
    pub fn run(self, data: &Matrix, builder: &SymNmfBuilder) -> SymNmfResult<Matrix> {
        info!("Running goal '{}' on {:?} dataset", self, data.shape());
        match self {
            Goal::Sym => similarity(data),
            Goal::Ddg => degree(&similarity(data)?),
            Goal::Norm => normalize(data),
            Goal::SymNmf => Ok(builder.build(data)?.factorization.h),
        }
    }
}
