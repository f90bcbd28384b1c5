//! SymNMF builder and end-to-end pipeline.
//!
//! This module configures a factorisation run and executes it on a dataset:
//! normalised similarity `W` → seeded `H₀` → multiplicative update → labels.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use symnmf_core::{
    factorize, normalize, FactorizeConfig, Factorization, Matrix, SymNmfError, SymNmfResult,
    ZeroDenominator,
};

use crate::clustering::{assign_clusters, kmeans_lloyd, silhouette_score};
use crate::init::{initialize_h, DEFAULT_SEED};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymNmfBuilder {
    /// Rank of the factor (number of clusters)
    pub(crate) k: usize,
    /// Seed of the `H₀` draw
    pub(crate) seed: u64,
    pub(crate) factorize: FactorizeConfig,
}

impl Default for SymNmfBuilder {
    fn default() -> Self {
        debug!("Creating SymNmfBuilder with default parameters");
        Self {
            k: 2,
            seed: DEFAULT_SEED,
            factorize: FactorizeConfig::default(),
        }
    }
}

/// Output of [`SymNmfBuilder::build`].
#[derive(Debug, Clone)]
pub struct SymNmfOutput {
    /// Normalised similarity matrix (n×n)
    pub w: Matrix,
    pub factorization: Factorization,
    /// Hard label per point, argmax of each row of `H`
    pub assignments: Vec<usize>,
}

impl SymNmfOutput {
    pub fn h(&self) -> &Matrix {
        &self.factorization.h
    }
}

/// Silhouette scores of SymNMF labels and of the k-means baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterComparison {
    pub nmf: f64,
    pub kmeans: f64,
}

impl SymNmfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rank(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.factorize.epsilon = epsilon;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.factorize.max_iterations = max_iterations;
        self
    }

    pub fn with_zero_denominator(mut self, policy: ZeroDenominator) -> Self {
        self.factorize.zero_denominator = policy;
        self
    }

    pub fn rank(&self) -> usize {
        self.k
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn factorize_config(&self) -> &FactorizeConfig {
        &self.factorize
    }

    /// Run the full pipeline on the rows of `data`. Needs `1 ≤ k ≤ n`.
    pub fn build(&self, data: &Matrix) -> SymNmfResult<SymNmfOutput> {
        let n = data.nrows();
        if self.k == 0 || self.k > n {
            return Err(SymNmfError::InvalidParameter(format!(
                "rank k must satisfy 1 <= k <= n, got k={} with n={}",
                self.k, n
            )));
        }
        self.factorize.validate()?;

        info!(
            "Building SymNMF: n={}, d={}, k={}, seed={}",
            n,
            data.ncols(),
            self.k,
            self.seed
        );

        let w = normalize(data)?;
        let h0 = initialize_h(&w, self.k, self.seed)?;
        let factorization = factorize(h0, &w, &self.factorize)?;
        let assignments = assign_clusters(&factorization.h);

        info!(
            "SymNMF finished: {} iterations, converged={}",
            factorization.iterations, factorization.converged
        );
        Ok(SymNmfOutput {
            w,
            factorization,
            assignments,
        })
    }

    /// Score SymNMF labels against seeded k-means on the same data.
    pub fn compare_with_kmeans(
        &self,
        data: &Matrix,
        kmeans_max_iter: usize,
    ) -> SymNmfResult<ClusterComparison> {
        let output = self.build(data)?;
        let nmf = silhouette_score(data, &output.assignments)?;

        let kmeans_labels = kmeans_lloyd(data, self.k, kmeans_max_iter, self.seed)?;
        let kmeans = silhouette_score(data, &kmeans_labels)?;

        debug!("Silhouette nmf={:.4}, kmeans={:.4}", nmf, kmeans);
        Ok(ClusterComparison { nmf, kmeans })
    }
}
