//! Compare SymNMF clustering against k-means with the silhouette score.
//!
//! Usage:
//!   analysis <K> <FILE> [ITERATIONS]
//!
//! Prints `nmf: <score>` and `kmeans: <score>` with four decimals.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use symnmf::storage::load_dataset;
use symnmf::SymNmfBuilder;

#[derive(Parser, Debug)]
#[command(name = "analysis")]
#[command(about = "Silhouette score of SymNMF vs k-means clustering")]
struct Args {
    /// Number of clusters.
    k: usize,

    /// Comma-separated dataset, one point per line.
    file: PathBuf,

    /// Maximum k-means iterations.
    #[arg(default_value = "200")]
    iterations: usize,

    /// Seed shared by the SymNMF start and k-means.
    #[arg(long, default_value = "0")]
    seed: u64,
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let args = Args::parse();

    let data = load_dataset(&args.file)
        .with_context(|| format!("reading data from {}", args.file.display()))?;

    let comparison = SymNmfBuilder::new()
        .with_rank(args.k)
        .with_seed(args.seed)
        .compare_with_kmeans(&data, args.iterations)
        .context("clustering comparison")?;

    println!("nmf: {:.4}", comparison.nmf);
    println!("kmeans: {:.4}", comparison.kmeans);
    Ok(())
}
