//! SymNMF command line.
//!
//! Usage:
//!   symnmf <GOAL> <FILE> [--k K] [--seed SEED]
//!
//! Goals:
//! - sym: similarity matrix
//! - ddg: diagonal degree matrix
//! - norm: normalised similarity matrix
//! - symnmf: factor H (needs --k)
//!
//! The result is printed to stdout as comma-separated rows with four
//! decimals. Any failure exits non-zero with nothing on stdout.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use symnmf::storage::{load_dataset, write_matrix};
use symnmf::{Goal, SymNmfBuilder, SymNmfError};

#[derive(Parser, Debug)]
#[command(name = "symnmf")]
#[command(about = "Similarity graph, degree normalisation and SymNMF factorisation")]
struct Args {
    /// One of: sym, ddg, norm, symnmf.
    goal: String,

    /// Comma-separated dataset, one point per line.
    file: PathBuf,

    /// Number of clusters (required by the symnmf goal).
    #[arg(long)]
    k: Option<usize>,

    /// Seed for the random starting factor.
    #[arg(long, default_value = "0")]
    seed: u64,
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let args = Args::parse();

    let goal: Goal = args.goal.parse()?;
    let data = load_dataset(&args.file)
        .with_context(|| format!("reading input from {}", args.file.display()))?;

    let mut builder = SymNmfBuilder::new().with_seed(args.seed);
    if goal == Goal::SymNmf {
        let k = args.k.ok_or_else(|| {
            SymNmfError::InvalidParameter("the symnmf goal needs --k".to_string())
        })?;
        builder = builder.with_rank(k);
    }

    let result = goal.run(&data, &builder).context("computing result")?;

    let stdout = io::stdout();
    write_matrix(&mut stdout.lock(), &result)?;
    Ok(())
}
