//! Shamble (SHAMir reassemBLE)
//!
//! Secret reconstruction from threshold shares using Lagrange interpolation.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::{io::Read, path::PathBuf, process::ExitCode};

use clap::Parser;
use itertools::Itertools;
use shm_core::config::{
    Arithmetic, DEFAULT_MAX_COMBINATIONS, DEFAULT_MAX_ENCODED_LEN, DEFAULT_MAX_THRESHOLD, Limits,
    ReconstructConfig,
};
use shm_req::{
    consensus::find_consensus, error::RequestResult, request::ShareRequest,
    selection::reconstruct_request,
};
use tracing_subscriber::EnvFilter;

/// Reconstruct a Shamir secret from a JSON share document.
#[derive(Debug, Parser)]
#[command(name = "shm_cli", version)]
struct Args {
    /// Request document; read from stdin when omitted
    input: Option<PathBuf>,

    /// Interpolate with exact big integer fractions instead of f64
    #[arg(long)]
    exact: bool,

    /// Reconstruct every threshold-sized subset and report disagreeing shares
    #[arg(long)]
    consensus: bool,

    #[arg(long, default_value_t = DEFAULT_MAX_ENCODED_LEN)]
    max_encoded_len: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_THRESHOLD)]
    max_threshold: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_COMBINATIONS)]
    max_combinations: usize,
}

impl Args {
    fn config(&self) -> ReconstructConfig {
        ReconstructConfig {
            arithmetic: if self.exact {
                Arithmetic::Exact
            } else {
                Arithmetic::Float
            },
            limits: Limits {
                max_encoded_len: self.max_encoded_len,
                max_threshold: self.max_threshold,
                max_combinations: self.max_combinations,
            },
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> RequestResult<String> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(text)
}

fn run(args: &Args) -> RequestResult<()> {
    let config = args.config();
    let text = read_input(args.input.as_ref())?;

    let request = ShareRequest::from_json(&text)?;
    let decoded = request.decode_all(&config.limits)?;

    tracing::info!("Decoded {} shares:", decoded.get_shares().len());
    for share in decoded.get_shares() {
        tracing::info!("{}", share);
    }
    tracing::info!("Threshold (k): {}", decoded.get_threshold());

    if args.consensus {
        let consensus = find_consensus(&decoded, &config)?;
        tracing::info!(
            "Secret: {} ({} of {} subsets agree)",
            consensus.get_secret(),
            consensus.get_votes(),
            consensus.get_combinations()
        );
        if !consensus.get_outliers().is_empty() {
            tracing::warn!(
                "Suspected corrupt shares: {}",
                consensus.get_outliers().iter().join(", ")
            );
        }
    } else {
        let secret = reconstruct_request(&decoded, &config)?;
        tracing::info!("Secret: {}", secret);
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cfg!(feature = "pure_output") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false) // Removes "shm_cli:"
            .with_level(false) // Removes "INFO"
            .without_time() // Removes the timestamp
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

pub fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        tracing::error!("Error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
