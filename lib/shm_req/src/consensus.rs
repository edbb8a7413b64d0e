//! Shamble (SHAMir reassemBLE)
//!
//! Secret reconstruction from threshold shares using Lagrange interpolation.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

/// Agreement across all threshold-sized subsets of the shares
use std::collections::BTreeSet;

use itertools::Itertools;
use shm_core::{
    config::ReconstructConfig,
    error::{ShareError, ShareResult},
    lagrange::{check_distinct, reconstruct_with},
    types::{Identifier, ReconstructionRequest, Secret, Share},
};

/// Outcome of the vote among all subsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consensus {
    secret: Secret,
    votes: usize,
    combinations: usize,
    supporters: Vec<Identifier>,
    outliers: Vec<Identifier>,
}

impl Consensus {
    pub fn get_secret(&self) -> Secret {
        self.secret
    }

    /// Number of subsets that reconstructed the winning secret.
    pub fn get_votes(&self) -> usize {
        self.votes
    }

    pub fn get_combinations(&self) -> usize {
        self.combinations
    }

    /// Shares that took part in at least one subset voting for the secret.
    pub fn get_supporters(&self) -> &[Identifier] {
        &self.supporters
    }

    /// Shares never part of a subset voting for the secret; suspected corrupt.
    pub fn get_outliers(&self) -> &[Identifier] {
        &self.outliers
    }

    pub fn is_unanimous(&self) -> bool {
        self.votes == self.combinations
    }
}

struct Tally {
    secret: Secret,
    votes: usize,
    members: BTreeSet<Identifier>,
}

/// Number of `k`-subsets of `n` items, `None` when it does not fit `usize`.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut c: usize = 1;
    for i in 0..k {
        // Exact at every step: c * (n - i) is divisible by (i + 1).
        c = c.checked_mul(n - i)? / (i + 1);
    }
    Some(c)
}

/// Reconstructs every `threshold`-sized subset of the request's shares and
/// picks the secret most subsets agree on.
///
/// Ties go to the secret produced first, subsets being enumerated in
/// lexicographic order of the request's share order. Subsets whose
/// reconstruction fails (e.g. overflow from a corrupt share) cast no vote.
pub fn find_consensus(
    request: &ReconstructionRequest,
    config: &ReconstructConfig,
) -> ShareResult<Consensus> {
    let threshold = request.get_threshold();
    let shares = request.get_shares();
    config.limits.check_threshold(threshold)?;

    if shares.len() < threshold {
        return Err(ShareError::InsufficientShares {
            threshold,
            available: shares.len(),
        });
    }

    check_distinct(shares)?;

    let combinations = binomial(shares.len(), threshold).unwrap_or(usize::MAX);
    config.limits.check_combinations(combinations)?;

    let mut tallies: Vec<Tally> = Vec::new();
    let mut first_error = None;

    for subset in shares.iter().copied().combinations(threshold) {
        let secret = match reconstruct_with(config.arithmetic, &subset) {
            Ok(secret) => secret,
            Err(err) => {
                tracing::debug!("Subset {} failed: {}", ids(&subset), err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
                continue;
            }
        };
        tracing::debug!("Subset {} -> {}", ids(&subset), secret);

        let known = tallies.iter().position(|t| t.secret == secret);
        let tally = match known {
            Some(pos) => &mut tallies[pos],
            None => {
                tallies.push(Tally {
                    secret,
                    votes: 0,
                    members: BTreeSet::new(),
                });
                let last = tallies.len() - 1;
                &mut tallies[last]
            }
        };
        tally.votes += 1;
        tally.members.extend(subset.iter().map(|s| s.x));
    }

    let mut winner: Option<Tally> = None;
    for tally in tallies {
        if winner.as_ref().is_none_or(|w| tally.votes > w.votes) {
            winner.replace(tally);
        }
    }

    let Some(winner) = winner else {
        return Err(first_error.unwrap_or(ShareError::InsufficientShares {
            threshold,
            available: 0,
        }));
    };

    let (supporters, outliers): (Vec<_>, Vec<_>) = shares
        .iter()
        .map(|s| s.x)
        .sorted()
        .partition(|x| winner.members.contains(x));

    tracing::debug!(
        "Secret {} won {} of {} votes",
        winner.secret,
        winner.votes,
        combinations
    );

    Ok(Consensus {
        secret: winner.secret,
        votes: winner.votes,
        combinations,
        supporters,
        outliers,
    })
}

fn ids(subset: &[Share]) -> String {
    subset.iter().map(|s| s.x).join(",")
}
