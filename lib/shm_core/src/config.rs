//! Shamble (SHAMir reassemBLE)
//!
//! Secret reconstruction from threshold shares using Lagrange interpolation.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use crate::error::{ShareError, ShareResult};

pub const DEFAULT_MAX_ENCODED_LEN: usize = 1024;
pub const DEFAULT_MAX_THRESHOLD: usize = 256;
pub const DEFAULT_MAX_COMBINATIONS: usize = 100_000;

/// Arithmetic used by the interpolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Arithmetic {
    /// Double precision accumulation rounded to the nearest integer at the end.
    /// Only trustworthy while intermediate magnitudes stay below 2^53.
    #[default]
    Float,
    /// Big integer fractions, rounded only once at the end.
    Exact,
}

/// Bounds on input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_encoded_len: usize,
    pub max_threshold: usize,
    pub max_combinations: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_encoded_len: DEFAULT_MAX_ENCODED_LEN,
            max_threshold: DEFAULT_MAX_THRESHOLD,
            max_combinations: DEFAULT_MAX_COMBINATIONS,
        }
    }
}

impl Limits {
    pub fn check_encoded_len(&self, len: usize) -> ShareResult<()> {
        check("encoded value length", self.max_encoded_len, len)
    }

    pub fn check_threshold(&self, threshold: usize) -> ShareResult<()> {
        check("threshold", self.max_threshold, threshold)
    }

    pub fn check_combinations(&self, combinations: usize) -> ShareResult<()> {
        check("combination count", self.max_combinations, combinations)
    }
}

fn check(what: &'static str, limit: usize, actual: usize) -> ShareResult<()> {
    if actual > limit {
        return Err(ShareError::LimitExceeded {
            what,
            limit,
            actual,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconstructConfig {
    pub arithmetic: Arithmetic,
    pub limits: Limits,
}
