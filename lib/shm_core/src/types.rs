//! Shamble (SHAMir reassemBLE)
//!
//! Secret reconstruction from threshold shares using Lagrange interpolation.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::fmt;

use crate::error::{ShareError, ShareResult};

pub type Identifier = u64;
pub type ShareValue = i128;
pub type Secret = i128;

/// Share as it arrives from the request document, value still encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawShare {
    pub identifier: Identifier,
    pub base: u32,
    pub encoded: String,
}

impl RawShare {
    pub fn new(identifier: Identifier, base: u32, encoded: impl Into<String>) -> Self {
        Self {
            identifier,
            base,
            encoded: encoded.into(),
        }
    }
}

/// Point (x, y) on the secret polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Share {
    pub x: Identifier,
    pub y: ShareValue,
}

impl Share {
    pub fn new(x: Identifier, y: ShareValue) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Share({}, {})", self.x, self.y)
    }
}

/// Decoded shares together with the threshold needed to recover the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionRequest {
    threshold: usize,
    shares: Vec<Share>,
}

impl ReconstructionRequest {
    pub fn new(threshold: usize, shares: Vec<Share>) -> ShareResult<Self> {
        if threshold == 0 {
            return Err(ShareError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold, shares })
    }

    pub fn get_threshold(&self) -> usize {
        self.threshold
    }

    pub fn get_shares(&self) -> &[Share] {
        &self.shares
    }

    /// First `threshold` shares in input order; later shares are not used.
    pub fn selected(&self) -> ShareResult<&[Share]> {
        if self.shares.len() < self.threshold {
            return Err(ShareError::InsufficientShares {
                threshold: self.threshold,
                available: self.shares.len(),
            });
        }
        Ok(&self.shares[..self.threshold])
    }
}
