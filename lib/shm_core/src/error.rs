//! Shamble (SHAMir reassemBLE)
//!
//! Secret reconstruction from threshold shares using Lagrange interpolation.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use crate::types::Identifier;

pub type ShareResult<T> = Result<T, ShareError>;

/// Failures of share decoding and secret reconstruction.
///
/// All of them are deterministic input problems; none is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    /// A character is not a digit of the stated base.
    #[error("share {identifier}: invalid digit '{character}' for base {base}")]
    InvalidEncoding {
        identifier: Identifier,
        character: char,
        base: u32,
    },

    #[error("share {identifier}: encoded value is empty")]
    EmptyEncoding { identifier: Identifier },

    /// Base outside 2..=36.
    #[error("share {identifier}: unsupported base {base}")]
    UnsupportedBase { identifier: Identifier, base: u32 },

    /// Value does not fit the supported integer range.
    #[error("overflow: {0}")]
    Overflow(String),

    #[error("invalid threshold {0}")]
    InvalidThreshold(usize),

    #[error("not enough shares to reconstruct secret (need {threshold}, got {available})")]
    InsufficientShares { threshold: usize, available: usize },

    /// Two shares with the same x-coordinate.
    #[error("duplicate x-coordinate {x}")]
    DegenerateInput { x: Identifier },

    #[error("{what} limit exceeded ({actual} > {limit})")]
    LimitExceeded {
        what: &'static str,
        limit: usize,
        actual: usize,
    },
}
