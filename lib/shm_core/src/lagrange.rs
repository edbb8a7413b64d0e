//! Shamble (SHAMir reassemBLE)
//!
//! Secret reconstruction from threshold shares using Lagrange interpolation.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

/// Lagrange Interpolation at x = 0
use std::collections::HashSet;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{
    config::Arithmetic,
    error::{ShareError, ShareResult},
    rational::Fraction,
    types::{Secret, Share},
};

/// Fails on the first x-coordinate that repeats.
pub fn check_distinct(shares: &[Share]) -> ShareResult<()> {
    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if !seen.insert(share.x) {
            return Err(ShareError::DegenerateInput { x: share.x });
        }
    }
    Ok(())
}

fn check_shares(shares: &[Share]) -> ShareResult<()> {
    if shares.is_empty() {
        return Err(ShareError::InsufficientShares {
            threshold: 1,
            available: 0,
        });
    }
    check_distinct(shares)
}

pub fn reconstruct_with(arithmetic: Arithmetic, shares: &[Share]) -> ShareResult<Secret> {
    match arithmetic {
        Arithmetic::Float => reconstruct(shares),
        Arithmetic::Exact => reconstruct_exact(shares),
    }
}

/// P(0) = sum of y_j * L_j, where L_j = product over i != j of x_i / (x_i - x_j).
///
/// Terms are accumulated in double precision in input order and the sum is
/// rounded to the nearest integer, halves away from zero. Results are only
/// reliable while the intermediate values stay well inside 2^53.
pub fn reconstruct(shares: &[Share]) -> ShareResult<Secret> {
    check_shares(shares)?;

    let mut secret = 0.0f64;
    for j in 0..shares.len() {
        let x_j = shares[j].x as f64;
        let mut l = 1.0f64;
        for i in 0..shares.len() {
            if i != j {
                let x_i = shares[i].x as f64;
                l *= x_i / (x_i - x_j);
            }
        }
        secret += shares[j].y as f64 * l;
    }

    round_to_secret(secret)
}

fn round_to_secret(value: f64) -> ShareResult<Secret> {
    let rounded = value.round();
    // 2^127 is exactly representable; anything at or above it does not fit.
    if !rounded.is_finite() || rounded < Secret::MIN as f64 || rounded >= Secret::MAX as f64 {
        return Err(ShareError::Overflow(format!(
            "interpolated value {value} is outside the secret range"
        )));
    }
    Ok(rounded as Secret)
}

/// Exact value of P(0) as a reduced fraction.
///
/// Authentic shares of an integer polynomial always give an integer; a
/// proper fraction means the shares do not lie on one such polynomial.
pub fn interpolate_exact(shares: &[Share]) -> ShareResult<Fraction> {
    check_shares(shares)?;

    let mut secret = Fraction::zero();
    for j in 0..shares.len() {
        let x_j = BigInt::from(shares[j].x);
        let mut l = Fraction::one();
        for i in 0..shares.len() {
            if i != j {
                let x_i = BigInt::from(shares[i].x);
                let d = &x_i - &x_j;
                let term = Fraction::new(x_i, d)
                    .ok_or(ShareError::DegenerateInput { x: shares[j].x })?;
                l = &l * &term;
            }
        }
        let y_j = Fraction::from_integer(shares[j].y);
        secret = &secret + &(&y_j * &l);
    }
    Ok(secret)
}

/// Same as [`reconstruct`] but without floating point drift.
pub fn reconstruct_exact(shares: &[Share]) -> ShareResult<Secret> {
    let secret = interpolate_exact(shares)?;
    secret.round().to_i128().ok_or_else(|| {
        ShareError::Overflow(format!(
            "interpolated value {secret} is outside the secret range"
        ))
    })
}
