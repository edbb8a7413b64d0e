//! Shamble (SHAMir reassemBLE)
//!
//! Secret reconstruction from threshold shares using Lagrange interpolation.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

/// Positional Base Decoding
use crate::{
    config::Limits,
    error::{ShareError, ShareResult},
    types::{Identifier, RawShare, Share, ShareValue},
};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Value of a single digit: 0-9, then A-Z (any case) as 10-35.
pub fn digit_value(c: char, base: u32) -> Option<u32> {
    c.to_digit(MAX_BASE).filter(|d| *d < base)
}

/// Decodes `encoded` in `base` into the share at x = `identifier`.
pub fn decode(identifier: Identifier, base: u32, encoded: &str) -> ShareResult<Share> {
    decode_with(&Limits::default(), identifier, base, encoded)
}

pub fn decode_with(
    limits: &Limits,
    identifier: Identifier,
    base: u32,
    encoded: &str,
) -> ShareResult<Share> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(ShareError::UnsupportedBase { identifier, base });
    }
    if encoded.is_empty() {
        return Err(ShareError::EmptyEncoding { identifier });
    }
    limits.check_encoded_len(encoded.len())?;

    let mut value: ShareValue = 0;
    for c in encoded.chars() {
        let d = digit_value(c, base).ok_or(ShareError::InvalidEncoding {
            identifier,
            character: c,
            base,
        })?;
        value = value
            .checked_mul(ShareValue::from(base))
            .and_then(|v| v.checked_add(ShareValue::from(d)))
            .ok_or_else(|| {
                ShareError::Overflow(format!(
                    "share {identifier} value exceeds {} in base {base}",
                    ShareValue::MAX
                ))
            })?;
    }
    Ok(Share::new(identifier, value))
}

pub fn decode_raw(limits: &Limits, raw: &RawShare) -> ShareResult<Share> {
    decode_with(limits, raw.identifier, raw.base, &raw.encoded)
}
