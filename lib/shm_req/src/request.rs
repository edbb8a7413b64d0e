//! Shamble (SHAMir reassemBLE)
//!
//! Secret reconstruction from threshold shares using Lagrange interpolation.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use serde::Deserialize;
use serde_json::{Map, Value};
use shm_core::{
    config::Limits,
    decode::decode_raw,
    error::ShareError,
    lagrange::check_distinct,
    types::{Identifier, RawShare, ReconstructionRequest},
};

use crate::error::{RequestError, RequestResult};

pub const KEYS_ENTRY: &str = "keys";

#[derive(Debug, Deserialize)]
struct KeysEntry {
    n: Option<usize>,
    k: usize,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BaseField {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct ShareEntry {
    base: BaseField,
    value: String,
}

/// Request document before decoding.
///
/// The document is an object with a `keys` entry carrying the threshold `k`
/// (and optionally the share count `n`), and one entry per share keyed by
/// its decimal identifier:
///
/// ```json
/// { "keys": { "n": 2, "k": 2 },
///   "1": { "base": "10", "value": "4" },
///   "2": { "base": 2, "value": "111" } }
/// ```
///
/// Shares are kept in ascending identifier order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    total: Option<usize>,
    threshold: usize,
    raw: Vec<RawShare>,
}

impl ShareRequest {
    pub fn new(threshold: usize, total: Option<usize>, mut raw: Vec<RawShare>) -> Self {
        raw.sort_by_key(|r| r.identifier);
        Self {
            total,
            threshold,
            raw,
        }
    }

    pub fn from_json(text: &str) -> RequestResult<Self> {
        let document: Map<String, Value> = serde_json::from_str(text)?;
        Self::from_map(document)
    }

    pub fn from_map(document: Map<String, Value>) -> RequestResult<Self> {
        let mut keys = None;
        let mut raw = Vec::new();

        for (key, value) in document {
            if key == KEYS_ENTRY {
                keys.replace(serde_json::from_value::<KeysEntry>(value)?);
            } else if let Some(identifier) = parse_identifier(&key)? {
                let entry = serde_json::from_value::<ShareEntry>(value)?;
                raw.push(RawShare::new(identifier, parse_base(&entry.base)?, entry.value));
            }
        }

        let Some(keys) = keys else {
            return Err(RequestError::MissingField(KEYS_ENTRY));
        };

        let request = Self::new(keys.k, keys.n, raw);
        if let Some(x) = request.duplicate_identifier() {
            return Err(ShareError::DegenerateInput { x }.into());
        }
        if let Some(n) = request.total.filter(|n| *n != request.raw.len()) {
            tracing::warn!(
                "Request announces {} shares but carries {}",
                n,
                request.raw.len()
            );
        }
        Ok(request)
    }

    pub fn get_threshold(&self) -> usize {
        self.threshold
    }

    pub fn get_total(&self) -> Option<usize> {
        self.total
    }

    pub fn get_raw_shares(&self) -> &[RawShare] {
        &self.raw
    }

    fn duplicate_identifier(&self) -> Option<Identifier> {
        self.raw
            .windows(2)
            .find(|w| w[0].identifier == w[1].identifier)
            .map(|w| w[0].identifier)
    }

    /// Decodes every share; any failure rejects the whole request.
    pub fn decode_all(&self, limits: &Limits) -> RequestResult<ReconstructionRequest> {
        limits.check_threshold(self.threshold)?;

        let shares = self
            .raw
            .iter()
            .map(|r| decode_raw(limits, r))
            .collect::<Result<Vec<_>, _>>()?;
        check_distinct(&shares)?;

        for share in &shares {
            tracing::debug!("Decoded {}", share);
        }

        Ok(ReconstructionRequest::new(self.threshold, shares)?)
    }
}

/// Entries keyed by something other than a decimal number are not shares.
fn parse_identifier(key: &str) -> RequestResult<Option<Identifier>> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    match key.parse::<Identifier>() {
        Ok(0) => Err(RequestError::Malformed(format!(
            "share identifier must be positive, got '{key}'"
        ))),
        Ok(identifier) => Ok(Some(identifier)),
        Err(_) => Err(RequestError::Malformed(format!(
            "share identifier '{key}' is out of range"
        ))),
    }
}

fn parse_base(base: &BaseField) -> RequestResult<u32> {
    match base {
        // Out of range values fall through to the decoder's base check.
        BaseField::Number(n) => Ok(u32::try_from(*n).unwrap_or(u32::MAX)),
        BaseField::Text(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| RequestError::Malformed(format!("invalid base '{s}'"))),
    }
}
