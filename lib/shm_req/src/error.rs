//! Shamble (SHAMir reassemBLE)
//!
//! Secret reconstruction from threshold shares using Lagrange interpolation.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use shm_core::error::ShareError;

pub type RequestResult<T> = Result<T, RequestError>;

/// Failures while reading a request document and acting on it.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("malformed request: {0}")]
    Malformed(String),

    #[error(transparent)]
    Share(#[from] ShareError),
}
