//! Shamble (SHAMir reassemBLE)
//!
//! Secret reconstruction from threshold shares using Lagrange interpolation.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use itertools::Itertools;
use shm_core::{
    config::ReconstructConfig,
    error::ShareResult,
    lagrange::reconstruct_with,
    types::{ReconstructionRequest, Secret},
};

/// Reconstructs from the first `threshold` shares of the request.
///
/// Fails with `InsufficientShares` before any interpolation when the
/// request carries fewer shares than its threshold.
pub fn reconstruct_request(
    request: &ReconstructionRequest,
    config: &ReconstructConfig,
) -> ShareResult<Secret> {
    config.limits.check_threshold(request.get_threshold())?;

    let selected = request.selected()?;
    tracing::debug!(
        "Selected shares {} of {} ({:?} arithmetic)",
        selected.iter().map(|s| s.x).join(", "),
        request.get_shares().len(),
        config.arithmetic
    );

    reconstruct_with(config.arithmetic, selected)
}
