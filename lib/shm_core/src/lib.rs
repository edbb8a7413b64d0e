//! Shamble (SHAMir reassemBLE)
//!
//! Secret reconstruction from threshold shares using Lagrange interpolation.
//! Designed by the Sonia Code & Gemini AI (2026)
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

pub mod config;
pub mod decode;
pub mod error;
pub mod lagrange;
pub mod rational;
pub mod types;

#[cfg(test)]
pub mod tests;
