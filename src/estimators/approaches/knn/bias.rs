// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{EntropyError, Result};

/// Euler–Mascheroni constant.
pub const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;

/// Harmonic number L(m) = sum_{i=1}^{m} 1/i, with L(0) = 0.
pub fn harmonic_number(m: usize) -> f64 {
    (1..=m).map(|i| 1.0 / i as f64).sum()
}

/// Bias-correction term L(k - 1), equal to psi(k) + gamma_E for integer k.
pub fn harmonic_digamma(k: usize) -> Result<f64> {
    if k < 1 {
        return Err(EntropyError::InvalidK(k));
    }
    Ok(harmonic_number(k - 1))
}
