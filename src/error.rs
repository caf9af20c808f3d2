// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type shared by every stage of the kNN entropy pipeline.

use thiserror::Error;

/// Errors raised while estimating entropy.
///
/// All variants are raised before any output is produced; there are no
/// partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntropyError {
    /// The ball (metric) name matched none of the known aliases.
    #[error("unrecognized metric: {0:?}")]
    UnrecognizedMetric(String),

    /// `k` is outside the valid range `[1, n - 1]`.
    #[error("insufficient samples: k = {k} requires 1 <= k <= n - 1, but n = {n}")]
    InsufficientSamples { k: usize, n: usize },

    /// `k` passed to the bias correction is below 1.
    #[error("invalid k for bias correction: {0} (must be >= 1)")]
    InvalidK(usize),

    /// The sample matrix has no rows.
    #[error("empty input: at least one sample is required")]
    EmptyInput,

    /// The sample matrix has no columns.
    #[error("zero-dimensional input: samples must have at least one coordinate")]
    ZeroDimension,

    /// A coordinate is NaN or infinite.
    #[error("non-finite value at row {row}, column {col}")]
    NonFiniteInput { row: usize, col: usize },

    /// The k-th neighbour of a sample coincides with it, so its log-volume is -inf.
    #[error("zero k-th neighbour radius at sample {index} (k = {k}); duplicated points")]
    ZeroRadius { index: usize, k: usize },
}

pub type Result<T> = std::result::Result<T, EntropyError>;
