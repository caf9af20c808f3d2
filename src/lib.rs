// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # gknn
//!
//! Generalized k-nearest-neighbour estimation of differential (Shannon) entropy
//! for continuous multivariate samples.
//!
//! ## Quick Start
//!
//! ```rust
//! use gknn::{Units, entropy};
//! use ndarray::array;
//!
//! let data = array![[0.0, 0.1], [0.4, 0.9], [0.7, 0.2], [0.3, 0.5], [0.9, 0.8]];
//! let h_nats = entropy(data.view(), "euclidean", 1, Units::Nats).unwrap();
//! let h_bits = entropy(data.view(), "L2", 1, Units::Bits).unwrap();
//! assert!((h_bits - h_nats / std::f64::consts::LN_2).abs() < 1e-12);
//! ```
//!
//! ## Estimator
//!
//! H = mean(ln V_i) + ln(n) - L(k - 1) + gamma_E
//!
//! V_i is the volume of the metric ball (Manhattan, Euclidean or Chebyshev)
//! reaching from sample i to its k-th nearest neighbour, and L(m) is the m-th
//! harmonic number. Results in bits or hartleys are the nats value divided
//! by ln(2) or ln(10).
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: `entropy`, `volume` and the `Entropy` factory
//! 2. **Estimation Approach**: `estimators::approaches::knn`
//! 3. **Core Infrastructure**: shared traits and the KD-tree dataset in `common_nd`
//!
//! ## Floating-point summation
//!
//! The mean log-volume is summed sequentially in sample order, so results
//! are bit-for-bit reproducible for identical input.

pub mod error;
pub mod estimators;

pub use error::{EntropyError, Result};
pub use estimators::approaches::knn::{
    Ball, EULER_MASCHERONI, KnnEntropy, NeighborSearch, Units, ball_volume, entropy,
    harmonic_digamma, volume,
};
pub use estimators::entropy::Entropy;
pub use estimators::traits::{GlobalValue, LocalValues};
