// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Generalized k-nearest-neighbour entropy estimation over selectable metric balls.

pub mod ball;
pub mod bias;
pub mod estimator;
pub mod radii;
pub mod units;
pub mod volume;

pub use ball::Ball;
pub use bias::{EULER_MASCHERONI, harmonic_digamma, harmonic_number};
pub use estimator::{KnnEntropy, entropy};
pub use radii::{NeighborSearch, knn_radii, knn_radii_with, pairwise_distances};
pub use units::Units;
pub use volume::{ball_volume, volume};
