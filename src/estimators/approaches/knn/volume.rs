// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use statrs::function::gamma::gamma;

use super::ball::Ball;

/// Volume of the `ball` of the given radius in `dimension` dimensions.
///
/// V = (2 * Gamma(1/b + 1) * r)^p / Gamma(p/b + 1)
///
/// For Chebyshev (b = inf) both `1/b` and `p/b` evaluate to zero, which gives
/// the hypercube volume (2r)^p.
pub fn ball_volume(radius: f64, ball: Ball, dimension: f64) -> f64 {
    let b = ball.exponent();
    let side = 2.0 * gamma(1.0 / b + 1.0) * radius;
    side.powf(dimension) / gamma(dimension / b + 1.0)
}

/// Log of [`ball_volume`], evaluated without forming the power first.
///
/// Keeps high-dimensional volumes from under- or overflowing before the log.
pub fn ln_ball_volume(radius: f64, ball: Ball, dimension: f64) -> f64 {
    use statrs::function::gamma::ln_gamma;
    let b = ball.exponent();
    dimension * (2.0 * gamma(1.0 / b + 1.0) * radius).ln() - ln_gamma(dimension / b + 1.0)
}

/// Vectorized [`ball_volume`]: one volume per radius, order preserved.
pub fn volume(radii: &[f64], ball: Ball, dimension: f64) -> Vec<f64> {
    radii
        .iter()
        .map(|&r| ball_volume(r, ball, dimension))
        .collect()
}
