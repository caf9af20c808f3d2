// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_relative_eq;
use std::f64::consts::PI;

use gknn::{Ball, ball_volume, volume};

const BALLS: [Ball; 3] = [Ball::Manhattan, Ball::Euclidean, Ball::Chebyshev];

#[test]
fn zero_radius_has_zero_volume() {
    for ball in BALLS {
        for p in 1..6 {
            assert_eq!(ball_volume(0.0, ball, p as f64), 0.0, "{ball} p={p}");
        }
    }
}

#[test]
fn one_dimensional_ball_is_an_interval() {
    for ball in BALLS {
        for &r in &[0.25, 1.0, 3.5] {
            assert_relative_eq!(ball_volume(r, ball, 1.0), 2.0 * r, max_relative = 1e-12);
        }
    }
}

#[test]
fn chebyshev_ball_is_a_hypercube() {
    for p in 1..8 {
        for &r in &[0.1_f64, 1.0, 2.5] {
            let expected = (2.0 * r).powi(p);
            assert_relative_eq!(
                ball_volume(r, Ball::Chebyshev, p as f64),
                expected,
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn euclidean_ball_known_volumes() {
    assert_relative_eq!(ball_volume(1.0, Ball::Euclidean, 2.0), PI, max_relative = 1e-12);
    assert_relative_eq!(
        ball_volume(2.0, Ball::Euclidean, 3.0),
        4.0 / 3.0 * PI * 8.0,
        max_relative = 1e-12
    );
}

#[test]
fn manhattan_ball_is_a_cross_polytope() {
    // 2^p r^p / p!
    assert_relative_eq!(
        ball_volume(1.5, Ball::Manhattan, 2.0),
        2.0 * 1.5 * 1.5,
        max_relative = 1e-12
    );
    assert_relative_eq!(ball_volume(1.0, Ball::Manhattan, 3.0), 8.0 / 6.0, max_relative = 1e-12);
}

#[test]
fn vectorized_volume_preserves_order() {
    let radii = [0.0, 1.0, 0.5, 2.0];
    let v = volume(&radii, Ball::Euclidean, 2.0);
    assert_eq!(v.len(), radii.len());
    for (vi, &r) in v.iter().zip(radii.iter()) {
        assert_relative_eq!(*vi, PI * r * r, max_relative = 1e-12);
    }
    assert!(volume(&[], Ball::Chebyshev, 3.0).is_empty());
}
