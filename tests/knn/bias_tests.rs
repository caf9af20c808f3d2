// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use statrs::function::gamma::digamma;

use gknn::estimators::approaches::knn::bias::harmonic_number;
use gknn::{EULER_MASCHERONI, EntropyError, harmonic_digamma};

#[test]
fn harmonic_number_known_values() {
    assert_eq!(harmonic_number(0), 0.0);
    assert_abs_diff_eq!(harmonic_number(1), 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(harmonic_number(3), 1.0 + 0.5 + 1.0 / 3.0, epsilon = 1e-15);
}

#[test]
fn harmonic_number_strictly_increasing() {
    let values: Vec<f64> = (1..50).map(harmonic_number).collect();
    for w in values.windows(2) {
        assert!(w[1] > w[0]);
    }
}

#[test]
fn harmonic_digamma_uses_k_minus_one() {
    assert_eq!(harmonic_digamma(1), Ok(0.0));
    assert_abs_diff_eq!(harmonic_digamma(4).unwrap(), harmonic_number(3), epsilon = 1e-15);
    assert_eq!(harmonic_digamma(0), Err(EntropyError::InvalidK(0)));
}

#[test]
fn harmonic_digamma_matches_digamma_plus_euler() {
    for k in 1..20usize {
        let expected = digamma(k as f64) + EULER_MASCHERONI;
        assert_abs_diff_eq!(harmonic_digamma(k).unwrap(), expected, epsilon = 1e-10);
    }
}
