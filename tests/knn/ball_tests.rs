// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use gknn::{Ball, EntropyError};

#[test]
fn resolver_is_case_insensitive() {
    for name in ["L2", "l2", "Euclidean", "EUCLIDEAN", "euclidean"] {
        assert_eq!(name.parse::<Ball>(), Ok(Ball::Euclidean), "{name}");
    }
    for name in ["l1", "L1", "Manhattan", "TAXICAB", "taxicab"] {
        assert_eq!(name.parse::<Ball>(), Ok(Ball::Manhattan), "{name}");
    }
    for name in ["linf", "LInf", "Chebyshev", "CHEBYSHEV"] {
        assert_eq!(name.parse::<Ball>(), Ok(Ball::Chebyshev), "{name}");
    }
}

#[test]
fn unknown_metric_is_named_in_error() {
    let err = "mahalanobis".parse::<Ball>().unwrap_err();
    assert_eq!(err, EntropyError::UnrecognizedMetric("mahalanobis".to_string()));
    assert!(err.to_string().contains("mahalanobis"));

    assert!("".parse::<Ball>().is_err());
    assert!("l3".parse::<Ball>().is_err());
}

#[test]
fn exponents() {
    assert_eq!(Ball::Manhattan.exponent(), 1.0);
    assert_eq!(Ball::Euclidean.exponent(), 2.0);
    assert!(Ball::Chebyshev.exponent().is_infinite());
    assert_eq!(Ball::default(), Ball::Euclidean);
}
