// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;
use std::fmt;
use std::str::FromStr;

use crate::error::EntropyError;

/// Metric ball used both for neighbour distances and for the volume formula.
///
/// Each ball is the unit ball of an L^b norm:
/// Manhattan (b = 1), Euclidean (b = 2), Chebyshev (b = inf).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ball {
    Manhattan,
    #[default]
    Euclidean,
    Chebyshev,
}

/// Accepted names, matched case-insensitively.
pub const BALL_ALIASES: &[(&str, Ball)] = &[
    ("l1", Ball::Manhattan),
    ("manhattan", Ball::Manhattan),
    ("taxicab", Ball::Manhattan),
    ("l2", Ball::Euclidean),
    ("euclidean", Ball::Euclidean),
    ("linf", Ball::Chebyshev),
    ("chebyshev", Ball::Chebyshev),
];

impl Ball {
    /// Norm exponent b; `f64::INFINITY` for Chebyshev.
    pub fn exponent(self) -> f64 {
        match self {
            Ball::Manhattan => 1.0,
            Ball::Euclidean => 2.0,
            Ball::Chebyshev => f64::INFINITY,
        }
    }

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Ball::Manhattan => "manhattan",
            Ball::Euclidean => "euclidean",
            Ball::Chebyshev => "chebyshev",
        }
    }

    /// Distance between two points of equal length under this ball's norm.
    pub fn distance(self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
        let diffs = a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs());
        match self {
            Ball::Manhattan => diffs.sum(),
            Ball::Euclidean => diffs.map(|d| d * d).sum::<f64>().sqrt(),
            Ball::Chebyshev => diffs.fold(0.0, f64::max),
        }
    }
}

impl FromStr for Ball {
    type Err = EntropyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        BALL_ALIASES
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map(|&(_, ball)| ball)
            .ok_or_else(|| EntropyError::UnrecognizedMetric(s.to_string()))
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
