// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView2, Axis};
use tracing::{debug, warn};

use super::ball::Ball;
use super::bias::{EULER_MASCHERONI, harmonic_digamma};
use super::radii::{NeighborSearch, knn_radii_with};
use super::units::Units;
use super::volume::ln_ball_volume;
use crate::error::{EntropyError, Result};
use crate::estimators::traits::{GlobalValue, LocalValues};

/// Generalized k-nearest-neighbour (Kozachenko–Leonenko) differential entropy estimator.
///
/// H_hat = (1/n) * sum_i ln V_i + ln(n) - L(k - 1) + gamma_E
///
/// where V_i is the volume of the chosen metric ball whose radius is the
/// distance from sample i to its k-th nearest neighbour (self excluded), and
/// L(m) is the m-th harmonic number. The estimate is computed in nats and
/// divided by ln(base) for other units.
pub struct KnnEntropy {
    pub data: Array2<f64>,
    pub k: usize,
    pub ball: Ball,
    pub units: Units,
    pub search: NeighborSearch,
}

impl KnnEntropy {
    /// Construct from 2D data (rows = samples, cols = dimensions)
    pub fn new(data: Array2<f64>, k: usize) -> Self {
        Self {
            data,
            k,
            ball: Ball::default(),
            units: Units::default(),
            search: NeighborSearch::default(),
        }
    }

    /// Construct from 1D data (convenience)
    pub fn new_1d(data: Array1<f64>, k: usize) -> Self {
        Self::new(data.insert_axis(Axis(1)), k)
    }

    pub fn with_ball(mut self, ball: Ball) -> Self {
        self.ball = ball;
        self
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn with_search(mut self, search: NeighborSearch) -> Self {
        self.search = search;
        self
    }

    /// Global entropy estimate, or the first error hit by the pipeline.
    pub fn try_global_value(&self) -> Result<f64> {
        Ok(self.terms()?.global(self.units))
    }

    /// Per-sample contributions whose mean is the global estimate.
    pub fn try_local_values(&self) -> Result<Array1<f64>> {
        let terms = self.terms()?;
        Ok(terms
            .ln_volumes
            .mapv(|ln_v| self.units.from_nats(ln_v + terms.offset)))
    }

    fn terms(&self) -> Result<Terms> {
        estimate_terms(self.data.view(), self.ball, self.k, self.search)
    }
}

impl GlobalValue for KnnEntropy {
    fn global_value(&self) -> f64 {
        self.try_global_value().unwrap_or_else(|err| {
            warn!(%err, "kNN entropy estimation failed");
            f64::NAN
        })
    }
}

impl LocalValues for KnnEntropy {
    fn local_values(&self) -> Array1<f64> {
        self.try_local_values().unwrap_or_else(|err| {
            warn!(%err, "kNN local entropy estimation failed");
            Array1::zeros(0)
        })
    }
}

/// Log-volumes per sample plus the sample-independent correction, in nats.
struct Terms {
    ln_volumes: Array1<f64>,
    offset: f64,
}

impl Terms {
    fn global(&self, units: Units) -> f64 {
        let mean_ln_v = self.ln_volumes.iter().sum::<f64>() / self.ln_volumes.len() as f64;
        units.from_nats(mean_ln_v + self.offset)
    }
}

fn validate(data: ArrayView2<'_, f64>) -> Result<()> {
    if data.nrows() == 0 {
        return Err(EntropyError::EmptyInput);
    }
    if data.ncols() == 0 {
        return Err(EntropyError::ZeroDimension);
    }
    if let Some(((row, col), _)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(EntropyError::NonFiniteInput { row, col });
    }
    Ok(())
}

fn estimate_terms(
    data: ArrayView2<'_, f64>,
    ball: Ball,
    k: usize,
    search: NeighborSearch,
) -> Result<Terms> {
    validate(data)?;
    let (n, p) = data.dim();
    debug!(n, p, k, %ball, ?search, "estimating kNN entropy");

    let radii = knn_radii_with(data, ball, k, search)?;
    if let Some(index) = radii.iter().position(|&r| r <= 0.0) {
        return Err(EntropyError::ZeroRadius { index, k });
    }
    let correction = harmonic_digamma(k)?;

    let dimension = p as f64;
    let ln_volumes: Array1<f64> = radii
        .iter()
        .map(|&r| ln_ball_volume(r, ball, dimension))
        .collect();
    let offset = (n as f64).ln() - correction + EULER_MASCHERONI;
    debug!(offset, "bias-corrected offset (nats)");

    Ok(Terms { ln_volumes, offset })
}

/// Estimate the differential entropy of `data` (rows = samples) with the
/// generalized kNN estimator.
///
/// `ball` is resolved case-insensitively (`"l1"`, `"euclidean"`, `"linf"`, ...).
pub fn entropy(data: ArrayView2<'_, f64>, ball: &str, k: usize, units: Units) -> Result<f64> {
    let ball: Ball = ball.parse()?;
    let h = estimate_terms(data, ball, k, NeighborSearch::BruteForce)?.global(units);
    debug!(entropy = h, %units, "kNN entropy estimate");
    Ok(h)
}
