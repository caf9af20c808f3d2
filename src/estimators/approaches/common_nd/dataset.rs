// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use kiddo::traits::DistanceMetric;
use kiddo::{ImmutableKdTree, Manhattan, SquaredEuclidean};
use ndarray::ArrayView2;
use std::num::NonZeroUsize;

use crate::error::{EntropyError, Result};
use crate::estimators::approaches::knn::ball::Ball;

/// Chebyshev distance metric (L-infinity norm) for kiddo.
pub struct Chebyshev;

impl<const K: usize> DistanceMetric<f64, K> for Chebyshev {
    fn dist(a: &[f64; K], b: &[f64; K]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    fn dist1(a: f64, b: f64) -> f64 {
        (a - b).abs()
    }
}

/// Shared N-D dataset container with KD-tree for fast neighbor queries.
pub struct NdDataset<const K: usize> {
    pub points: Vec<[f64; K]>,
    pub n: usize,
    pub tree: ImmutableKdTree<f64, K>,
}

impl<const K: usize> NdDataset<K> {
    pub fn from_points(points: Vec<[f64; K]>) -> Self {
        let n = points.len();
        let tree = ImmutableKdTree::new_from_slice(&points);
        Self { points, n, tree }
    }

    /// Build from a (samples x dimensions) view; `data.ncols()` must equal `K`.
    pub fn from_view(data: ArrayView2<'_, f64>) -> Option<Self> {
        if data.ncols() != K {
            return None;
        }
        Some(Self::from_points(Self::to_points(data)))
    }

    fn to_points(data: ArrayView2<'_, f64>) -> Vec<[f64; K]> {
        let mut points: Vec<[f64; K]> = Vec::with_capacity(data.nrows());
        if let Some(slice) = data.as_slice() {
            for chunk in slice.chunks_exact(K) {
                let mut p = [0.0; K];
                p.copy_from_slice(chunk);
                points.push(p);
            }
        } else {
            for row in data.rows() {
                let mut p = [0.0; K];
                for (dst, &src) in p.iter_mut().zip(row.iter()) {
                    *dst = src;
                }
                points.push(p);
            }
        }
        points
    }

    fn check_k(&self, k: usize) -> Result<NonZeroUsize> {
        if k < 1 || k >= self.n {
            return Err(EntropyError::InsufficientSamples { k, n: self.n });
        }
        // Query k+1 neighbours: the sample itself is always among them at distance 0.
        Ok(NonZeroUsize::MIN.saturating_add(k))
    }

    /// Distance to the k-th neighbour of every point (self excluded) under `ball`.
    ///
    /// All three balls are answered from the KD-tree.
    pub fn kth_neighbor_radii(&self, ball: Ball, k: usize) -> Result<Vec<f64>> {
        match ball {
            Ball::Euclidean => self.kth_neighbor_radii_euclidean(k),
            Ball::Manhattan => self.kth_neighbor_radii_manhattan(k),
            Ball::Chebyshev => self.kth_neighbor_radii_chebyshev(k),
        }
    }

    /// Euclidean metric (p=2): distance to k-th neighbor per point (self-excluded)
    pub fn kth_neighbor_radii_euclidean(&self, k: usize) -> Result<Vec<f64>> {
        let qty = self.check_k(k)?;
        let mut radii = Vec::with_capacity(self.n);
        for p in self.points.iter() {
            let neigh = self.tree.nearest_n::<SquaredEuclidean>(p, qty);
            // kiddo returns squared distances for this metric
            radii.push(neigh[k].distance.sqrt());
        }
        Ok(radii)
    }

    /// Manhattan metric (p=1): distance to k-th neighbor per point (self-excluded)
    pub fn kth_neighbor_radii_manhattan(&self, k: usize) -> Result<Vec<f64>> {
        let qty = self.check_k(k)?;
        let mut radii = Vec::with_capacity(self.n);
        for p in self.points.iter() {
            let neigh = self.tree.nearest_n::<Manhattan>(p, qty);
            radii.push(neigh[k].distance);
        }
        Ok(radii)
    }

    /// Chebyshev metric (p=inf): distance to k-th neighbor per point (self-excluded)
    ///
    /// Summed per-axis offsets do not bound L-infinity from below, so the tree is
    /// queried in Euclidean space: with r_e the k-th Euclidean radius, every
    /// point within Chebyshev r_e lies within Euclidean sqrt(K) * r_e.
    pub fn kth_neighbor_radii_chebyshev(&self, k: usize) -> Result<Vec<f64>> {
        let qty = self.check_k(k)?;
        let mut radii = Vec::with_capacity(self.n);
        let mut dists: Vec<f64> = Vec::new();
        for p in self.points.iter() {
            let neigh = self.tree.nearest_n::<SquaredEuclidean>(p, qty);
            let r_e2 = neigh[k].distance;
            if r_e2 <= 0.0 {
                // k+1 coincident points: Chebyshev radius is zero too
                radii.push(0.0);
                continue;
            }
            let bound = (K as f64) * r_e2 * (1.0 + 1e-9);
            dists.clear();
            let candidates = self.tree.within_unsorted::<SquaredEuclidean>(p, bound);
            dists.extend(candidates.iter().map(|nn| {
                <Chebyshev as DistanceMetric<f64, K>>::dist(p, &self.points[nn.item as usize])
            }));
            dists.sort_by(f64::total_cmp);
            radii.push(dists[k]);
        }
        Ok(radii)
    }
}
