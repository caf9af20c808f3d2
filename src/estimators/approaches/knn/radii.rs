// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, ArrayView2};
use tracing::trace;

use super::ball::Ball;
use crate::error::{EntropyError, Result};
use crate::estimators::approaches::common_nd::dataset::NdDataset;

/// Strategy used to find the k-th nearest neighbour of every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborSearch {
    /// Full pairwise distance matrix, each row sorted.
    #[default]
    BruteForce,
    /// KD-tree queries for 1 to 4 dimensions, brute force otherwise.
    KdTree,
}

/// Symmetric (n x n) distance matrix with a zero diagonal.
pub fn pairwise_distances(data: ArrayView2<'_, f64>, ball: Ball) -> Array2<f64> {
    let n = data.nrows();
    let mut dist = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in (i + 1)..n {
            let d = ball.distance(data.row(i), data.row(j));
            dist[(i, j)] = d;
            dist[(j, i)] = d;
        }
    }
    dist
}

/// Distance from every sample to its k-th nearest neighbour under `ball`.
///
/// Each row of the distance matrix is sorted (stable) with the self-distance
/// at position 0, so the k-th neighbour sits at index `k`.
pub fn knn_radii(data: ArrayView2<'_, f64>, ball: Ball, k: usize) -> Result<Vec<f64>> {
    let n = data.nrows();
    if k < 1 || k >= n {
        return Err(EntropyError::InsufficientSamples { k, n });
    }

    let dist = pairwise_distances(data, ball);
    let mut radii = Vec::with_capacity(n);
    let mut row: Vec<f64> = Vec::with_capacity(n);
    for (i, dists) in dist.rows().into_iter().enumerate() {
        row.clear();
        row.extend(dists.iter().copied());
        row.sort_by(f64::total_cmp);
        trace!(sample = i, radius = row[k], "k-th neighbour radius");
        radii.push(row[k]);
    }
    Ok(radii)
}

/// Like [`knn_radii`], dispatching on the requested search strategy.
pub fn knn_radii_with(
    data: ArrayView2<'_, f64>,
    ball: Ball,
    k: usize,
    search: NeighborSearch,
) -> Result<Vec<f64>> {
    match search {
        NeighborSearch::BruteForce => knn_radii(data, ball, k),
        NeighborSearch::KdTree => match kd_tree_radii(data, ball, k) {
            Some(radii) => radii,
            None => knn_radii(data, ball, k),
        },
    }
}

/// KD-tree radii when the dimension has a compiled tree, `None` otherwise.
fn kd_tree_radii(data: ArrayView2<'_, f64>, ball: Ball, k: usize) -> Option<Result<Vec<f64>>> {
    fn run<const K: usize>(
        data: ArrayView2<'_, f64>,
        ball: Ball,
        k: usize,
    ) -> Option<Result<Vec<f64>>> {
        NdDataset::<K>::from_view(data).map(|nd| nd.kth_neighbor_radii(ball, k))
    }

    match data.ncols() {
        1 => run::<1>(data, ball, k),
        2 => run::<2>(data, ball, k),
        3 => run::<3>(data, ball, k),
        4 => run::<4>(data, ball, k),
        _ => None,
    }
}
