use ndarray::{Array1, Array2};
use crate::estimators::approaches::knn;
pub use crate::estimators::traits::LocalValues;

/// Entropy estimation methods for various data types
///
/// This struct provides static methods for creating entropy estimators
/// for continuous data.
pub struct Entropy;

impl Entropy {
    /// Creates a new kNN entropy estimator for N-dimensional data
    ///
    /// # Arguments
    ///
    /// * `data` - Samples as rows, dimensions as columns
    /// * `k` - Which nearest neighbour (1-based) defines each sample's radius
    ///
    /// # Returns
    ///
    /// A kNN entropy estimator using the Euclidean ball, reporting nats.
    /// Use `with_ball`, `with_units` and `with_search` to reconfigure it.
    pub fn new_knn(data: Array2<f64>, k: usize) -> knn::KnnEntropy {
        knn::KnnEntropy::new(data, k)
    }

    /// Creates a new kNN entropy estimator for 1D data
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional samples
    /// * `k` - Which nearest neighbour (1-based) defines each sample's radius
    pub fn new_knn_1d(data: Array1<f64>, k: usize) -> knn::KnnEntropy {
        knn::KnnEntropy::new_1d(data, k)
    }

    /// Creates a new kNN entropy estimator with an explicit metric ball
    ///
    /// # Arguments
    ///
    /// * `data` - Samples as rows, dimensions as columns
    /// * `ball` - Metric ball (Manhattan, Euclidean or Chebyshev)
    /// * `k` - Which nearest neighbour (1-based) defines each sample's radius
    pub fn nd_knn_with_ball(data: Array2<f64>, ball: knn::Ball, k: usize) -> knn::KnnEntropy {
        knn::KnnEntropy::new(data, k).with_ball(ball)
    }
}
