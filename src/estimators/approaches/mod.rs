pub mod common_nd;
pub mod knn;

// Re-exports so users and tests can import
// gknn::estimators::approaches::* ergonomically.
pub use knn::{Ball, KnnEntropy, NeighborSearch, Units};
