//! Module containing tests for the generalized kNN entropy estimator.
mod ball_tests;
mod bias_tests;
mod volume_tests;
