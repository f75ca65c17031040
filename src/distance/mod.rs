//! Distance model.
//!
//! A dense, validated distance matrix and the cyclic tour-cost evaluator
//! every search strategy shares.

mod matrix;

pub use matrix::DistanceMatrix;
