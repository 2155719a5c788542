//! Distance matrices.
//!
//! Provides a dense distance matrix with an explicit unreachable marker.

mod matrix;

pub use matrix::{DistanceMatrix, UNREACHABLE};
