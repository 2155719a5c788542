//! Domain model types for the exact TSP solver.
//!
//! Cities are [`Point`]s owned by a [`PointRegistry`]; results are closed
//! [`Tour`]s over the registry's ids.

mod point;
mod tour;

pub use point::{Point, PointRegistry};
pub use tour::Tour;
