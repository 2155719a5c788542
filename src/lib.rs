//! # u-held-karp
//!
//! Exact Euclidean travelling salesman tours for small instances, using
//! Held-Karp subset dynamic programming with predecessor backtracking.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, PointRegistry, Tour)
//! - [`distance`] — Distance matrix with an explicit unreachable marker
//! - [`exact`] — Held-Karp engine (state tables, driver, selector, reconstructor)
//! - [`solver`] — `TourSolver` trait and `TourSolution`
//! - [`io`] — Coordinate file parsing and result reports
//!
//! ## Example
//!
//! ```
//! use u_held_karp::exact::HeldKarpSolver;
//! use u_held_karp::models::PointRegistry;
//! use u_held_karp::solver::TourSolver;
//!
//! let registry = PointRegistry::from_coords(&[(0.0, 0.0), (3.0, 4.0)]);
//! let solution = HeldKarpSolver::default().solve(&registry)?;
//! assert_eq!(solution.tour().cities(), &[0, 1, 0]);
//! assert!((solution.cost() - 10.0).abs() < 1e-10);
//! # Ok::<(), u_held_karp::Error>(())
//! ```

pub mod distance;
mod error;
pub mod exact;
pub mod io;
pub mod models;
pub mod solver;

pub use error::{Error, Result};
