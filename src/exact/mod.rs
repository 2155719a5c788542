//! Exact solving via Held-Karp dynamic programming.
//!
//! - [`HeldKarpSolver`] — [`TourSolver`](crate::solver::TourSolver) implementation
//! - [`HeldKarp`] — one solve's tables, with fill / select / reconstruct stages
//! - [`StateTable`] — cost and predecessor tables indexed by (city, subset)
//! - [`SolverConfig`] — city ceiling, memory budget, cancellation

mod cancel;
mod config;
mod held_karp;
mod table;

pub use cancel::CancelFlag;
pub use config::{SolverConfig, HARD_MAX_CITIES};
pub use held_karp::{HeldKarp, HeldKarpSolver};
pub use table::StateTable;
