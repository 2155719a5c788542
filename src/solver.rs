//! Solver trait shared by the exact engine and alternative tour finders.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{PointRegistry, Tour};

/// A tour together with its total cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSolution {
    tour: Tour,
    cost: f64,
}

impl TourSolution {
    /// Creates a solution from a tour and its cost.
    pub fn new(tour: Tour, cost: f64) -> Self {
        Self { tour, cost }
    }

    /// The closed tour, starting and ending at city 0.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Total tour cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Consumes the solution, returning the tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }
}

/// Something that turns a set of cities into a closed tour.
///
/// [`HeldKarpSolver`](crate::exact::HeldKarpSolver) is exact. A heuristic
/// for larger instances (local search bounded by an iteration count and a
/// plateau limit, say) plugs in through the same trait and works on the same
/// [`PointRegistry`] and [`DistanceMatrix`].
///
/// # Examples
///
/// ```
/// use u_held_karp::distance::DistanceMatrix;
/// use u_held_karp::models::Tour;
/// use u_held_karp::solver::{TourSolution, TourSolver};
/// use u_held_karp::Result;
///
/// /// Visits cities in index order.
/// struct IdentityTour;
///
/// impl TourSolver for IdentityTour {
///     fn solve_matrix(&self, distances: &DistanceMatrix) -> Result<TourSolution> {
///         let n = distances.size();
///         let mut cities: Vec<usize> = (0..n).collect();
///         cities.push(0);
///         let tour = Tour::from_cities(cities, n)?;
///         let cost = tour.length(distances);
///         Ok(TourSolution::new(tour, cost))
///     }
/// }
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 2.0, 2.0, 0.0]).unwrap();
/// assert_eq!(IdentityTour.solve_matrix(&dm).unwrap().cost(), 4.0);
/// ```
pub trait TourSolver: Send + Sync {
    /// Solves over a precomputed distance matrix; city 0 is the start.
    fn solve_matrix(&self, distances: &DistanceMatrix) -> Result<TourSolution>;

    /// Builds the Euclidean matrix for `registry` and solves over it.
    fn solve(&self, registry: &PointRegistry) -> Result<TourSolution> {
        let distances = DistanceMatrix::from_points(registry)?;
        self.solve_matrix(&distances)
    }
}
