//! Dense distance matrix.

use crate::error::{Error, Result};
use crate::models::PointRegistry;

/// A dense n×n distance matrix stored in row-major order.
///
/// Row = from-city, column = to-city. Diagonal entries are always
/// [`UNREACHABLE`]; a city is never its own neighbour. Off-diagonal entries
/// may also be unreachable when the matrix is supplied explicitly.
///
/// # Examples
///
/// ```
/// use u_held_karp::models::PointRegistry;
/// use u_held_karp::distance::DistanceMatrix;
///
/// let registry = PointRegistry::from_coords(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
/// let dm = DistanceMatrix::from_points(&registry).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!(!dm.is_reachable(1, 1));
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Cost stored for pairs that cannot be travelled directly.
pub const UNREACHABLE: f64 = f64::INFINITY;

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix for the registry's points.
    ///
    /// Fails with [`Error::InvalidInput`] if the registry is empty.
    pub fn from_points(registry: &PointRegistry) -> Result<Self> {
        let n = registry.len();
        if n == 0 {
            return Err(Error::invalid_input(
                "distance matrix needs at least one point",
            ));
        }

        let points = registry.points();
        let mut dm = Self::unreachable(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Entries must be non-negative; `f64::INFINITY` marks a missing edge.
    /// Diagonal entries are ignored and stored as [`UNREACHABLE`].
    pub fn from_data(size: usize, mut data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid_input(
                "distance matrix needs at least one point",
            ));
        }
        if data.len() != size * size {
            return Err(Error::invalid_input(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        if let Some(bad) = data.iter().position(|d| d.is_nan() || *d < 0.0) {
            return Err(Error::invalid_input(format!(
                "entry ({}, {}) is not a non-negative distance",
                bad / size,
                bad % size
            )));
        }
        for i in 0..size {
            data[i * size + i] = UNREACHABLE;
        }
        Ok(Self { data, size })
    }

    fn unreachable(size: usize) -> Self {
        Self {
            data: vec![UNREACHABLE; size * size],
            size,
        }
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Returns `true` if `to` can be reached directly from `from`.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        from != to && self.get(from, to).is_finite()
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a.is_finite() != b.is_finite() {
                    return false;
                }
                if a.is_finite() && (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
