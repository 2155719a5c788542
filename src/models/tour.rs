//! Closed tour type.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

/// A Hamiltonian cycle over cities `0..n-1`.
///
/// Stored as `n + 1` city ids: starts at city 0, visits every other city
/// exactly once, and returns to city 0.
///
/// # Examples
///
/// ```
/// use u_held_karp::models::Tour;
///
/// let tour = Tour::from_cities(vec![0, 2, 1, 0], 3).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert_eq!(tour.interior(), &[2, 1]);
/// assert!(Tour::from_cities(vec![0, 1, 1, 0], 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Builds a tour, checking the Hamiltonian-cycle invariant for `n` cities.
    pub fn from_cities(cities: Vec<usize>, n: usize) -> Result<Self> {
        let tour = Self { cities };
        tour.validate(n)?;
        Ok(tour)
    }

    /// Checks that this is a closed tour over exactly `n` cities.
    pub fn validate(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::invalid_input("a tour needs at least one city"));
        }
        if self.cities.len() != n + 1 {
            return Err(Error::invalid_input(format!(
                "tour has {} entries, expected {}",
                self.cities.len(),
                n + 1
            )));
        }
        if self.cities[0] != 0 || self.cities[n] != 0 {
            return Err(Error::invalid_input("tour must start and end at city 0"));
        }

        let mut seen = vec![false; n];
        seen[0] = true;
        for &c in self.interior() {
            if c >= n {
                return Err(Error::invalid_input(format!("city {c} out of range")));
            }
            if seen[c] {
                return Err(Error::invalid_input(format!("city {c} visited twice")));
            }
            seen[c] = true;
        }
        Ok(())
    }

    /// The full closed sequence, including both copies of city 0.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Cities between the start and the return to city 0.
    pub fn interior(&self) -> &[usize] {
        match self.cities.len() {
            0 | 1 => &[],
            len => &self.cities[1..len - 1],
        }
    }

    /// Number of entries (`n + 1`).
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour holds no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Sum of edge costs along the tour.
    ///
    /// A single-city tour `[0, 0]` has length zero; the self-loop is not an edge.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        self.cities
            .windows(2)
            .filter(|w| w[0] != w[1])
            .map(|w| distances.get(w[0], w[1]))
            .sum()
    }
}
