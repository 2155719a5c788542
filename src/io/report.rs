//! Solve report rendering.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::solver::TourSolution;

/// What the CLI prints after a solve.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_held_karp::io::Report;
/// use u_held_karp::models::Tour;
/// use u_held_karp::solver::TourSolution;
///
/// let tour = Tour::from_cities(vec![0, 1, 0], 2).unwrap();
/// let report = Report::new(&TourSolution::new(tour, 10.0), Duration::from_millis(5));
/// let text = report.to_string();
/// assert!(text.starts_with("Optimal tour: 0, 1, 0\n"));
/// assert!(text.contains("Optimal tour cost: 10\n"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    tour: Vec<usize>,
    cost: f64,
    elapsed_secs: f64,
}

impl Report {
    /// Captures a solution and the time spent producing it.
    pub fn new(solution: &TourSolution, elapsed: Duration) -> Self {
        Self {
            tour: solution.tour().cities().to_vec(),
            cost: solution.cost(),
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }

    /// Single-line JSON rendering.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cities: Vec<String> = self.tour.iter().map(usize::to_string).collect();
        writeln!(f, "Optimal tour: {}", cities.join(", "))?;
        writeln!(f, "Optimal tour cost: {}", self.cost)?;
        writeln!(f, "Total execution time: {:.6} seconds", self.elapsed_secs)
    }
}
