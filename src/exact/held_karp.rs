//! Held-Karp subset dynamic programming.
//!
//! # Algorithm
//!
//! ```text
//! C(0, {0}) = 0
//! C(c, S)   = min over p in S \ {c}, d(p, c) reachable, of C(p, S \ {c}) + d(p, c)
//! OPT       = min over c != 0 of C(c, V) + d(c, 0)
//! ```
//!
//! Masks are visited in increasing numeric order, odd masks only. `S \ {c}`
//! is numerically smaller than `S`, so every state is final before it is
//! read. An update happens only on a strictly smaller cost, which makes the
//! lowest-index predecessor win ties; the selector applies the same rule to
//! the terminal city. Reconstructed tours are therefore deterministic.
//!
//! # Complexity
//!
//! O(n² · 2ⁿ) time, O(n · 2ⁿ) memory.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of the SIAM* 10(1), 196-210.

use log::{debug, info, warn};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;
use crate::solver::{TourSolution, TourSolver};

use super::cancel::CancelFlag;
use super::config::SolverConfig;
use super::table::StateTable;

fn full_mask(cities: usize) -> u32 {
    // cities <= HARD_MAX_CITIES < 32
    (1u32 << cities) - 1
}

/// Exact TSP solver.
///
/// Holds only configuration; every call builds and drops its own tables, so
/// one solver can serve many instances, from several threads if needed.
///
/// # Examples
///
/// ```
/// use u_held_karp::exact::HeldKarpSolver;
/// use u_held_karp::models::PointRegistry;
/// use u_held_karp::solver::TourSolver;
///
/// let registry = PointRegistry::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// let solution = HeldKarpSolver::default().solve(&registry).unwrap();
/// assert!((solution.cost() - 4.0).abs() < 1e-10);
/// assert_eq!(solution.tour().cities(), &[0, 3, 2, 1, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeldKarpSolver {
    config: SolverConfig,
}

impl HeldKarpSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Configuration applied to every solve.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl TourSolver for HeldKarpSolver {
    fn solve_matrix(&self, distances: &DistanceMatrix) -> Result<TourSolution> {
        HeldKarp::new(distances, &self.config)?.run()
    }
}

/// State of a single solve: the borrowed distances plus the owned tables.
///
/// The stages are public so callers (and tests) can inspect the tables
/// between them; [`run`](Self::run) chains them.
#[derive(Debug)]
pub struct HeldKarp<'a> {
    distances: &'a DistanceMatrix,
    table: StateTable,
    cancel: Option<CancelFlag>,
}

impl<'a> HeldKarp<'a> {
    /// Validates the instance size against `config`, then allocates the
    /// tables with only the base state set.
    pub fn new(distances: &'a DistanceMatrix, config: &SolverConfig) -> Result<Self> {
        let n = distances.size();
        if n == 0 {
            return Err(Error::invalid_input("cannot solve an empty instance"));
        }
        config.check_capacity(n)?;

        debug!(
            "allocating Held-Karp tables: {n} cities, {} bytes",
            StateTable::required_bytes(n)
        );
        Ok(Self {
            distances,
            table: StateTable::new(n),
            cancel: config.cancel.clone(),
        })
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.distances.size()
    }

    /// The cost and predecessor tables.
    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// Applies the recurrence to every odd mask in increasing order.
    pub fn fill(&mut self) -> Result<()> {
        let n = self.size();
        let full = full_mask(n);
        let mut updates: u64 = 0;

        for mask in (1..=full).step_by(2) {
            if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
                warn!("Held-Karp fill cancelled at subset {mask:#b}");
                return Err(Error::Cancelled);
            }

            for city in 1..n {
                let bit = 1u32 << city;
                if mask & bit == 0 {
                    continue;
                }
                let prev_mask = mask ^ bit;

                for prev in 0..n {
                    if prev_mask & (1u32 << prev) == 0 || !self.distances.is_reachable(prev, city)
                    {
                        continue;
                    }
                    let Some(base) = self.table.cost(prev, prev_mask) else {
                        continue;
                    };
                    let candidate = base + self.distances.get(prev, city);
                    if self.table.relax(city, mask, prev, candidate) {
                        updates += 1;
                    }
                }
            }
        }

        debug!("Held-Karp fill finished: {updates} state updates");
        Ok(())
    }

    /// Picks the cheapest way to close the cycle back to city 0.
    ///
    /// Returns `(cost, terminal_city)`. Ties keep the lowest city index.
    pub fn select(&self) -> Result<(f64, usize)> {
        let n = self.size();
        let full = full_mask(n);
        let mut best: Option<(f64, usize)> = None;

        for city in 1..n {
            if !self.distances.is_reachable(city, 0) {
                continue;
            }
            let Some(path_cost) = self.table.cost(city, full) else {
                continue;
            };
            let total = path_cost + self.distances.get(city, 0);
            if best.map_or(true, |(cost, _)| total < cost) {
                best = Some((total, city));
            }
        }

        best.ok_or(Error::NoSolution)
    }

    /// Walks the predecessor table back from `(terminal, all cities)` to the
    /// base state and returns the closed tour `[0, c1, .., terminal, 0]`.
    pub fn reconstruct(&self, terminal: usize) -> Result<Tour> {
        let n = self.size();
        if terminal == 0 || terminal >= n {
            return Err(Error::reconstruction(format!(
                "terminal city {terminal} is not a valid end city"
            )));
        }

        let mut mask = full_mask(n);
        let mut city = terminal;
        let mut reversed = Vec::with_capacity(n + 1);
        reversed.push(0);

        while city != 0 {
            let bit = 1u32 << city;
            if mask & bit == 0 {
                return Err(Error::reconstruction(format!(
                    "city {city} revisited (subset {mask:#b})"
                )));
            }
            reversed.push(city);
            let prev = self.table.predecessor(city, mask).ok_or_else(|| {
                Error::reconstruction(format!(
                    "no predecessor for city {city} in subset {mask:#b}"
                ))
            })?;
            mask ^= bit;
            city = prev;
        }

        if mask != 1 {
            return Err(Error::reconstruction(format!(
                "reached city 0 with unvisited cities left (subset {mask:#b})"
            )));
        }
        reversed.push(0);
        reversed.reverse();

        Tour::from_cities(reversed, n).map_err(|e| Error::reconstruction(e.to_string()))
    }

    /// Runs fill, select, and reconstruct, consuming the tables.
    pub fn run(mut self) -> Result<TourSolution> {
        let n = self.size();
        if n == 1 {
            return Ok(TourSolution::new(Tour::from_cities(vec![0, 0], 1)?, 0.0));
        }

        self.fill()?;
        let (cost, terminal) = self.select()?;
        let tour = self.reconstruct(terminal)?;
        info!("optimal tour over {n} cities: cost {cost}");
        Ok(TourSolution::new(tour, cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PointRegistry;

    fn matrix(coords: &[(f64, f64)]) -> DistanceMatrix {
        DistanceMatrix::from_points(&PointRegistry::from_coords(coords)).expect("valid")
    }

    fn unit_square() -> DistanceMatrix {
        matrix(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
    }

    fn solve(dm: &DistanceMatrix) -> TourSolution {
        HeldKarpSolver::default().solve_matrix(dm).expect("solves")
    }

    #[test]
    fn test_single_city() {
        let sol = solve(&matrix(&[(7.0, 7.0)]));
        assert_eq!(sol.tour().cities(), &[0, 0]);
        assert_eq!(sol.cost(), 0.0);
    }

    #[test]
    fn test_two_cities() {
        let sol = solve(&matrix(&[(0.0, 0.0), (3.0, 4.0)]));
        assert_eq!(sol.tour().cities(), &[0, 1, 0]);
        assert!((sol.cost() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_unit_square() {
        let sol = solve(&unit_square());
        assert!((sol.cost() - 4.0).abs() < 1e-10);
        // Terminals 1 and 3 tie at 4.0; the lower index wins.
        assert_eq!(sol.tour().cities(), &[0, 3, 2, 1, 0]);
    }

    #[test]
    fn test_line() {
        let sol = solve(&matrix(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]));
        assert!((sol.cost() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_seeded_table_before_fill() {
        let dm = unit_square();
        let hk = HeldKarp::new(&dm, &SolverConfig::default()).expect("fits");
        assert_eq!(hk.table().cost(0, 1), Some(0.0));
        assert_eq!(hk.table().cost(1, 0b11), None);
    }

    #[test]
    fn test_fill_two_city_states() {
        let dm = unit_square();
        let mut hk = HeldKarp::new(&dm, &SolverConfig::default()).expect("fits");
        hk.fill().expect("fills");
        let t = hk.table();
        assert_eq!(t.cost(1, 0b0011), Some(1.0));
        assert_eq!(t.predecessor(1, 0b0011), Some(0));
        assert!((t.cost(2, 0b0101).expect("reached") - 2f64.sqrt()).abs() < 1e-10);
        // only 0 -> 3 -> 2 covers {0, 2, 3} and ends at 2
        assert_eq!(t.cost(2, 0b1101), Some(2.0));
        assert_eq!(t.predecessor(2, 0b1101), Some(3));
    }

    #[test]
    fn test_fill_tie_keeps_lowest_predecessor() {
        // 0 -> 2 -> 1 -> 3 and 0 -> 1 -> 2 -> 3 cost the same; predecessor 1 is tried first.
        let dm = matrix(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        let mut hk = HeldKarp::new(&dm, &SolverConfig::default()).expect("fits");
        hk.fill().expect("fills");
        let full = 0b1111;
        let via_1 = hk.table().cost(3, full).expect("reached");
        assert!((via_1 - (1.0 + 2f64.sqrt() + 1.0)).abs() < 1e-10);
        assert_eq!(hk.table().predecessor(3, full), Some(1));
    }

    #[test]
    fn test_select_unit_square() {
        let dm = unit_square();
        let mut hk = HeldKarp::new(&dm, &SolverConfig::default()).expect("fits");
        hk.fill().expect("fills");
        let (cost, terminal) = hk.select().expect("selects");
        assert!((cost - 4.0).abs() < 1e-10);
        assert_eq!(terminal, 1);
    }

    #[test]
    fn test_reconstruct_rejects_bad_terminal() {
        let dm = unit_square();
        let mut hk = HeldKarp::new(&dm, &SolverConfig::default()).expect("fits");
        hk.fill().expect("fills");
        assert!(matches!(hk.reconstruct(0), Err(Error::Reconstruction(_))));
        assert!(matches!(hk.reconstruct(9), Err(Error::Reconstruction(_))));
    }

    #[test]
    fn test_reconstruct_before_fill_fails() {
        let dm = unit_square();
        let hk = HeldKarp::new(&dm, &SolverConfig::default()).expect("fits");
        assert!(matches!(hk.reconstruct(1), Err(Error::Reconstruction(_))));
    }

    #[test]
    fn test_no_closing_edge() {
        // Every city can be reached from 0, none can return.
        let inf = f64::INFINITY;
        let dm = DistanceMatrix::from_data(
            3,
            vec![
                0.0, 1.0, 1.0, //
                inf, 0.0, 1.0, //
                inf, 1.0, 0.0,
            ],
        )
        .expect("valid");
        let err = HeldKarpSolver::default().solve_matrix(&dm).unwrap_err();
        assert!(matches!(err, Error::NoSolution));
    }

    #[test]
    fn test_missing_edges_are_routed_around() {
        // 1 and 3 cannot be adjacent and 0-2 is expensive, leaving the ring 0-1-2-3.
        let inf = f64::INFINITY;
        let dm = DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, 5.0, 1.0, //
                1.0, 0.0, 1.0, inf, //
                5.0, 1.0, 0.0, 1.0, //
                1.0, inf, 1.0, 0.0,
            ],
        )
        .expect("valid");
        let sol = solve(&dm);
        assert!((sol.cost() - 4.0).abs() < 1e-10);
        assert_eq!(sol.tour().cities(), &[0, 3, 2, 1, 0]);
    }

    #[test]
    fn test_resource_limit_before_allocation() {
        let coords: Vec<(f64, f64)> = (0..25).map(|i| (i as f64, 0.0)).collect();
        let dm = matrix(&coords);
        let err = HeldKarp::new(&dm, &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, Error::ResourceLimit { cities: 25, .. }));
    }

    #[test]
    fn test_cancelled() {
        let flag = CancelFlag::new();
        flag.cancel();
        let solver = HeldKarpSolver::new(SolverConfig::default().with_cancel_flag(flag));
        let err = solver.solve_matrix(&unit_square()).unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[test]
    fn test_cancelled_during_fill() {
        // 20 cities: the fill runs far longer than the delay below
        let coords: Vec<(f64, f64)> = (0..20i32)
            .map(|i| (f64::from(i * 7 % 13), f64::from(i * 11 % 17)))
            .collect();
        let dm = matrix(&coords);
        let flag = CancelFlag::new();
        let solver = HeldKarpSolver::new(SolverConfig::default().with_cancel_flag(flag.clone()));

        let result = std::thread::scope(|s| {
            let handle = s.spawn(|| solver.solve_matrix(&dm));
            std::thread::sleep(std::time::Duration::from_millis(50));
            flag.cancel();
            handle.join().expect("solver thread")
        });
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[test]
    fn test_cost_matches_tour_length() {
        let dm = matrix(&[(0.0, 0.0), (5.0, 1.0), (2.0, 7.0), (8.0, 3.0), (4.0, 4.0)]);
        let sol = solve(&dm);
        assert!((sol.tour().length(&dm) - sol.cost()).abs() < 1e-9);
    }
}
