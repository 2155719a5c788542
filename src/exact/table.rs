//! Cost and predecessor tables indexed by (city, subset mask).
//!
//! Every mask the engine touches contains city 0, so bit 0 is dropped from
//! the column index: column = `mask >> 1`. Both tables therefore hold
//! `n · 2^(n-1)` entries.

use std::mem::size_of;

/// Cost and predecessor tables for one Held-Karp solve.
///
/// `cost(c, S)` is the cheapest path that starts at city 0, visits exactly
/// the cities in `S`, and ends at `c`. `predecessor(c, S)` is the city
/// visited just before `c` on that path.
#[derive(Debug, Clone)]
pub struct StateTable {
    cities: usize,
    columns: usize,
    costs: Vec<f64>,
    predecessors: Vec<Option<u8>>,
}

impl StateTable {
    /// Bytes both tables need for `cities` cities, saturated at `u64::MAX`.
    pub fn required_bytes(cities: usize) -> u64 {
        if cities == 0 {
            return 0;
        }
        let per_state = (size_of::<f64>() + size_of::<Option<u8>>()) as u64;
        u32::try_from(cities - 1)
            .ok()
            .and_then(|shift| 1u64.checked_shl(shift))
            .and_then(|columns| columns.checked_mul(cities as u64))
            .and_then(|states| states.checked_mul(per_state))
            .unwrap_or(u64::MAX)
    }

    /// Allocates both tables and seeds the base state `cost(0, {0}) = 0`.
    ///
    /// Callers must run the capacity check first.
    pub(crate) fn new(cities: usize) -> Self {
        let columns = 1usize << (cities - 1);
        let mut table = Self {
            cities,
            columns,
            costs: vec![f64::INFINITY; cities * columns],
            predecessors: vec![None; cities * columns],
        };
        let base = table.index(0, 1);
        table.costs[base] = 0.0;
        table
    }

    fn index(&self, city: usize, mask: u32) -> usize {
        debug_assert!(mask & 1 == 1, "mask {mask:#b} does not contain city 0");
        city * self.columns + (mask >> 1) as usize
    }

    /// Number of cities the table was built for.
    pub fn cities(&self) -> usize {
        self.cities
    }

    /// Best known cost for the state, or `None` if no path reaches it.
    pub fn cost(&self, city: usize, mask: u32) -> Option<f64> {
        let cost = self.costs[self.index(city, mask)];
        cost.is_finite().then_some(cost)
    }

    /// Predecessor on the best path into the state; `None` for the base
    /// state and for unreached states.
    pub fn predecessor(&self, city: usize, mask: u32) -> Option<usize> {
        self.predecessors[self.index(city, mask)].map(usize::from)
    }

    /// Records `cost` via `prev` if it is strictly cheaper than the stored
    /// value. Ties keep the earlier predecessor.
    pub(crate) fn relax(&mut self, city: usize, mask: u32, prev: usize, cost: f64) -> bool {
        let idx = self.index(city, mask);
        if cost < self.costs[idx] {
            self.costs[idx] = cost;
            // prev < cities <= HARD_MAX_CITIES, fits in u8
            self.predecessors[idx] = Some(prev as u8);
            true
        } else {
            false
        }
    }
}
