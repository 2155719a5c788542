//! Solver configuration and the pre-allocation resource guard.

use crate::error::{Error, Result};

use super::cancel::CancelFlag;
use super::table::StateTable;

/// Largest city count whose subset masks fit the engine's `u32` masks with
/// room for table indexing.
pub const HARD_MAX_CITIES: usize = 30;

/// Configuration for [`HeldKarpSolver`](super::HeldKarpSolver).
///
/// # Examples
///
/// ```
/// use u_held_karp::exact::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_max_cities(16)
///     .with_max_table_bytes(64 << 20);
/// assert_eq!(config.max_cities, 16);
/// assert!(config.check_capacity(12).is_ok());
/// assert!(config.check_capacity(17).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Largest instance accepted (clamped to [`HARD_MAX_CITIES`]).
    pub max_cities: usize,
    /// Memory budget for the cost and predecessor tables, in bytes.
    pub max_table_bytes: u64,
    /// Optional flag checked once per subset mask.
    pub cancel: Option<CancelFlag>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_cities: 24,
            max_table_bytes: 4 << 30,
            cancel: None,
        }
    }
}

impl SolverConfig {
    /// Sets the largest accepted city count.
    pub fn with_max_cities(mut self, max_cities: usize) -> Self {
        self.max_cities = max_cities;
        self
    }

    /// Sets the memory budget for both DP tables.
    pub fn with_max_table_bytes(mut self, bytes: u64) -> Self {
        self.max_table_bytes = bytes;
        self
    }

    /// Attaches a flag the solver polls between subsets.
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// City ceiling actually enforced.
    pub fn effective_max_cities(&self) -> usize {
        self.max_cities.min(HARD_MAX_CITIES)
    }

    /// Rejects instances whose tables would not fit, without allocating.
    pub fn check_capacity(&self, cities: usize) -> Result<()> {
        let max_cities = self.effective_max_cities();
        let required_bytes = StateTable::required_bytes(cities);
        if cities > max_cities || required_bytes > self.max_table_bytes {
            return Err(Error::ResourceLimit {
                cities,
                max_cities,
                required_bytes,
                max_bytes: self.max_table_bytes,
            });
        }
        Ok(())
    }
}
