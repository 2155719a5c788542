//! Error type shared by the solver, the input reader, and the CLI.

use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Everything that can go wrong between reading coordinates and returning a tour.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The input file does not exist.
    #[error("input file not found: {}", path.display())]
    InputNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Any other I/O failure while reading input.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The coordinate file could not be parsed.
    #[error("malformed input at line {line}: {message}")]
    MalformedInput {
        /// 1-based line number where parsing stopped.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// An argument violates a documented precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The instance is too large to solve exactly with the configured budget.
    #[error(
        "instance of {cities} cities exceeds resource limit \
         (max {max_cities} cities, tables need {required_bytes} bytes of {max_bytes} allowed)"
    )]
    ResourceLimit {
        /// Number of cities requested.
        cities: usize,
        /// Largest city count the solver accepts.
        max_cities: usize,
        /// Estimated size of the DP tables, saturated at `u64::MAX`.
        required_bytes: u64,
        /// Configured memory budget for the DP tables.
        max_bytes: u64,
    },

    /// No end city has a reachable edge back to the start.
    #[error("no Hamiltonian cycle exists over the given distances")]
    NoSolution,

    /// The predecessor chain is broken; indicates an internal bug.
    #[error("tour reconstruction failed: {0}")]
    Reconstruction(String),

    /// The caller raised the cancel flag while the tables were being filled.
    #[error("solve cancelled")]
    Cancelled,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an [`Error::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an [`Error::MalformedInput`] for the given 1-based line.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }

    /// Creates an [`Error::Reconstruction`].
    pub fn reconstruction(message: impl Into<String>) -> Self {
        Self::Reconstruction(message.into())
    }
}
