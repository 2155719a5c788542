//! Coordinate file input and result reporting.

mod input;
mod report;

pub use input::{parse_points, read_points};
pub use report::Report;
