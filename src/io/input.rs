//! Coordinate file reader.
//!
//! ```text
//! 4          <- city count
//! 0 0        <- city 0 (tour start)
//! 0 1
//! 1 1
//! 1 0
//! ```
//!
//! One `x y` pair per line; extra tokens on a line are ignored and blank
//! lines are skipped.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::models::PointRegistry;

/// Reads a coordinate file from disk.
pub fn read_points(path: impl AsRef<Path>) -> Result<PointRegistry> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    let registry = parse_points(&text)?;
    debug!("read {} cities from {}", registry.len(), path.display());
    Ok(registry)
}

/// Parses coordinate file contents.
///
/// # Examples
///
/// ```
/// use u_held_karp::io::parse_points;
///
/// let registry = parse_points("2\n0 0\n3 4\n").unwrap();
/// assert_eq!(registry.len(), 2);
/// assert!(parse_points("3\n0 0\n3 4\n").is_err());
/// ```
pub fn parse_points(text: &str) -> Result<PointRegistry> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, header) = lines
        .next()
        .ok_or_else(|| Error::malformed(1, "missing city count"))?;
    let count_token = header.split_whitespace().next().unwrap_or_default();
    let count: usize = count_token.parse().map_err(|_| {
        Error::malformed(count_line, format!("invalid city count '{count_token}'"))
    })?;
    if count == 0 {
        return Err(Error::malformed(count_line, "city count must be at least 1"));
    }

    let mut registry = PointRegistry::new();
    let mut last_line = count_line;
    for (line_no, line) in lines.by_ref().take(count) {
        last_line = line_no;
        let mut tokens = line.split_whitespace();
        let x = parse_coord(tokens.next(), line_no, "x")?;
        let y = parse_coord(tokens.next(), line_no, "y")?;
        registry.push(x, y);
    }

    if registry.len() < count {
        return Err(Error::malformed(
            last_line,
            format!("expected {count} cities, found {}", registry.len()),
        ));
    }
    if let Some((line_no, _)) = lines.next() {
        return Err(Error::malformed(
            line_no,
            format!("unexpected content after {count} cities"),
        ));
    }

    Ok(registry)
}

fn parse_coord(token: Option<&str>, line: usize, axis: &str) -> Result<f64> {
    let token = token.ok_or_else(|| Error::malformed(line, format!("missing {axis} coordinate")))?;
    token.parse::<i32>().map(f64::from).map_err(|_| {
        Error::malformed(
            line,
            format!("invalid {axis} coordinate '{token}', expected an integer"),
        )
    })
}
