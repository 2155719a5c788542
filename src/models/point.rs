//! City coordinates and the registry that owns them.

use serde::{Deserialize, Serialize};

/// A city location in the plane.
///
/// City 0 is the tour's start and end. Points are immutable once created;
/// ids are assigned by [`PointRegistry`] from their position.
///
/// # Examples
///
/// ```
/// use u_held_karp::models::Point;
///
/// let a = Point::new(0, 0.0, 0.0);
/// let b = Point::new(1, 3.0, 4.0);
/// assert_eq!(b.id(), 1);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// City ID (0 = start).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Ordered set of cities for one solve.
///
/// The registry assigns ids `0..n-1` from insertion order, so
/// `registry.get(i).id() == i` always holds.
///
/// # Examples
///
/// ```
/// use u_held_karp::models::PointRegistry;
///
/// let registry = PointRegistry::from_coords(&[(0.0, 0.0), (3.0, 4.0)]);
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.get(1).map(|p| p.id()), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointRegistry {
    points: Vec<Point>,
}

impl PointRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Builds a registry from coordinate pairs in index order.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        let mut registry = Self::new();
        for &(x, y) in coords {
            registry.push(x, y);
        }
        registry
    }

    /// Adds a city and returns its id.
    pub fn push(&mut self, x: f64, y: f64) -> usize {
        let id = self.points.len();
        self.points.push(Point::new(id, x, y));
        id
    }

    /// Returns the point with the given id.
    pub fn get(&self, id: usize) -> Option<&Point> {
        self.points.get(id)
    }

    /// All points in id order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no cities are registered.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(2, 10.0, 20.0);
        assert_eq!(p.id(), 2);
        assert_eq!(p.x(), 10.0);
        assert_eq!(p.y(), 20.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0, 0.0, 0.0);
        let b = Point::new(1, 3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = Point::new(0, 1.0, 2.0);
        let b = Point::new(1, 4.0, 6.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_point_distance_uses_matching_axes() {
        // x is compared with x, y with y
        let a = Point::new(0, 0.0, 10.0);
        let b = Point::new(1, 0.0, 13.0);
        assert!((a.distance_to(&b) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_registry_assigns_ids() {
        let mut r = PointRegistry::new();
        assert!(r.is_empty());
        assert_eq!(r.push(5.0, 5.0), 0);
        assert_eq!(r.push(1.0, 2.0), 1);
        assert_eq!(r.len(), 2);
        for (i, p) in r.points().iter().enumerate() {
            assert_eq!(p.id(), i);
        }
        assert!(r.get(2).is_none());
    }

    #[test]
    fn test_registry_from_coords() {
        let r = PointRegistry::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        assert_eq!(r.len(), 3);
        let p = r.get(2).expect("third point");
        assert_eq!((p.x(), p.y()), (1.0, 1.0));
    }
}
