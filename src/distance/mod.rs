//! Distances between packages and centers.
//!
//! Provides the Euclidean point distance and a dense package×center cost
//! matrix.

mod matrix;

pub use matrix::CostMatrix;

use crate::models::Point;

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use u_assign::distance::distance;
/// use u_assign::models::Point;
///
/// let a = Point::new(1.0, 1.0);
/// let b = Point::new(4.0, 5.0);
/// assert!((distance(a, b) - 5.0).abs() < 1e-10);
/// assert_eq!(distance(a, b), distance(b, a));
/// assert_eq!(distance(a, a), 0.0);
/// ```
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_axis_aligned() {
        assert!((distance(Point::new(0.0, 0.0), Point::new(10.0, 0.0)) - 10.0).abs() < 1e-10);
        assert!((distance(Point::new(0.0, -2.0), Point::new(0.0, 3.0)) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_symmetric_non_negative() {
        let a = Point::new(-7.5, 2.25);
        let b = Point::new(3.0, -1.0);
        assert_eq!(distance(a, b), distance(b, a));
        assert!(distance(a, b) > 0.0);
        assert_eq!(distance(b, b), 0.0);
    }
}
