//! Package and location types.

use serde::{Deserialize, Serialize};

/// A location on the plane.
///
/// # Examples
///
/// ```
/// use u_assign::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    ///
    /// Finite whenever the coordinate differences are finite.
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A delivery package.
///
/// The delivery weight scales the distance to the serving center in the
/// total cost, so heavier packages pull harder toward nearby centers.
///
/// # Examples
///
/// ```
/// use u_assign::models::Package;
///
/// let p = Package::new("P1", 10.0, 20.0, 30.0);
/// assert_eq!(p.id(), "P1");
/// assert_eq!(p.weight(), 30.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    id: String,
    location: Point,
    weight: f64,
}

impl Package {
    /// Creates a new package.
    pub fn new(id: impl Into<String>, x: f64, y: f64, weight: f64) -> Self {
        Self {
            id: id.into(),
            location: Point::new(x, y),
            weight,
        }
    }

    /// Package identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Drop location.
    pub fn location(&self) -> Point {
        self.location
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.location.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.location.y
    }

    /// Delivery-time weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-10);
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn test_point_distance_large_coordinates() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3e200, 4e200);
        let d = a.distance_to(b);
        assert!(d.is_finite());
        assert!((d / 5e200 - 1.0).abs() < 1e-12);
        assert_eq!(d, b.distance_to(a));
    }

    #[test]
    fn test_point_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_package_new() {
        let p = Package::new("P7", 1.5, -2.0, 12.0);
        assert_eq!(p.id(), "P7");
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -2.0);
        assert_eq!(p.location(), Point::new(1.5, -2.0));
        assert_eq!(p.weight(), 12.0);
    }
}
