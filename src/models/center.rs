//! Distribution center type.

use super::Point;

/// A distribution center with a fixed declared capacity.
///
/// The capacity is the maximum number of packages the center may serve.
/// Algorithms keep their own remaining-capacity bookkeeping and never
/// modify this value.
///
/// # Examples
///
/// ```
/// use u_assign::models::Center;
///
/// let c = Center::new("C1", 0.0, 0.0, 15);
/// assert_eq!(c.id(), "C1");
/// assert_eq!(c.capacity(), 15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Center {
    id: String,
    location: Point,
    capacity: u32,
}

impl Center {
    /// Creates a new center.
    pub fn new(id: impl Into<String>, x: f64, y: f64, capacity: u32) -> Self {
        Self {
            id: id.into(),
            location: Point::new(x, y),
            capacity,
        }
    }

    /// Center identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Center location.
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

    /// Declared capacity (number of packages).
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_new() {
        let c = Center::new("C2", 10.0, 10.0, 0);
        assert_eq!(c.id(), "C2");
        assert_eq!(c.location(), Point::new(10.0, 10.0));
        assert_eq!(c.capacity(), 0);
    }
}
