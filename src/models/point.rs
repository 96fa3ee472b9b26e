//! City coordinates.

/// An immutable city location on an integer grid.
///
/// # Examples
///
/// ```
/// use u_salesman::models::Point;
///
/// let a = Point::new(0, 0);
/// let b = Point::new(3, 4);
/// assert!((a.distance(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
