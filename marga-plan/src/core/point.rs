//! Point and coordinate types for the planning surface.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this coordinate by (dx, dy), saturating at the i32 range
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> GridCoord {
        GridCoord::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// A position on the planning surface, in pixel units.
///
/// Serializes as an `(x, y)` pair so persisted paths stay a plain
/// sequence of coordinate pairs.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f32, f32)", into = "(f32, f32)")]
pub struct Point {
    /// X coordinate (column direction)
    pub x: f32,
    /// Y coordinate (row direction, grows downward in image space)
    pub y: f32,
}

impl Point {
    /// Create a new point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Grid cell containing this point
    #[inline]
    pub fn cell(&self) -> GridCoord {
        GridCoord::new(self.x.floor() as i32, self.y.floor() as i32)
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f32, f32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
        assert!((a.distance_squared(&b) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_cell_floors_negative_coordinates() {
        assert_eq!(Point::new(2.9, 0.1).cell(), GridCoord::new(2, 0));
        assert_eq!(Point::new(-0.5, 3.0).cell(), GridCoord::new(-1, 3));
    }

    #[test]
    fn test_point_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(1.5, -2.0)).unwrap();
        assert_eq!(json, "[1.5,-2.0]");
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Point::new(1.5, -2.0));
    }

    #[test]
    fn test_grid_coord_offset() {
        let a = GridCoord::new(1, 1);
        assert_eq!(a.offset(-1, 2), GridCoord::new(0, 3));
        let edge = GridCoord::new(i32::MAX, i32::MIN);
        assert_eq!(edge.offset(1, -1), edge);
    }
}
