//! Planned path type.

use serde::{Deserialize, Serialize};

use super::point::Point;

/// Ordered sequence of points from start to goal (inclusive).
///
/// A path owns copies of its points; it never aliases the planning tree
/// it was extracted from.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Create a path from a point sequence
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points as a slice
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Mutable access to the points (used by in-place post-processing)
    #[inline]
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the path has no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point (start)
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last point (goal)
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Total Euclidean length
    pub fn length(&self) -> f32 {
        path_length(&self.points)
    }

    /// Consecutive point pairs
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Calculate total path length
pub fn path_length(path: &[Point]) -> f32 {
    if path.len() < 2 {
        return 0.0;
    }

    path.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_length() {
        let path = Path::new(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 4.0),
        ]);
        assert!((path.length() - 7.0).abs() < 1e-6);
        assert_eq!(path.segments().count(), 2);
    }

    #[test]
    fn test_single_point_has_zero_length() {
        let path = Path::new(vec![Point::new(5.0, 5.0)]);
        assert_eq!(path.length(), 0.0);
        assert_eq!(path.first(), path.last());
    }

    #[test]
    fn test_path_serializes_as_pair_list() {
        let path = Path::new(vec![Point::new(0.0, 1.0), Point::new(2.0, 3.0)]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "[[0.0,1.0],[2.0,3.0]]");
    }
}
