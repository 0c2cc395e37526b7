//! Occupancy map storage and collision queries.

use crate::core::{GridCoord, Point};
use crate::error::{Error, Result};

/// Immutable free/blocked grid used as the planner's collision oracle.
///
/// The grid uses image conventions:
/// - Cell (0, 0) is the top-left pixel
/// - Positive X is to the right (columns)
/// - Positive Y is down (rows)
/// - A point `(x, y)` lies in cell `(floor(x), floor(y))`
///
/// Anything outside the grid is reported as blocked.
#[derive(Clone, Debug)]
pub struct OccupancyMap {
    /// Row-major blocked flags
    blocked: Vec<bool>,
    /// Grid width in cells
    width: usize,
    /// Grid height in cells
    height: usize,
}

impl OccupancyMap {
    /// Create a map from a row-major blocked buffer
    pub fn new(width: usize, height: usize, blocked: Vec<bool>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid);
        }
        let expected = width * height;
        if blocked.len() != expected {
            return Err(Error::InvalidDimensions {
                expected,
                actual: blocked.len(),
            });
        }
        Ok(Self {
            blocked,
            width,
            height,
        })
    }

    /// Create a map with every cell free
    pub fn free(width: usize, height: usize) -> Result<Self> {
        Self::new(width, height, vec![false; width * height])
    }

    /// Create a map by classifying every cell with `is_blocked`
    pub fn from_fn<F>(width: usize, height: usize, mut is_blocked: F) -> Result<Self>
    where
        F: FnMut(GridCoord) -> bool,
    {
        let mut blocked = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                blocked.push(is_blocked(GridCoord::new(x as i32, y as i32)));
            }
        }
        Self::new(width, height, blocked)
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Blocked state of a cell; out-of-bounds cells are blocked
    #[inline]
    pub fn is_cell_blocked(&self, coord: GridCoord) -> bool {
        match self.coord_to_index(coord) {
            Some(i) => self.blocked[i],
            None => true,
        }
    }

    /// Blocked state of the cell containing `point`
    #[inline]
    pub fn is_blocked(&self, point: Point) -> bool {
        self.is_cell_blocked(point.cell())
    }

    /// Check whether the straight segment `a -> b` crosses a blocked cell.
    ///
    /// The segment is walked in `max(|dx|, |dy|)` unit steps between the
    /// cells of `a` and `b`; the start cell itself is not sampled. A
    /// zero-length segment is never blocked. Otherwise an endpoint off the
    /// grid blocks the segment, however far away it lies.
    pub fn segment_blocked(&self, a: Point, b: Point) -> bool {
        let from = a.cell();
        let to = b.cell();
        if from == to {
            return false;
        }
        if !self.is_valid_coord(from) || !self.is_valid_coord(to) {
            return true;
        }

        // Both cells are on the grid, so the products stay far below i64::MAX
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        let steps = dx.abs().max(dy.abs());

        (1..=steps).any(|i| {
            let x = i64::from(from.x) + i * dx / steps;
            let y = i64::from(from.y) + i * dy / steps;
            self.is_cell_blocked(GridCoord::new(x as i32, y as i32))
        })
    }

    /// First blocked cell in the `(2r+1)²` window around `center`.
    ///
    /// Scans rows from `-radius` to `radius`, columns inner, and returns the
    /// offset `(dx, dy)` of the first blocked cell. Cells outside the grid
    /// count as blocked.
    pub fn first_obstacle_in_window(&self, center: Point, radius: i32) -> Option<(i32, i32)> {
        let c = center.cell();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if self.is_cell_blocked(c.offset(dx, dy)) {
                    return Some((dx, dy));
                }
            }
        }
        None
    }

    /// True if any cell in the window around `center` is blocked
    #[inline]
    pub fn local_window_has_obstacle(&self, center: Point, radius: i32) -> bool {
        self.first_obstacle_in_window(center, radius).is_some()
    }

    /// Derive a map whose obstacles are grown by `radius` cells.
    ///
    /// A cell is blocked in the result when any cell within Chebyshev
    /// distance `radius` is blocked in `self`. Grid borders are not grown.
    pub fn inflated(&self, radius: usize) -> OccupancyMap {
        if radius == 0 {
            return self.clone();
        }
        let r = radius as i32;
        let mut blocked = vec![false; self.cell_count()];

        for coord in self.iter_blocked() {
            for dy in -r..=r {
                for dx in -r..=r {
                    if let Some(i) = self.coord_to_index(coord.offset(dx, dy)) {
                        blocked[i] = true;
                    }
                }
            }
        }

        OccupancyMap {
            blocked,
            width: self.width,
            height: self.height,
        }
    }

    /// Inflate like [`inflated`](Self::inflated), leaving the cells under
    /// `keep` in their raw state.
    ///
    /// Used for the start and goal markers: a marker beside a wall stays
    /// plannable while every other step still keeps the clearance.
    pub fn inflated_except(&self, radius: usize, keep: &[Point]) -> OccupancyMap {
        let mut map = self.inflated(radius);
        for point in keep {
            if let Some(i) = self.coord_to_index(point.cell()) {
                map.blocked[i] = self.blocked[i];
            }
        }
        map
    }

    /// Iterate over blocked cell coordinates in row-major order
    pub fn iter_blocked(&self) -> impl Iterator<Item = GridCoord> + '_ {
        let width = self.width;
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(move |(i, _)| GridCoord::new((i % width) as i32, (i / width) as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_map() -> OccupancyMap {
        // 10x10 with a vertical wall at column 5, rows 0..8
        OccupancyMap::from_fn(10, 10, |c| c.x == 5 && c.y < 8).unwrap()
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(matches!(OccupancyMap::free(0, 10), Err(Error::EmptyGrid)));
        assert!(matches!(
            OccupancyMap::new(2, 2, vec![false; 3]),
            Err(Error::InvalidDimensions {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let map = OccupancyMap::free(10, 10).unwrap();
        assert!(!map.is_blocked(Point::new(0.0, 0.0)));
        assert!(!map.is_blocked(Point::new(9.9, 9.9)));
        assert!(map.is_blocked(Point::new(-0.1, 5.0)));
        assert!(map.is_blocked(Point::new(10.0, 5.0)));
        assert!(map.is_blocked(Point::new(5.0, 10.0)));
    }

    #[test]
    fn test_segment_through_wall() {
        let map = wall_map();
        assert!(map.segment_blocked(Point::new(1.0, 2.0), Point::new(8.0, 2.0)));
        // Below the wall end
        assert!(!map.segment_blocked(Point::new(1.0, 9.0), Point::new(8.0, 9.0)));
        // Parallel to the wall
        assert!(!map.segment_blocked(Point::new(2.0, 0.0), Point::new(2.0, 9.0)));
    }

    #[test]
    fn test_segment_is_symmetric_for_simple_crossings() {
        let map = wall_map();
        let a = Point::new(8.0, 1.0);
        let b = Point::new(2.0, 4.0);
        assert!(map.segment_blocked(a, b));
        assert!(map.segment_blocked(b, a));
    }

    #[test]
    fn test_zero_length_segment_never_blocked() {
        let map = wall_map();
        let p = Point::new(5.2, 3.4); // inside the wall
        assert!(map.is_blocked(p));
        assert!(!map.segment_blocked(p, p));
        assert!(!map.segment_blocked(p, Point::new(5.9, 3.1)));
    }

    #[test]
    fn test_segment_endpoint_out_of_bounds() {
        let map = OccupancyMap::free(10, 10).unwrap();
        assert!(map.segment_blocked(Point::new(5.0, 5.0), Point::new(12.0, 5.0)));
    }

    #[test]
    fn test_segment_far_outside_grid_is_blocked() {
        let long = OccupancyMap::free(1000, 10).unwrap();
        assert!(long.segment_blocked(Point::new(0.0, 0.0), Point::new(2.2e6, 0.0)));
        assert!(long.segment_blocked(Point::new(2.2e6, 0.0), Point::new(0.0, 0.0)));
        assert!(!long.segment_blocked(Point::new(0.0, 0.0), Point::new(999.5, 9.5)));

        let map = OccupancyMap::free(10, 10).unwrap();
        assert!(map.segment_blocked(Point::new(-1e10, 0.0), Point::new(5.0, 5.0)));
        assert!(map.segment_blocked(Point::new(5.0, 5.0), Point::new(f32::MAX, f32::MIN)));
        assert!(map.segment_blocked(Point::new(-0.5, 5.0), Point::new(3.0, 5.0)));
    }

    #[test]
    fn test_window_scan_order() {
        let mut blocked = vec![false; 100];
        // (6, 4) and (4, 6) relative to center (5, 5) -> offsets (1,-1), (-1,1)
        blocked[4 * 10 + 6] = true;
        blocked[6 * 10 + 4] = true;
        let map = OccupancyMap::new(10, 10, blocked).unwrap();

        let center = Point::new(5.5, 5.5);
        assert_eq!(map.first_obstacle_in_window(center, 1), Some((1, -1)));
        assert!(map.local_window_has_obstacle(center, 1));
        assert!(!map.local_window_has_obstacle(Point::new(1.0, 1.0), 1));
    }

    #[test]
    fn test_window_near_border_sees_outside_as_blocked() {
        let map = OccupancyMap::free(10, 10).unwrap();
        assert_eq!(
            map.first_obstacle_in_window(Point::new(0.0, 5.0), 2),
            Some((-2, -2))
        );
        assert!(!map.local_window_has_obstacle(Point::new(5.0, 5.0), 2));
    }

    #[test]
    fn test_inflation_grows_obstacles() {
        let map = OccupancyMap::from_fn(7, 7, |c| c.x == 3 && c.y == 3).unwrap();
        let inflated = map.inflated(1);
        assert_eq!(inflated.blocked_count(), 9);
        assert!(inflated.is_cell_blocked(GridCoord::new(2, 2)));
        assert!(inflated.is_cell_blocked(GridCoord::new(4, 4)));
        assert!(!inflated.is_cell_blocked(GridCoord::new(5, 3)));
        assert_eq!(map.inflated(0).blocked_count(), 1);
    }

    #[test]
    fn test_inflation_keeps_marker_cells_raw() {
        let map = OccupancyMap::from_fn(7, 7, |c| c.x == 3).unwrap();
        let marker = Point::new(4.5, 2.5);
        assert!(map.inflated(1).is_blocked(marker));

        let keep = [marker, Point::new(3.0, 6.0), Point::new(-4.0, 0.0)];
        let inflated = map.inflated_except(1, &keep);
        assert!(!inflated.is_blocked(marker));
        // Raw obstacles under a kept point stay blocked
        assert!(inflated.is_blocked(Point::new(3.0, 6.0)));
        assert!(inflated.is_cell_blocked(GridCoord::new(4, 3)));
        assert_eq!(inflated.blocked_count(), map.inflated(1).blocked_count() - 1);
    }

    #[test]
    fn test_iter_blocked_row_major() {
        let map = OccupancyMap::from_fn(4, 4, |c| (c.x + c.y) == 3).unwrap();
        let cells: Vec<_> = map.iter_blocked().collect();
        assert_eq!(cells.first(), Some(&GridCoord::new(3, 0)));
        assert_eq!(cells.last(), Some(&GridCoord::new(0, 3)));
        assert_eq!(cells.len(), 4);
    }
}
