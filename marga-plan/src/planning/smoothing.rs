//! Obstacle-clearance path smoothing.
//!
//! Pushes interior waypoints away from nearby obstacle cells:
//! - Endpoints are never moved
//! - Each waypoint gets at most one nudge, driven by the first blocked
//!   cell found in its local window

use serde::{Deserialize, Serialize};

use crate::core::{Path, Point};
use crate::grid::OccupancyMap;

/// Path smoothing configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Half-width of the square window inspected around each waypoint
    pub window_radius: i32,
    /// Skip smoothing entirely when false
    pub enabled: bool,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window_radius: 3,
            enabled: true,
        }
    }
}

/// Path smoother
pub struct PathSmoother<'a> {
    map: &'a OccupancyMap,
    config: SmoothingConfig,
}

impl<'a> PathSmoother<'a> {
    /// Create a new path smoother
    pub fn new(map: &'a OccupancyMap, config: SmoothingConfig) -> Self {
        Self { map, config }
    }

    /// Create with default configuration
    pub fn with_defaults(map: &'a OccupancyMap) -> Self {
        Self::new(map, SmoothingConfig::default())
    }

    /// Return a copy of `path` with interior waypoints nudged off obstacles
    pub fn smooth(&self, path: &Path) -> Path {
        let mut smoothed = path.clone();
        self.smooth_in_place(&mut smoothed);
        smoothed
    }

    /// Nudge interior waypoints of `path` in place; returns how many moved
    pub fn smooth_in_place(&self, path: &mut Path) -> usize {
        if !self.config.enabled || path.len() <= 2 {
            return 0;
        }

        let last = path.len() - 1;
        let mut moved = 0;
        for point in &mut path.points_mut()[1..last] {
            if let Some(nudged) = self.nudge(*point) {
                *point = nudged;
                moved += 1;
            }
        }

        log::debug!(
            "[Smoother] nudged {} of {} interior waypoints",
            moved,
            last - 1
        );
        moved
    }

    /// Displacement of a single waypoint, if its window holds an obstacle
    pub fn nudge(&self, point: Point) -> Option<Point> {
        let radius = self.config.window_radius;
        let (dx, dy) = self.map.first_obstacle_in_window(point, radius)?;
        Some(Point::new(
            point.x + push(dx, radius),
            point.y + push(dy, radius),
        ))
    }
}

/// Move away from an obstacle at offset `d` until it sits just outside the
/// window on that axis
fn push(d: i32, radius: i32) -> f32 {
    let margin = (radius + 1 - d.abs()) as f32;
    if d < 0 { margin } else { -margin }
}
