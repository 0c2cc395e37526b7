//! Map loader for color-keyed map images.
//!
//! Turns a rendered top-down map into an occupancy grid plus start and
//! goal positions. Obstacles, start and goal are each identified by an
//! exact RGB color.

use std::path::Path;

use image::{Rgb, RgbImage};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{Error, Result};
use crate::grid::OccupancyMap;

/// Marker and obstacle colors (RGB)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapColors {
    /// Color of obstacle pixels
    pub obstacle: [u8; 3],
    /// Color of the start marker
    pub start: [u8; 3],
    /// Color of the goal marker
    pub goal: [u8; 3],
}

impl Default for MapColors {
    fn default() -> Self {
        Self {
            obstacle: [47, 27, 11], // dark brown walls
            start: [255, 255, 255],
            goal: [0, 0, 255],
        }
    }
}

/// Occupancy map and endpoints extracted from an image
#[derive(Clone, Debug)]
pub struct MapScan {
    /// Obstacle grid, one cell per pixel
    pub map: OccupancyMap,
    /// First pixel carrying the start color
    pub start: Point,
    /// First pixel carrying the goal color
    pub goal: Point,
}

/// Color-keyed map image reader
pub struct MapImage;

impl MapImage {
    /// Load and scan an image file
    pub fn load<P: AsRef<Path>>(path: P, colors: &MapColors) -> Result<MapScan> {
        let path = path.as_ref();
        let img = image::open(path)?.into_rgb8();
        debug!(
            "[MapImage] loaded {} ({}x{})",
            path.display(),
            img.width(),
            img.height()
        );
        Self::from_rgb(&img, colors)
    }

    /// Scan an in-memory RGB image
    pub fn from_rgb(img: &RgbImage, colors: &MapColors) -> Result<MapScan> {
        let (width, height) = img.dimensions();
        let obstacle = Rgb(colors.obstacle);
        let blocked: Vec<bool> = img.pixels().map(|p| *p == obstacle).collect();
        let map = OccupancyMap::new(width as usize, height as usize, blocked)?;

        let start = find_marker(img, Rgb(colors.start)).ok_or(Error::MarkerNotFound("start"))?;
        let goal = find_marker(img, Rgb(colors.goal)).ok_or(Error::MarkerNotFound("goal"))?;

        debug!(
            "[MapImage] {} blocked cells, start=({},{}), goal=({},{})",
            map.blocked_count(),
            start.x,
            start.y,
            goal.x,
            goal.y
        );

        Ok(MapScan { map, start, goal })
    }
}

/// First pixel (row-major) with exactly `color`
fn find_marker(img: &RgbImage, color: Rgb<u8>) -> Option<Point> {
    img.enumerate_pixels()
        .find(|(_, _, p)| **p == color)
        .map(|(x, y, _)| Point::new(x as f32, y as f32))
}
