//! Pixel to world coordinate conversion.
//!
//! Planning runs in map-image pixels. The navigation consumer expects
//! world coordinates, related to pixels by a per-axis affine map:
//!
//! ```text
//! world = (pixel - origin) / scale
//! ```
//!
//! A negative `scale_y` accounts for image rows growing downward while
//! world Y grows upward.

use serde::{Deserialize, Serialize};

use crate::core::{Path, Point};

/// Per-axis affine transform between pixel and world coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapTransform {
    /// Pixel position of the world origin
    pub origin: Point,
    /// Pixels per world unit along X
    pub scale_x: f32,
    /// Pixels per world unit along Y (negative flips the axis)
    pub scale_y: f32,
}

impl Default for MapTransform {
    fn default() -> Self {
        // Calibrated for the bundled map renders
        Self {
            origin: Point::new(448.94429, 206.82446),
            scale_x: 0.08839,
            scale_y: -0.08888,
        }
    }
}

impl MapTransform {
    /// Create a transform
    pub fn new(origin: Point, scale_x: f32, scale_y: f32) -> Self {
        Self {
            origin,
            scale_x,
            scale_y,
        }
    }

    /// Pixel to world
    #[inline]
    pub fn to_world(&self, pixel: Point) -> Point {
        Point::new(
            (pixel.x - self.origin.x) / self.scale_x,
            (pixel.y - self.origin.y) / self.scale_y,
        )
    }

    /// World to pixel
    #[inline]
    pub fn to_pixel(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale_x + self.origin.x,
            world.y * self.scale_y + self.origin.y,
        )
    }

    /// Convert every waypoint of a pixel-space path to world coordinates
    pub fn apply(&self, path: &Path) -> Path {
        path.points().iter().map(|&p| self.to_world(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin_maps_to_zero() {
        let t = MapTransform::default();
        let w = t.to_world(t.origin);
        assert_relative_eq!(w.x, 0.0);
        assert_relative_eq!(w.y, 0.0);
    }

    #[test]
    fn test_y_axis_flipped() {
        let t = MapTransform::default();
        let below = t.to_world(Point::new(t.origin.x, t.origin.y + 10.0));
        assert!(below.y < 0.0);
        let right = t.to_world(Point::new(t.origin.x + 10.0, t.origin.y));
        assert!(right.x > 0.0);
    }

    #[test]
    fn test_round_trip() {
        let t = MapTransform::default();
        let pixel = Point::new(120.0, 310.5);
        let back = t.to_pixel(t.to_world(pixel));
        assert_relative_eq!(back.x, pixel.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, pixel.y, epsilon = 1e-3);
    }

    #[test]
    fn test_apply_path() {
        let t = MapTransform::new(Point::new(10.0, 10.0), 2.0, -2.0);
        let path = Path::new(vec![Point::new(10.0, 10.0), Point::new(14.0, 6.0)]);
        let world = t.apply(&path);
        assert_eq!(world.points(), &[Point::new(0.0, 0.0), Point::new(2.0, 2.0)]);
    }

    #[test]
    fn test_yaml_partial_override() {
        let t: MapTransform = serde_yaml::from_str("scale_x: 0.5").unwrap();
        assert_eq!(t.scale_x, 0.5);
        assert_eq!(t.scale_y, MapTransform::default().scale_y);
    }
}
