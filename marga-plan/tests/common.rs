//! Test utilities for marga-plan integration tests.
//!
//! Map builders shared by the planning and pipeline scenarios.

#![allow(dead_code)]

use image::{Rgb, RgbImage};
use marga_plan::{GridCoord, MapColors, OccupancyMap, Point};

/// Obstacle-free square grid.
pub fn open_map(size: usize) -> OccupancyMap {
    OccupancyMap::free(size, size).unwrap()
}

/// Square grid with a full-height wall at `column`, open on rows `gap`.
pub fn wall_with_gap(
    size: usize,
    column: i32,
    gap: std::ops::RangeInclusive<i32>,
) -> OccupancyMap {
    OccupancyMap::from_fn(size, size, |c: GridCoord| {
        c.x == column && !gap.contains(&c.y)
    })
    .unwrap()
}

/// 50x50 grid walled at column 25 with a 3-cell gap centred on row 10.
pub fn gap_map() -> OccupancyMap {
    wall_with_gap(50, 25, 9..=11)
}

/// Cells visited by the segment stepping of `OccupancyMap::segment_blocked`.
pub fn segment_cells(a: Point, b: Point) -> Vec<GridCoord> {
    let (c0, c1) = (a.cell(), b.cell());
    let (dx, dy) = (c1.x - c0.x, c1.y - c0.y);
    let steps = dx.abs().max(dy.abs());
    (1..=steps)
        .map(|i| GridCoord::new(c0.x + i * dx / steps, c0.y + i * dy / steps))
        .collect()
}

/// Rendered map image: light floor, wall column with a gap, start and goal markers.
pub fn map_image(width: u32, height: u32, wall_x: u32, gap: std::ops::Range<u32>) -> RgbImage {
    let colors = MapColors::default();
    let mut img = RgbImage::from_pixel(width, height, Rgb([230, 220, 200]));
    for y in 0..height {
        if !gap.contains(&y) {
            img.put_pixel(wall_x, y, Rgb(colors.obstacle));
        }
    }
    img.put_pixel(5, height / 2, Rgb(colors.start));
    img.put_pixel(width - 6, height / 2, Rgb(colors.goal));
    img
}
