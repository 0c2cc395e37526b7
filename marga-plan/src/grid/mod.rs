//! Occupancy grid for collision queries.
//!
//! The [`OccupancyMap`] is built once from the map provider and shared
//! read-only by the planner and the smoother:
//!
//! ```rust,ignore
//! use marga_plan::{OccupancyMap, Point};
//!
//! let map = OccupancyMap::from_fn(50, 50, |c| c.x == 25 && c.y != 10)?;
//! assert!(map.segment_blocked(Point::new(20.0, 20.0), Point::new(30.0, 20.0)));
//! ```

mod storage;

pub use storage::OccupancyMap;
