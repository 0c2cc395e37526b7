//! Map provider: builds the occupancy map from a rendered map image.
//!
//! ```rust,ignore
//! use marga_plan::map::{MapColors, MapImage};
//!
//! let scan = MapImage::load("map.png", &MapColors::default())?;
//! let planner = RrtStarPlanner::with_defaults(&scan.map);
//! let result = planner.plan_seeded(scan.start, scan.goal, 0);
//! ```

mod loader;

pub use loader::{MapColors, MapImage, MapScan};
