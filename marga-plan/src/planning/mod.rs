//! Path planning on the occupancy map.
//!
//! - **RRT\***: sampling-based planner with cost-based rewiring
//! - **Path Smoothing**: pushes waypoints away from obstacle boundaries
//!
//! ## RRT* Planning
//!
//! ```rust,ignore
//! use marga_plan::planning::{RrtStarPlanner, RrtStarConfig};
//!
//! let planner = RrtStarPlanner::new(&map, RrtStarConfig::default());
//! let result = planner.plan_seeded(start, goal, 42);
//! if result.success {
//!     println!("Path found with {} waypoints", result.path.len());
//! }
//! ```
//!
//! ## Path Smoothing
//!
//! ```rust,ignore
//! use marga_plan::planning::PathSmoother;
//!
//! let smoother = PathSmoother::with_defaults(&map);
//! let smooth_path = smoother.smooth(&result.path);
//! ```

pub mod rrt_star;
pub mod smoothing;
pub mod tree;

pub use rrt_star::{
    Extension, PlanFailure, PlanResult, RetryConfig, RetryOutcome, RrtStarConfig, RrtStarPlanner,
    find_path, plan_with_retries, steer,
};
pub use smoothing::{PathSmoother, SmoothingConfig};
pub use tree::{Node, NodeId, Tree};
