//! # MargaPlan
//!
//! Sampling-based path planning on 2D occupancy grids.
//!
//! ## Overview
//!
//! MargaPlan finds a collision-free path between two points of a
//! top-down map and refines it for a navigation consumer:
//!
//! - **Occupancy Map** - read-only grid of free and blocked cells
//! - **RRT\*** - random tree growth with lowest-cost parent choice and rewiring
//! - **Path Smoothing** - pushes waypoints away from nearby obstacles
//! - **Map Images** - color-keyed extraction of walls, start and goal
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marga_plan::{MapColors, MapImage, PathSmoother, RrtStarPlanner};
//!
//! let scan = MapImage::load("map.png", &MapColors::default())?;
//! let planning_map = scan.map.inflated_except(1, &[scan.start, scan.goal]);
//!
//! let planner = RrtStarPlanner::with_defaults(&planning_map);
//! let result = planner.plan_seeded(scan.start, scan.goal, 42);
//!
//! if result.success {
//!     let path = PathSmoother::with_defaults(&scan.map).smooth(&result.path);
//!     println!("{} waypoints, length {:.1}", path.len(), path.length());
//! }
//! ```
//!
//! ## Coordinate System
//!
//! Image space:
//! - X: column index, growing right
//! - Y: row index, growing down
//! - A point maps to the cell `(floor(x), floor(y))`

#![warn(missing_docs)]

// Core types
pub mod core;

// Occupancy grid
pub mod grid;

// RRT* planning and smoothing
pub mod planning;

// Map image loading
pub mod map;

// Path files, world transform, SVG export
pub mod io;

// Unified configuration
pub mod config;

// Error types
pub mod error;

// Re-export commonly used types
pub use crate::core::{GridCoord, Path, Point, path_length};

pub use grid::OccupancyMap;

pub use planning::{
    PathSmoother, PlanFailure, PlanResult, RetryConfig, RetryOutcome, RrtStarConfig,
    RrtStarPlanner, SmoothingConfig, Tree, find_path, plan_with_retries,
};

pub use map::{MapColors, MapImage, MapScan};

pub use io::{MapTransform, SvgConfig, SvgVisualizer, load_path, save_path};

pub use config::MargaConfig;

pub use error::{Error, Result};
