//! Core types for the marga-plan planner.
//!
//! - [`Point`] and [`GridCoord`]: coordinate types
//! - [`Path`]: ordered point sequence produced by the planner

mod path;
mod point;

pub use path::{Path, path_length};
pub use point::{GridCoord, Point};
