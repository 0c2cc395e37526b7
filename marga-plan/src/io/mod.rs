//! Path output and visualization.
//!
//! - **Path files**: JSON sequence of `[x, y]` pairs
//! - **World transform**: pixel to world conversion for the navigation consumer
//! - **SVG export**: map, explored tree and paths for inspection
//!
//! ## Saving a Path
//!
//! ```rust,ignore
//! use marga_plan::io::{MapTransform, save_path};
//! use std::path::Path;
//!
//! let world = MapTransform::default().apply(&smoothed);
//! save_path(&world, Path::new("output/path.json"))?;
//! ```
//!
//! ## SVG Visualization
//!
//! ```rust,ignore
//! use marga_plan::io::{SvgConfig, SvgVisualizer};
//!
//! SvgVisualizer::new(&map, SvgConfig::default())
//!     .with_title("RRT* run")
//!     .with_tree(result.tree_edges.clone())
//!     .with_path(result.path.clone())
//!     .with_endpoints(start, goal)
//!     .save(Path::new("output/path.svg"))?;
//! ```

pub mod path_file;
pub mod svg;
pub mod transform;

pub use path_file::{load_path, read_path, save_path, write_path};
pub use svg::{SvgColorScheme, SvgConfig, SvgVisualizer};
pub use transform::MapTransform;
