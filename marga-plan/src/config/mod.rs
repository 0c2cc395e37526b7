//! Configuration loading for marga-plan.
//!
//! Loads all settings from a single YAML file with sensible defaults.
//! Every section and field may be omitted.
//!
//! ```rust,ignore
//! use marga_plan::config::MargaConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = MargaConfig::load_default()?;
//!
//! let planner = RrtStarPlanner::new(&map, config.planner.clone());
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | `planner` | RRT* iteration budget, step, goal bias, rewiring radius |
//! | `smoothing` | Obstacle-clearance window |
//! | `retry` | Attempts and base seed |
//! | [`MapSection`] | Image colors, obstacle inflation, world transform |
//! | [`OutputSection`] | Path and SVG output files |
//!
//! ## Example YAML
//!
//! ```yaml
//! planner:
//!   max_iterations: 10000
//!   max_step_distance: 10.0
//!   goal_sample_rate: 0.2
//!   search_radius: 30.0
//! retry:
//!   max_attempts: 20
//! map:
//!   inflation_radius: 1
//!   colors:
//!     obstacle: [47, 27, 11]
//! ```

mod defaults;
mod map;
mod marga;
mod output;

pub use map::MapSection;
pub use marga::MargaConfig;
pub use output::OutputSection;
