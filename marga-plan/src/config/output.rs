//! Output configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Output settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputSection {
    /// Path file (JSON list of `[x, y]` pairs)
    #[serde(default = "defaults::path_file")]
    pub path_file: String,

    /// SVG visualization file
    #[serde(default = "defaults::svg_file")]
    pub svg_file: String,

    /// Write the SVG visualization
    #[serde(default = "defaults::enabled")]
    pub write_svg: bool,

    /// Save world coordinates instead of pixels
    #[serde(default)]
    pub world_coordinates: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path_file: defaults::path_file(),
            svg_file: defaults::svg_file(),
            write_svg: defaults::enabled(),
            world_coordinates: false,
        }
    }
}
