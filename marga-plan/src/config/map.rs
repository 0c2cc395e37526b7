//! Map input configuration section.

use serde::{Deserialize, Serialize};

use crate::io::MapTransform;
use crate::map::MapColors;

use super::defaults;

/// Map settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapSection {
    /// Marker and obstacle colors of the map image
    #[serde(default)]
    pub colors: MapColors,

    /// Clearance (cells) added around obstacles before planning
    #[serde(default = "defaults::inflation_radius")]
    pub inflation_radius: usize,

    /// Pixel to world transform for saved paths
    #[serde(default)]
    pub transform: MapTransform,
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            colors: MapColors::default(),
            inflation_radius: defaults::inflation_radius(),
            transform: MapTransform::default(),
        }
    }
}
