//! Main MargaConfig and loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::planning::{RetryConfig, RrtStarConfig, SmoothingConfig};

use super::map::MapSection;
use super::output::OutputSection;

/// Full planner configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// RRT* settings
    #[serde(default)]
    pub planner: RrtStarConfig,

    /// Path smoothing settings
    #[serde(default)]
    pub smoothing: SmoothingConfig,

    /// Retry policy across seeds
    #[serde(default)]
    pub retry: RetryConfig,

    /// Map image settings
    #[serde(default)]
    pub map: MapSection,

    /// Output files
    #[serde(default)]
    pub output: OutputSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        self.planner.validate()?;
        if self.smoothing.window_radius < 0 {
            return Err(Error::InvalidConfig(format!(
                "smoothing.window_radius must be non-negative, got {}",
                self.smoothing.window_radius
            )));
        }
        Ok(())
    }
}
