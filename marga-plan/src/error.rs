//! Error types for marga-plan
//!
//! Setup-time failures only. Planning outcomes such as an exhausted
//! iteration budget are reported through
//! [`PlanFailure`](crate::planning::PlanFailure), not as errors.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// marga-plan error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Grid with zero width or height
    #[error("Occupancy grid has zero area")]
    EmptyGrid,

    /// Cell buffer does not match the declared grid size
    #[error("Invalid grid dimensions: expected {expected} cells, got {actual}")]
    InvalidDimensions {
        /// width * height
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    /// Planner or smoother parameters out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Start or goal marker color absent from the map image
    #[error("Marker not found in map image: {0}")]
    MarkerNotFound(&'static str),

    /// Image decoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path file encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file read or parse error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SVG rendering error
    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}
