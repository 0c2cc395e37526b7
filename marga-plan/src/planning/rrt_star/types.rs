//! RRT* planner types.

use serde::{Deserialize, Serialize};

use crate::core::{Path, Point};
use crate::error::{Error, Result};
use crate::planning::tree::NodeId;

/// RRT* planner configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RrtStarConfig {
    /// Maximum number of sampling iterations before giving up
    pub max_iterations: usize,
    /// Longest edge produced by steering (pixels)
    pub max_step_distance: f32,
    /// Probability of sampling the goal instead of a uniform point
    pub goal_sample_rate: f32,
    /// Neighborhood radius for parent selection and rewiring (pixels)
    pub search_radius: f32,
    /// Start and goal closer than this are treated as already connected
    pub goal_tolerance: f32,
    /// Keep a copy of the final tree edges in the result (for rendering)
    pub record_tree: bool,
}

impl Default for RrtStarConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            max_step_distance: 10.0,
            goal_sample_rate: 0.2,
            search_radius: 30.0,
            goal_tolerance: 1.0,
            record_tree: false,
        }
    }
}

impl RrtStarConfig {
    /// Builder-style setter for the step distance
    pub fn with_max_step(mut self, max_step_distance: f32) -> Self {
        self.max_step_distance = max_step_distance;
        self
    }

    /// Builder-style setter for the iteration budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder-style setter for tree recording
    pub fn with_tree_recording(mut self, record_tree: bool) -> Self {
        self.record_tree = record_tree;
        self
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.max_step_distance > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "max_step_distance must be positive, got {}",
                self.max_step_distance
            )));
        }
        if !(self.search_radius > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "search_radius must be positive, got {}",
                self.search_radius
            )));
        }
        if !(0.0..=1.0).contains(&self.goal_sample_rate) {
            return Err(Error::InvalidConfig(format!(
                "goal_sample_rate must be within [0, 1], got {}",
                self.goal_sample_rate
            )));
        }
        if !(self.goal_tolerance >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "goal_tolerance must be non-negative, got {}",
                self.goal_tolerance
            )));
        }
        Ok(())
    }
}

/// Outcome of a single planner iteration
#[derive(Clone, Debug, PartialEq)]
pub enum Extension {
    /// Steered step crossed an obstacle; nothing was added
    Rejected,
    /// A node was added under `parent`; `rewired` lists the nodes that
    /// were re-parented through it
    Added {
        /// Newly inserted node
        node: NodeId,
        /// Parent chosen for it
        parent: NodeId,
        /// Neighbors re-parented under the new node
        rewired: Vec<NodeId>,
    },
    /// The goal was connected; `goal` is the goal's node id
    ReachedGoal {
        /// Node holding the goal position
        goal: NodeId,
    },
}

/// Result of RRT* planning
#[derive(Clone, Debug)]
pub struct PlanResult {
    /// Path from start to goal (empty if no path found)
    pub path: Path,
    /// Cached tree cost of the goal node
    pub cost: f32,
    /// Sampling iterations consumed
    pub iterations: usize,
    /// Tree size when planning stopped
    pub nodes: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PlanFailure>,
    /// Parent -> child edges of the final tree, when recording is enabled
    pub tree_edges: Vec<(Point, Point)>,
}

impl PlanResult {
    /// Create a failed result
    pub(super) fn failed(reason: PlanFailure, iterations: usize, nodes: usize) -> Self {
        Self {
            path: Path::default(),
            cost: f32::INFINITY,
            iterations,
            nodes,
            success: false,
            failure_reason: Some(reason),
            tree_edges: Vec::new(),
        }
    }

    /// Start and goal already coincide: single-point path, no search
    pub(super) fn trivial(start: Point) -> Self {
        Self {
            path: Path::new(vec![start]),
            cost: 0.0,
            iterations: 0,
            nodes: 1,
            success: true,
            failure_reason: None,
            tree_edges: Vec::new(),
        }
    }

    /// Euclidean length of the returned path
    pub fn length(&self) -> f32 {
        self.path.length()
    }
}

/// Reason for planning failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanFailure {
    /// Start lies on a blocked cell or outside the map
    StartBlocked,
    /// Goal lies on a blocked cell or outside the map
    GoalBlocked,
    /// Iteration budget consumed without connecting the goal
    PlanningExhausted,
}

impl PlanFailure {
    /// True for input problems that no amount of sampling can fix
    pub fn is_degenerate_input(&self) -> bool {
        matches!(self, PlanFailure::StartBlocked | PlanFailure::GoalBlocked)
    }
}

impl std::fmt::Display for PlanFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanFailure::StartBlocked => write!(f, "start is blocked"),
            PlanFailure::GoalBlocked => write!(f, "goal is blocked"),
            PlanFailure::PlanningExhausted => write!(f, "iteration budget exhausted"),
        }
    }
}
