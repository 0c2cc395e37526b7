//! RRT* sampling-based planner.
//!
//! Implements RRT* on the occupancy map with:
//! - Goal-biased sampling from an injected random generator
//! - Bounded steering and segment collision gating
//! - Lowest-cost parent selection and neighborhood rewiring
//!
//! A failed run is a normal outcome. [`plan_with_retries`] re-runs the
//! planner with successive seeds until one attempt connects the goal.

mod planner;
mod types;

pub use planner::{RrtStarPlanner, steer};
pub use types::{Extension, PlanFailure, PlanResult, RrtStarConfig};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::grid::OccupancyMap;

/// Retry policy for repeated planning attempts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts (at least one attempt always runs)
    pub max_attempts: usize,
    /// Seed of the first attempt; attempt `k` uses `base_seed + k`
    pub base_seed: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 20,
            base_seed: 0,
        }
    }
}

/// Result of [`plan_with_retries`]
#[derive(Clone, Debug)]
pub struct RetryOutcome {
    /// Result of the last attempt
    pub result: PlanResult,
    /// Attempts made
    pub attempts: usize,
    /// Seed used by the last attempt
    pub seed: u64,
}

/// Plan repeatedly with fresh seeds until a path is found.
///
/// Stops early on start/goal problems, since resampling cannot fix them.
pub fn plan_with_retries(
    planner: &RrtStarPlanner<'_>,
    retry: &RetryConfig,
    start: Point,
    goal: Point,
) -> RetryOutcome {
    let max_attempts = retry.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        let seed = retry.base_seed.wrapping_add(attempt as u64);
        let result = planner.plan_seeded(start, goal, seed);
        attempt += 1;

        let give_up = match result.failure_reason {
            None => {
                info!(
                    "[RrtStar] path found on attempt {} (seed {}): {} waypoints, length {:.1}",
                    attempt,
                    seed,
                    result.path.len(),
                    result.length()
                );
                true
            }
            Some(reason) if reason.is_degenerate_input() => {
                warn!("[RrtStar] cannot plan: {}", reason);
                true
            }
            Some(reason) => {
                if attempt < max_attempts {
                    info!(
                        "[RrtStar] attempt {} (seed {}) failed: {}, retrying",
                        attempt, seed, reason
                    );
                } else {
                    warn!("[RrtStar] no path after {} attempts", attempt);
                }
                attempt >= max_attempts
            }
        };

        if give_up {
            return RetryOutcome {
                result,
                attempts: attempt,
                seed,
            };
        }
    }
}

/// Quick planning with default configuration and a fixed seed
pub fn find_path(map: &OccupancyMap, start: Point, goal: Point, seed: u64) -> PlanResult {
    RrtStarPlanner::with_defaults(map).plan_seeded(start, goal, seed)
}
