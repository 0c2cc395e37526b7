//! RRT* planner implementation.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::Point;
use crate::grid::OccupancyMap;
use crate::planning::tree::{NodeId, Tree};

use super::types::{Extension, PlanFailure, PlanResult, RrtStarConfig};

/// Step from `from` toward `toward`, at most `max_step` long
pub fn steer(from: Point, toward: Point, max_step: f32) -> Point {
    let dist = from.distance(&toward);
    if dist <= max_step {
        toward
    } else {
        from + (toward - from) * (max_step / dist)
    }
}

/// RRT* planner over an occupancy map.
///
/// The planner only borrows the map; every call to [`plan`](Self::plan)
/// grows a fresh tree, so runs never share state.
pub struct RrtStarPlanner<'a> {
    map: &'a OccupancyMap,
    config: RrtStarConfig,
}

impl<'a> RrtStarPlanner<'a> {
    /// Create a new RRT* planner
    pub fn new(map: &'a OccupancyMap, config: RrtStarConfig) -> Self {
        Self { map, config }
    }

    /// Create with default configuration
    pub fn with_defaults(map: &'a OccupancyMap) -> Self {
        Self::new(map, RrtStarConfig::default())
    }

    /// Planner configuration
    pub fn config(&self) -> &RrtStarConfig {
        &self.config
    }

    /// Plan with a generator seeded from `seed`
    pub fn plan_seeded(&self, start: Point, goal: Point, seed: u64) -> PlanResult {
        let mut rng = StdRng::seed_from_u64(seed);
        self.plan(start, goal, &mut rng)
    }

    /// Find a path from start to goal, drawing samples from `rng`
    pub fn plan<R: Rng>(&self, start: Point, goal: Point, rng: &mut R) -> PlanResult {
        trace!(
            "[RrtStar] plan: start=({:.1},{:.1}) goal=({:.1},{:.1})",
            start.x, start.y, goal.x, goal.y
        );

        if self.map.is_blocked(start) {
            debug!(
                "[RrtStar] FAILED: StartBlocked at ({:.1},{:.1})",
                start.x, start.y
            );
            return PlanResult::failed(PlanFailure::StartBlocked, 0, 0);
        }
        if self.map.is_blocked(goal) {
            debug!(
                "[RrtStar] FAILED: GoalBlocked at ({:.1},{:.1})",
                goal.x, goal.y
            );
            return PlanResult::failed(PlanFailure::GoalBlocked, 0, 0);
        }
        if start.distance(&goal) <= self.config.goal_tolerance {
            debug!("[RrtStar] start within goal tolerance, nothing to plan");
            return PlanResult::trivial(start);
        }

        let mut tree = Tree::with_root(start);

        for iteration in 1..=self.config.max_iterations {
            if let Extension::ReachedGoal { goal: goal_node } = self.extend(&mut tree, goal, rng) {
                let path = tree.path_to_root(goal_node);
                debug!(
                    "[RrtStar] SUCCESS: {} waypoints, cost={:.2}, iterations={}, nodes={}",
                    path.len(),
                    tree.cost(goal_node),
                    iteration,
                    tree.len()
                );
                return PlanResult {
                    path,
                    cost: tree.cost(goal_node),
                    iterations: iteration,
                    nodes: tree.len(),
                    success: true,
                    failure_reason: None,
                    tree_edges: self.recorded_edges(&tree),
                };
            }
        }

        debug!(
            "[RrtStar] FAILED: PlanningExhausted after {} iterations ({} nodes)",
            self.config.max_iterations,
            tree.len()
        );
        let mut result = PlanResult::failed(
            PlanFailure::PlanningExhausted,
            self.config.max_iterations,
            tree.len(),
        );
        result.tree_edges = self.recorded_edges(&tree);
        result
    }

    /// Run one RRT* iteration against `tree`.
    ///
    /// Sample, steer from the nearest node, gate on collisions, insert under
    /// the cheapest admissible neighbor, try the goal, then rewire the
    /// neighborhood through the new node.
    pub fn extend<R: Rng>(&self, tree: &mut Tree, goal: Point, rng: &mut R) -> Extension {
        let sample = self.sample(goal, rng);
        let nearest = tree.nearest(sample);
        let nearest_pos = tree.position(nearest);
        let candidate = steer(nearest_pos, sample, self.config.max_step_distance);

        if self.map.segment_blocked(nearest_pos, candidate) {
            return Extension::Rejected;
        }

        let neighbors = tree.within_radius(candidate, self.config.search_radius);
        let (parent, edge_cost) = self.choose_parent(tree, nearest, &neighbors, candidate);
        let node = tree.add_node(candidate, parent, edge_cost);

        if !self.map.segment_blocked(candidate, goal) {
            let goal_node = if candidate == goal {
                node
            } else {
                tree.add_node(goal, node, candidate.distance(&goal))
            };
            return Extension::ReachedGoal { goal: goal_node };
        }

        let rewired = self.rewire_neighbors(tree, node, parent, &neighbors);
        Extension::Added {
            node,
            parent,
            rewired,
        }
    }

    /// Goal with probability `goal_sample_rate`, otherwise uniform on the map.
    ///
    /// The rate is clamped to [0, 1]; NaN never samples the goal.
    fn sample<R: Rng>(&self, goal: Point, rng: &mut R) -> Point {
        let rate = f64::from(self.config.goal_sample_rate);
        let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        if rng.random_bool(rate) {
            goal
        } else {
            Point::new(
                rng.random_range(0.0..self.map.width() as f32),
                rng.random_range(0.0..self.map.height() as f32),
            )
        }
    }

    /// Cheapest collision-free parent for `candidate`; `nearest` is the floor
    fn choose_parent(
        &self,
        tree: &Tree,
        nearest: NodeId,
        neighbors: &[NodeId],
        candidate: Point,
    ) -> (NodeId, f32) {
        let mut best = nearest;
        let mut best_edge = tree.position(nearest).distance(&candidate);
        let mut best_cost = tree.cost(nearest) + best_edge;

        for &id in neighbors {
            if id == nearest {
                continue;
            }
            let pos = tree.position(id);
            let edge = pos.distance(&candidate);
            let cost = tree.cost(id) + edge;
            if cost < best_cost && !self.map.segment_blocked(pos, candidate) {
                best = id;
                best_edge = edge;
                best_cost = cost;
            }
        }

        (best, best_edge)
    }

    /// Re-parent neighbors that become strictly cheaper through `node`
    fn rewire_neighbors(
        &self,
        tree: &mut Tree,
        node: NodeId,
        parent: NodeId,
        neighbors: &[NodeId],
    ) -> Vec<NodeId> {
        let node_pos = tree.position(node);
        let node_cost = tree.cost(node);
        let mut rewired = Vec::new();

        for &id in neighbors {
            if id == parent {
                continue;
            }
            let pos = tree.position(id);
            let edge = node_pos.distance(&pos);
            if node_cost + edge < tree.cost(id)
                && !self.map.segment_blocked(node_pos, pos)
                && tree.rewire(id, node, edge)
            {
                rewired.push(id);
            }
        }

        if !rewired.is_empty() {
            trace!("[RrtStar] rewired {} nodes through {}", rewired.len(), node);
        }
        rewired
    }

    fn recorded_edges(&self, tree: &Tree) -> Vec<(Point, Point)> {
        if self.config.record_tree {
            tree.edges()
        } else {
            Vec::new()
        }
    }
}
