//! Planning integration tests for marga-plan.
//!
//! Scenario runs on synthetic grids plus tree-level properties checked
//! iteration by iteration through `RrtStarPlanner::extend`.

mod common;

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use marga_plan::planning::{Extension, PlanFailure};
use marga_plan::{
    PathSmoother, Point, RetryConfig, RrtStarConfig, RrtStarPlanner, Tree, plan_with_retries,
};

fn step5_config() -> RrtStarConfig {
    RrtStarConfig::default().with_max_step(5.0)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_open_grid_diagonal() {
    let map = common::open_map(50);
    let config = step5_config().with_max_iterations(2000);
    let planner = RrtStarPlanner::new(&map, config);

    let start = Point::new(0.0, 0.0);
    let goal = Point::new(49.0, 49.0);
    let result = planner.plan_seeded(start, goal, 1);

    assert!(result.success);
    assert!(result.iterations <= 2000);
    assert_eq!(result.path.first(), Some(start));
    assert_eq!(result.path.last(), Some(goal));

    let straight = start.distance(&goal);
    println!(
        "open grid: length {:.2} vs straight {:.2}",
        result.length(),
        straight
    );
    assert!(result.length() >= straight - 1e-3);
    assert!(result.length() <= straight * 1.5);
}

#[test]
fn test_wall_gap_is_used() {
    let map = common::gap_map();
    let config = step5_config().with_max_iterations(5000);
    let planner = RrtStarPlanner::new(&map, config);
    let retry = RetryConfig {
        max_attempts: 10,
        base_seed: 100,
    };

    let start = Point::new(0.0, 0.0);
    let goal = Point::new(49.0, 49.0);
    let outcome = plan_with_retries(&planner, &retry, start, goal);
    let path = &outcome.result.path;
    assert!(outcome.result.success, "no path through the gap");

    let mut crossed = false;
    for (a, b) in path.segments() {
        assert!(!map.segment_blocked(a, b));
        for cell in common::segment_cells(a, b) {
            if cell.x == 25 {
                assert!(
                    (9..=11).contains(&cell.y),
                    "segment ({:?} -> {:?}) crosses the wall at row {}",
                    a,
                    b,
                    cell.y
                );
                crossed = true;
            }
        }
    }
    assert!(crossed, "path never visits the wall column");
}

#[test]
fn test_blocked_start_spends_no_iterations() {
    let map = common::gap_map();
    let planner = RrtStarPlanner::with_defaults(&map);

    let result = planner.plan_seeded(Point::new(25.0, 30.0), Point::new(49.0, 49.0), 0);
    assert!(!result.success);
    assert_eq!(result.failure_reason, Some(PlanFailure::StartBlocked));
    assert!(result.failure_reason.unwrap().is_degenerate_input());
    assert_eq!(result.iterations, 0);
    assert!(result.path.is_empty());
}

#[test]
fn test_single_iteration_budget_exhausts() {
    let map = common::wall_with_gap(500, 250, 495..=499);
    let config = RrtStarConfig::default().with_max_iterations(1);
    let planner = RrtStarPlanner::new(&map, config);

    let result = planner.plan_seeded(Point::new(10.0, 10.0), Point::new(490.0, 10.0), 5);
    assert!(!result.success);
    assert_eq!(result.failure_reason, Some(PlanFailure::PlanningExhausted));
    assert_eq!(result.iterations, 1);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_tree_costs_consistent_after_every_step() {
    let map = common::gap_map();
    let config = step5_config();
    let max_step = config.max_step_distance;
    let planner = RrtStarPlanner::new(&map, config);
    let goal = Point::new(49.0, 49.0);

    let mut tree = Tree::with_root(Point::new(0.0, 0.0));
    let mut rng = StdRng::seed_from_u64(3);
    let mut rewires = 0;

    for _ in 0..3000 {
        let before = tree.len();
        match planner.extend(&mut tree, goal, &mut rng) {
            Extension::Rejected => assert_eq!(tree.len(), before),
            Extension::Added {
                node,
                parent,
                rewired,
            } => {
                assert_eq!(node, before);
                assert_edge_consistent(&tree, node, parent);

                // Steering keeps the new node within one step of the old tree
                let pos = tree.position(node);
                let closest = (0..before)
                    .map(|id| tree.position(id).distance(&pos))
                    .fold(f32::INFINITY, f32::min);
                assert!(closest <= max_step + 1e-3);

                for id in rewired {
                    assert_edge_consistent(&tree, id, node);
                    rewires += 1;
                }
            }
            Extension::ReachedGoal { goal: goal_node } => {
                assert_eq!(tree.position(goal_node), goal);
                if let Some(parent) = tree.node(goal_node).parent {
                    assert_edge_consistent(&tree, goal_node, parent);
                }
                let path = tree.path_to_root(goal_node);
                for (a, b) in path.segments() {
                    assert!(!map.segment_blocked(a, b));
                }
                break;
            }
        }
    }

    println!("{} nodes, {} rewires", tree.len(), rewires);
}

fn assert_edge_consistent(tree: &Tree, child: usize, parent: usize) {
    assert_eq!(tree.node(child).parent, Some(parent));
    let expected = tree.cost(parent) + tree.position(parent).distance(&tree.position(child));
    assert_relative_eq!(tree.cost(child), expected, epsilon = 1e-3);
}

#[test]
fn test_same_seed_same_path() {
    let map = common::gap_map();
    let planner = RrtStarPlanner::new(&map, step5_config());
    let start = Point::new(3.0, 40.0);
    let goal = Point::new(45.0, 5.0);

    let a = planner.plan_seeded(start, goal, 11);
    let b = planner.plan_seeded(start, goal, 11);
    assert_eq!(a.success, b.success);
    assert_eq!(a.path, b.path);
    assert_eq!(a.iterations, b.iterations);
    assert_eq!(a.nodes, b.nodes);
}

#[test]
fn test_coincident_start_and_goal() {
    let map = common::open_map(20);
    let planner = RrtStarPlanner::with_defaults(&map);
    let start = Point::new(7.0, 7.0);

    let result = planner.plan_seeded(start, Point::new(7.5, 7.0), 0);
    assert!(result.success);
    assert_eq!(result.iterations, 0);
    assert_eq!(result.path.points(), &[start]);
}

#[test]
fn test_returned_path_is_collision_free() {
    let map = common::wall_with_gap(80, 40, 60..=70);
    let planner = RrtStarPlanner::with_defaults(&map);
    let outcome = plan_with_retries(
        &planner,
        &RetryConfig::default(),
        Point::new(5.0, 5.0),
        Point::new(75.0, 5.0),
    );

    assert!(outcome.result.success);
    let path = &outcome.result.path;
    assert!(path.len() >= 2);
    for p in path.points() {
        assert!(!map.is_blocked(*p));
    }
    for (a, b) in path.segments() {
        assert!(!map.segment_blocked(a, b));
    }
    assert!(outcome.result.cost >= path.length() - 1e-3);
}

#[test]
fn test_smoother_keeps_endpoints() {
    let map = common::gap_map();
    let planner = RrtStarPlanner::new(&map, step5_config());
    let outcome = plan_with_retries(
        &planner,
        &RetryConfig::default(),
        Point::new(2.0, 2.0),
        Point::new(47.0, 47.0),
    );
    assert!(outcome.result.success);

    let raw = outcome.result.path;
    let smoothed = PathSmoother::with_defaults(&map).smooth(&raw);
    assert_eq!(smoothed.len(), raw.len());
    assert_eq!(smoothed.first(), raw.first());
    assert_eq!(smoothed.last(), raw.last());
}
