//! Arena-backed planning tree.
//!
//! Nodes live in a `Vec` and refer to their parent by [`NodeId`]. Nodes
//! are never removed; rewiring only changes a node's parent and cost.

use crate::core::{Path, Point};

/// Index of a node in the [`Tree`] arena
pub type NodeId = usize;

/// A node in the planning tree
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Position on the planning surface
    pub position: Point,
    /// Parent node (None for the root)
    pub parent: Option<NodeId>,
    /// Accumulated path length from the root along the parent chain
    pub cost: f32,
}

/// Rooted tree of planning nodes
#[derive(Clone, Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree containing only the root at `position`
    pub fn with_root(position: Point) -> Self {
        let mut tree = Self::new();
        tree.add_root(position);
        tree
    }

    /// Add the root node (cost 0, no parent).
    ///
    /// Only valid on an empty tree; a second root would break the
    /// single-root invariant.
    pub fn add_root(&mut self, position: Point) -> NodeId {
        debug_assert!(self.nodes.is_empty(), "tree already has a root");
        self.push(Node {
            position,
            parent: None,
            cost: 0.0,
        })
    }

    /// Add a node under `parent` with cost `parent.cost + edge_cost`
    pub fn add_node(&mut self, position: Point, parent: NodeId, edge_cost: f32) -> NodeId {
        let cost = self.nodes[parent].cost + edge_cost;
        self.push(Node {
            position,
            parent: Some(parent),
            cost,
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Root node id (always 0 once the root exists)
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() { None } else { Some(0) }
    }

    /// Node by id
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Position of a node
    #[inline]
    pub fn position(&self, id: NodeId) -> Point {
        self.nodes[id].position
    }

    /// Cached cost of a node
    #[inline]
    pub fn cost(&self, id: NodeId) -> f32 {
        self.nodes[id].cost
    }

    /// Number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over `(id, node)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate()
    }

    /// Node nearest to `point` (first inserted wins ties).
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn nearest(&self, point: Point) -> NodeId {
        let mut nearest = 0;
        let mut nearest_dist = f32::INFINITY;

        for (id, node) in self.iter() {
            let dist = node.position.distance_squared(&point);
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest = id;
            }
        }

        assert!(nearest_dist.is_finite(), "nearest() on an empty tree");
        nearest
    }

    /// Nodes strictly closer than `radius` to `point`, in insertion order
    pub fn within_radius(&self, point: Point, radius: f32) -> Vec<NodeId> {
        let radius_sq = radius * radius;
        self.iter()
            .filter(|(_, node)| node.position.distance_squared(&point) < radius_sq)
            .map(|(id, _)| id)
            .collect()
    }

    /// True if `ancestor` lies on the parent chain of `node` (or is `node`)
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id].parent;
        }
        false
    }

    /// Re-parent `node` under `new_parent` with cost
    /// `new_parent.cost + new_edge_cost`.
    ///
    /// Descendants of `node` keep their cached costs. Returns false and
    /// leaves the tree untouched when `node` is the root or when the move
    /// would close a cycle.
    pub fn rewire(&mut self, node: NodeId, new_parent: NodeId, new_edge_cost: f32) -> bool {
        if self.nodes[node].parent.is_none() || self.is_ancestor(node, new_parent) {
            return false;
        }
        let cost = self.nodes[new_parent].cost + new_edge_cost;
        let entry = &mut self.nodes[node];
        entry.parent = Some(new_parent);
        entry.cost = cost;
        true
    }

    /// Positions from the root down to `node`
    pub fn path_to_root(&self, node: NodeId) -> Path {
        let mut points = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            let n = &self.nodes[id];
            points.push(n.position);
            current = n.parent;
        }
        points.reverse();
        Path::new(points)
    }

    /// Parent -> child position pairs for every non-root node
    pub fn edges(&self) -> Vec<(Point, Point)> {
        self.nodes
            .iter()
            .filter_map(|n| n.parent.map(|p| (self.nodes[p].position, n.position)))
            .collect()
    }
}
