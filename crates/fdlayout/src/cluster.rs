//! Node clusters used while packing disconnected components.
//!
//! A [`NodeCluster`] holds handles of nodes that live in a [`Graph`] and
//! keeps the union of their rectangles up to date as nodes are added or
//! moved through the cluster. Clusters only exist during packing.

use fdlayout_core::{
    geometry::{Rect, Vector2},
    graph::{Graph, NodeId},
};

/// A group of nodes with an incrementally maintained bounding rectangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeCluster {
    nodes: Vec<NodeId>,
    rect: Rect,
}

impl NodeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Member handles in the order they were added
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Bounding rectangle of all members
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Adds a node and grows the bounding rectangle to cover it.
    pub fn add(&mut self, graph: &Graph, node: NodeId) {
        let node_rect = graph.node(node).rect();
        self.rect = if self.nodes.is_empty() {
            node_rect
        } else {
            self.rect.union(node_rect)
        };
        self.nodes.push(node);
    }

    /// Absorbs every node of `other`, placing each one `padding` units to
    /// the right of this cluster and aligned with its top edge.
    pub fn concat(&mut self, graph: &mut Graph, other: &NodeCluster, padding: f64) {
        for &node in &other.nodes {
            let position = Vector2::new(self.rect.right() + padding, self.rect.top());
            graph.node_mut(node).set_position(position);
            self.add(graph, node);
        }
    }

    /// Moves every member and the bounding rectangle by `(dx, dy)`.
    pub fn offset(&mut self, graph: &mut Graph, dx: f64, dy: f64) {
        for &node in &self.nodes {
            graph.node_mut(node).translate(dx, dy);
        }
        self.rect = self.rect.translate(dx, dy);
    }
}
