//! Graph data model.
//!
//! A [`Graph`] owns its nodes in an arena and addresses them through
//! [`NodeId`] handles. Edges store handles rather than references, so the
//! layout engine can mutate node positions while still walking edges.
//!
//! Node iteration order is insertion order. Renderers draw in this order
//! and the layout engine discovers connected components in it.
//!
//! Adjacency queries scan the edge list on every call. Graphs handled
//! here are small (tens to low hundreds of nodes), so no index is kept.

use std::collections::HashMap;

use log::debug;

use crate::{
    DEFAULT_NODE_SIZE,
    error::GraphError,
    geometry::{Rect, Size, Vector2},
    record::{DataMap, EdgeRecord, GraphRecord, NodeRecord},
};

/// Handle of a node inside the [`Graph`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the graph's insertion order
    pub fn index(self) -> usize {
        self.0
    }
}

/// A graph node: identity, optional display name, opaque data and geometry.
///
/// The node's position is the top-left corner of its rectangle. Setting
/// the position keeps the width and height.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    name: Option<String>,
    data: DataMap,
    rect: Rect,
}

impl Node {
    /// Creates a node at the origin with the default size.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            data: DataMap::new(),
            rect: Rect::new(0.0, 0.0, DEFAULT_NODE_SIZE, DEFAULT_NODE_SIZE),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_data(mut self, data: DataMap) -> Self {
        self.data = data;
        self
    }

    /// Sets the node's size; negative dimensions are clamped to zero.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.rect = Rect::new(self.rect.x(), self.rect.y(), width.max(0.0), height.max(0.0));
        self
    }

    pub fn with_position(mut self, position: Vector2) -> Self {
        self.set_position(position);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn data(&self) -> &DataMap {
        &self.data
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Top-left corner of the node
    pub fn position(&self) -> Vector2 {
        self.rect.position()
    }

    /// Moves the node's top-left corner, keeping its size
    pub fn set_position(&mut self, position: Vector2) {
        self.rect = self.rect.move_to(position.x(), position.y());
    }

    /// Shifts the node by `(dx, dy)`
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.rect = self.rect.translate(dx, dy);
    }

    pub fn x(&self) -> f64 {
        self.rect.x()
    }

    pub fn y(&self) -> f64 {
        self.rect.y()
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    pub fn size(&self) -> Size {
        self.rect.size()
    }
}

/// A directed edge between two nodes of the same graph.
///
/// Reciprocal pairs (`a -> b` and `b -> a`) are stored as two edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: NodeId,
    destination: NodeId,
    data: DataMap,
}

impl Edge {
    pub fn new(source: NodeId, destination: NodeId) -> Self {
        Self {
            source,
            destination,
            data: DataMap::new(),
        }
    }

    pub fn with_data(mut self, data: DataMap) -> Self {
        self.data = data;
        self
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn data(&self) -> &DataMap {
        &self.data
    }
}

/// A directed graph owning its nodes and edges.
///
/// Invariants:
/// - node ids are unique
/// - every edge endpoint is a handle issued by this graph
///
/// # Examples
///
/// ```
/// # use fdlayout_core::graph::{Edge, Graph, Node};
/// let mut graph = Graph::new();
/// let a = graph.add_node(Node::new("a")).unwrap();
/// let b = graph.add_node(Node::new("b")).unwrap();
/// graph.add_edge(Edge::new(a, b)).unwrap();
///
/// assert_eq!(graph.successors_of(a).collect::<Vec<_>>(), vec![b]);
/// assert_eq!(graph.predecessors_of(b).collect::<Vec<_>>(), vec![a]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    ids: HashMap<String, NodeId>,
}

impl Graph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from its plain-data form.
    ///
    /// Nodes missing `x`/`y` start at 0; nodes missing `width`/`height` get
    /// `properties.defaultNodeSize`, or [`DEFAULT_NODE_SIZE`] when that is
    /// absent too.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if two records share an id and
    /// [`GraphError::UnknownEndpoint`] if an edge names a node that is not
    /// in `nodes`.
    pub fn from_record(record: &GraphRecord) -> Result<Self, GraphError> {
        let default_size = record
            .properties
            .as_ref()
            .and_then(|properties| properties.default_node_size)
            .unwrap_or(DEFAULT_NODE_SIZE);

        let mut graph = Self::new();

        for node_record in &record.nodes {
            let mut node = Node::new(node_record.id.clone())
                .with_data(node_record.data.clone())
                .with_size(
                    node_record.width.unwrap_or(default_size),
                    node_record.height.unwrap_or(default_size),
                )
                .with_position(Vector2::new(
                    node_record.x.unwrap_or(0.0),
                    node_record.y.unwrap_or(0.0),
                ));
            if let Some(name) = &node_record.name {
                node = node.with_name(name.clone());
            }
            graph.add_node(node)?;
        }

        for edge_record in &record.edges {
            let resolve = |id: &str| {
                graph
                    .find_node(id)
                    .ok_or_else(|| GraphError::UnknownEndpoint {
                        from: edge_record.source.clone(),
                        to: edge_record.destination.clone(),
                        missing: id.to_string(),
                    })
            };
            let source = resolve(&edge_record.source)?;
            let destination = resolve(&edge_record.destination)?;

            graph.add_edge(Edge::new(source, destination).with_data(edge_record.data.clone()))?;
        }

        debug!(
            nodes_count = graph.node_count(),
            edges_count = graph.edge_count();
            "Graph imported",
        );

        Ok(graph)
    }

    /// Flattens the graph back into its plain-data form.
    ///
    /// Positions and sizes are always written out.
    pub fn to_record(&self) -> GraphRecord {
        let nodes = self
            .nodes
            .iter()
            .map(|node| NodeRecord {
                id: node.id.clone(),
                name: node.name.clone(),
                x: Some(node.x()),
                y: Some(node.y()),
                width: Some(node.width()),
                height: Some(node.height()),
                data: node.data.clone(),
            })
            .collect();

        let edges = self
            .edges
            .iter()
            .map(|edge| EdgeRecord {
                source: self.node(edge.source).id.clone(),
                destination: self.node(edge.destination).id.clone(),
                data: edge.data.clone(),
            })
            .collect();

        GraphRecord {
            nodes,
            edges,
            properties: None,
        }
    }

    /// Appends a node and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if a node with the same id
    /// already exists.
    pub fn add_node(&mut self, node: Node) -> Result<NodeId, GraphError> {
        if self.ids.contains_key(node.id()) {
            return Err(GraphError::DuplicateNode(node.id.clone()));
        }

        let id = NodeId(self.nodes.len());
        self.ids.insert(node.id.clone(), id);
        self.nodes.push(node);
        Ok(id)
    }

    /// Appends an edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownHandle`] if either endpoint was not
    /// issued by this graph.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        for endpoint in [edge.source, edge.destination] {
            if endpoint.0 >= self.nodes.len() {
                return Err(GraphError::UnknownHandle(endpoint.0));
            }
        }

        self.edges.push(edge);
        Ok(())
    }

    /// Returns the node for a handle.
    ///
    /// # Panics
    /// Panics if the handle was issued by a different graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the node for a handle, mutably.
    ///
    /// # Panics
    /// Panics if the handle was issued by a different graph.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Looks up a node handle by its string id
    pub fn find_node(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Handles of all nodes in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_nodes(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Edges leaving `node`, in edge order
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |edge| edge.source == node)
    }

    /// Edges entering `node`, in edge order
    pub fn in_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |edge| edge.destination == node)
    }

    /// Destinations of the edges leaving `node`.
    ///
    /// A node reached by several parallel edges is yielded once per edge.
    pub fn successors_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.out_edges(node).map(Edge::destination)
    }

    /// Sources of the edges entering `node`.
    ///
    /// A node reached by several parallel edges is yielded once per edge.
    pub fn predecessors_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.in_edges(node).map(Edge::source)
    }

    /// First edge going from `source` to `destination`
    pub fn edge_between(&self, source: NodeId, destination: NodeId) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|edge| edge.source == source && edge.destination == destination)
    }
}
