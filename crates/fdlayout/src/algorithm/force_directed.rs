//! Force-directed layout engine
//!
//! This module implements a Fruchterman-Reingold style simulation. Nodes
//! push each other apart within a limited range, edges pull their
//! endpoints together, and a cooling temperature bounds how far a node
//! may move per iteration. After a batch run, disconnected components are
//! packed left to right so they never overlap.

use log::{debug, trace};

use fdlayout_core::{
    EPSILON,
    geometry::{Size, Vector2},
    graph::{Graph, Node, NodeId},
};

use crate::{
    algorithm::{Algorithm, DEFAULT_VIEWPORT_SIZE},
    cluster::NodeCluster,
    config::ForceConfig,
    error::LayoutError,
    random::{RandomSource, StdRandom},
};

/// Margin kept between interactively stepped nodes and the far viewport edges.
const CANVAS_MARGIN: f64 = 40.0;

/// Force-directed layout engine
///
/// The engine keeps one pending displacement per node. Each iteration
/// accumulates repulsion and attraction into it and then applies it.
///
/// Two modes are supported:
/// - [`ForceDirected::run`] performs a complete batch layout with cooling
///   and component packing.
/// - [`Algorithm::step`] performs one uncapped tick for live animation.
///
/// # Examples
///
/// ```
/// # use fdlayout::{ForceDirected, config::ForceConfig, random::StdRandom};
/// # use fdlayout::graph::{Edge, Graph, Node};
/// let mut graph = Graph::new();
/// let a = graph.add_node(Node::new("a")).unwrap();
/// let b = graph.add_node(Node::new("b")).unwrap();
/// graph.add_edge(Edge::new(a, b)).unwrap();
///
/// let mut engine = ForceDirected::with_random(ForceConfig::default(), StdRandom::seeded(1)).unwrap();
/// let size = engine.run(&mut graph, 0.0, 0.0);
/// assert!(size.width() > 0.0 && size.height() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ForceDirected<R = StdRandom> {
    config: ForceConfig,
    viewport: Size,
    focused: Option<NodeId>,
    // Indexed by `NodeId::index`
    displacement: Vec<Vector2>,
    tick: f64,
    random: R,
}

impl ForceDirected<StdRandom> {
    /// Create an engine seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: ForceConfig) -> Result<Self, LayoutError> {
        Self::with_random(config, StdRandom::new())
    }
}

impl Default for ForceDirected<StdRandom> {
    fn default() -> Self {
        Self::from_parts(ForceConfig::default(), StdRandom::new())
    }
}

impl<R: RandomSource> ForceDirected<R> {
    /// Create an engine drawing initial positions from `random`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] if `config` fails validation.
    pub fn with_random(config: ForceConfig, random: R) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self::from_parts(config, random))
    }

    fn from_parts(config: ForceConfig, random: R) -> Self {
        Self {
            config,
            viewport: Size::new(DEFAULT_VIEWPORT_SIZE, DEFAULT_VIEWPORT_SIZE),
            focused: None,
            displacement: Vec::new(),
            tick: 0.0,
            random,
        }
    }

    pub fn config(&self) -> &ForceConfig {
        &self.config
    }

    /// Current temperature of the batch simulation
    pub fn tick(&self) -> f64 {
        self.tick
    }

    /// Pending displacement of `node`; zero if none has been accumulated
    pub fn displacement(&self, node: NodeId) -> Vector2 {
        self.displacement
            .get(node.index())
            .copied()
            .unwrap_or(Vector2::ZERO)
    }

    /// Size the square viewport to the graph.
    ///
    /// Each side is the largest node dimension times the node count,
    /// which gives every node comparable room regardless of graph size.
    pub fn layout(&mut self, graph: &Graph) {
        let side = biggest_node_extent(graph) * graph.node_count() as f64;
        self.viewport = Size::new(side, side);

        debug!(viewport_side = side; "Viewport sized for layout");
    }

    /// Run the complete batch layout and return the size of the result.
    ///
    /// Positions are re-randomized first, so previous positions are not
    /// kept. Unless a node is focused, disconnected components are packed
    /// afterwards. Finally every node is shifted by `(shift_x, shift_y)`.
    ///
    /// An empty graph is left untouched and yields a zero size.
    pub fn run(&mut self, graph: &mut Graph, shift_x: f64, shift_y: f64) -> Size {
        if !graph.has_nodes() {
            debug!("Empty graph, skipping layout");
            return Size::ZERO;
        }

        self.layout(graph);
        self.tick = 0.1 * (self.viewport.width() / 2.0 * self.viewport.height() / 2.0).sqrt();
        self.init(graph);

        debug!(
            nodes_count = graph.node_count(),
            edges_count = graph.edge_count(),
            initial_tick = self.tick;
            "Starting force simulation",
        );

        let iterations = self.config.iterations();
        let mut performed = 0;
        for iteration in 0..iterations {
            self.reset_displacement(graph.node_count());
            self.calculate_repulsion(graph);
            self.calculate_attraction(graph);
            self.limit_maximum_displacement(graph);

            self.cool(iteration);
            performed = iteration + 1;
            trace!(iteration, tick = self.tick; "Cooled simulation");

            if self.is_done() {
                break;
            }
        }

        debug!(iterations = performed, final_tick = self.tick; "Force simulation finished");

        if self.focused.is_none() {
            self.position_nodes(graph);
        }

        shift_coordinates(graph, shift_x, shift_y);

        let size = graph_size(graph);
        debug!(size:? = size; "Layout calculated");
        size
    }

    /// Resynchronize the displacement accumulator with node positions.
    ///
    /// Call this after moving a node directly (for example while it is
    /// dragged) and before the next [`Algorithm::step`].
    pub fn copy_positions(&mut self, graph: &Graph) {
        self.displacement = graph.nodes().iter().map(Node::position).collect();
    }

    /// Pack disconnected components into one row without overlap.
    ///
    /// The layout is first moved so its top-left corner is at the origin.
    /// Components are found treating edges as undirected, in node order.
    /// All single-node components are merged into one cluster laid out
    /// horizontally. Clusters are then placed left to right, top-aligned,
    /// separated by the configured cluster padding.
    pub fn position_nodes(&self, graph: &mut Graph) {
        if !graph.has_nodes() {
            return;
        }

        let origin = layout_origin(graph);
        shift_coordinates(graph, -origin.x(), -origin.y());

        let padding = self.config.cluster_padding();
        let mut clusters = find_clusters(graph);
        let components_count = clusters.len();

        combine_single_node_clusters(graph, &mut clusters, padding);
        position_clusters(graph, &mut clusters, padding);

        debug!(
            components_count,
            clusters_count = clusters.len();
            "Packed clusters",
        );
    }

    fn reset_displacement(&mut self, nodes_count: usize) {
        self.displacement.clear();
        self.displacement.resize(nodes_count, Vector2::ZERO);
    }

    /// Push every pair of nodes apart, linearly weaker up to a cutoff range.
    fn calculate_repulsion(&mut self, graph: &Graph) {
        let nodes = graph.nodes();
        let rate = self.config.repulsion_rate();
        let max_distance = (self.viewport.width() * self.config.repulsion_percentage())
            .min(self.viewport.height() * self.config.repulsion_percentage())
            .max(EPSILON);

        for (index_a, node_a) in nodes.iter().enumerate() {
            for (index_b, node_b) in nodes.iter().enumerate() {
                if index_a == index_b {
                    continue;
                }

                let delta = node_a.position().sub_vector(node_b.position());
                let distance = delta.magnitude().max(EPSILON);
                // 1 when touching, 0 at and beyond the cutoff
                let force = (max_distance - distance).max(0.0) / max_distance;

                self.displacement[index_a] =
                    self.displacement[index_a].add_vector(delta.scale(force * rate));
            }
        }

        if !nodes.is_empty() {
            let count = nodes.len() as f64;
            for displacement in &mut self.displacement {
                *displacement = displacement.divide(count);
            }
        }
    }

    /// Pull the endpoints of every edge towards each other.
    fn calculate_attraction(&mut self, graph: &Graph) {
        let rate = self.config.attraction_rate();
        let max_distance = (self.viewport.width() * self.config.attraction_percentage())
            .min(self.viewport.height() * self.config.attraction_percentage())
            .max(EPSILON);

        for edge in graph.edges() {
            let source = edge.source();
            let destination = edge.destination();

            let delta = graph
                .node(source)
                .position()
                .sub_vector(graph.node(destination).position());
            let distance = delta.magnitude().max(EPSILON);
            // Never positive, so edges currently exert no pull. Existing
            // layouts depend on this; change it together with the rates.
            let force = f64::min(0.0, (max_distance - distance).abs() / (max_distance * 2.0));
            let attraction = delta.scale(force * rate);

            self.displacement[source.index()] =
                self.displacement[source.index()].sub_vector(attraction);
            self.displacement[destination.index()] =
                self.displacement[destination.index()].add_vector(attraction);
        }
    }

    /// Apply pending displacements, attenuated by the current temperature.
    ///
    /// The focused node keeps its position and its displacement is dropped.
    fn limit_maximum_displacement(&mut self, graph: &mut Graph) {
        let focused = self.focused.map(NodeId::index);

        for (index, node) in graph.nodes_mut().enumerate() {
            if focused == Some(index) {
                self.displacement[index] = Vector2::ZERO;
                continue;
            }

            let target = self.displacement[index];
            let length = target.magnitude().max(EPSILON);
            // Floored because a zero-sized viewport leaves the tick at zero
            let amount = (length * length.min(self.tick)).max(EPSILON * EPSILON);

            node.set_position(node.position().add_vector(target.divide(amount)));
        }
    }

    /// Apply pending displacements directly, clamped inside the canvas.
    fn move_nodes(&mut self, graph: &mut Graph) {
        let focused = self.focused.map(NodeId::index);
        let max_x = (self.viewport.width() - CANVAS_MARGIN).max(0.0);
        let max_y = (self.viewport.height() - CANVAS_MARGIN).max(0.0);

        for (index, node) in graph.nodes_mut().enumerate() {
            if focused == Some(index) {
                continue;
            }

            let moved = node.position().add_vector(self.displacement[index]);
            node.set_position(Vector2::new(
                moved.x().clamp(0.0, max_x),
                moved.y().clamp(0.0, max_y),
            ));
        }
    }

    /// Linear cooling schedule
    fn cool(&mut self, iteration: usize) {
        self.tick *= 1.0 - iteration as f64 / self.config.iterations() as f64;
    }

    fn is_done(&self) -> bool {
        self.tick < 1.0 / self.viewport.max_dimension()
    }
}

impl<R: RandomSource> Algorithm for ForceDirected<R> {
    fn dimensions(&self) -> Size {
        self.viewport
    }

    fn set_dimensions(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
    }

    fn focused_node(&self) -> Option<NodeId> {
        self.focused
    }

    fn set_focused_node(&mut self, node: Option<NodeId>) {
        self.focused = node;
    }

    fn init(&mut self, graph: &mut Graph) {
        self.reset_displacement(graph.node_count());

        let width = self.viewport.width();
        let height = self.viewport.height();
        for node in graph.nodes_mut() {
            let x = self.random.next_double() * width;
            let y = self.random.next_double() * height;
            node.set_position(Vector2::new(x, y));
        }
    }

    /// One uncapped tick: no temperature, no cooling, no packing.
    ///
    /// Nodes other than the focused one are clamped to
    /// `[0, width - 40] x [0, height - 40]`.
    fn step(&mut self, graph: &mut Graph) {
        self.reset_displacement(graph.node_count());
        self.calculate_repulsion(graph);
        self.calculate_attraction(graph);
        self.move_nodes(graph);
    }
}

/// Largest width or height over all nodes
fn biggest_node_extent(graph: &Graph) -> f64 {
    graph
        .nodes()
        .iter()
        .map(|node| node.size().max_dimension())
        .fold(0.0, f64::max)
}

/// Minimum x and y over all node positions
fn layout_origin(graph: &Graph) -> Vector2 {
    let (x, y) = graph
        .nodes()
        .iter()
        .fold((f64::INFINITY, f64::INFINITY), |(x, y), node| {
            (x.min(node.x()), y.min(node.y()))
        });
    Vector2::new(x, y)
}

fn shift_coordinates(graph: &mut Graph, dx: f64, dy: f64) {
    for node in graph.nodes_mut() {
        node.translate(dx, dy);
    }
}

/// Tight bounding size of all node rectangles
fn graph_size(graph: &Graph) -> Size {
    let Some(bounds) = graph
        .nodes()
        .iter()
        .map(Node::rect)
        .reduce(|merged, rect| merged.union(rect))
    else {
        return Size::ZERO;
    };
    bounds.size()
}

/// Connected components, treating edges as undirected, in node order.
fn find_clusters(graph: &Graph) -> Vec<NodeCluster> {
    let mut visited = vec![false; graph.node_count()];
    let mut clusters = Vec::new();

    for start in graph.node_ids() {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;

        let mut cluster = NodeCluster::new();
        cluster.add(graph, start);

        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for neighbor in graph.successors_of(node).chain(graph.predecessors_of(node)) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    cluster.add(graph, neighbor);
                    stack.push(neighbor);
                }
            }
        }

        clusters.push(cluster);
    }

    clusters
}

/// Merge all single-node clusters into the first of them.
///
/// The merged cluster keeps the first singleton's place in the list.
fn combine_single_node_clusters(graph: &mut Graph, clusters: &mut Vec<NodeCluster>, padding: f64) {
    let mut merged: Option<(usize, NodeCluster)> = None;
    let mut remaining = Vec::with_capacity(clusters.len());

    for cluster in clusters.drain(..) {
        if cluster.len() != 1 {
            remaining.push(cluster);
            continue;
        }

        if let Some((_, running)) = merged.as_mut() {
            running.concat(graph, &cluster, padding);
        } else {
            merged = Some((remaining.len(), cluster));
        }
    }

    if let Some((slot, running)) = merged {
        remaining.insert(slot, running);
    }
    *clusters = remaining;
}

/// Lay clusters out in a single top-aligned row starting at the origin.
fn position_clusters(graph: &mut Graph, clusters: &mut [NodeCluster], padding: f64) {
    let Some((first, rest)) = clusters.split_first_mut() else {
        return;
    };

    let rect = first.rect();
    first.offset(graph, -rect.left(), -rect.top());

    let mut anchor = first.rect();
    for cluster in rest {
        let x_diff = cluster.rect().left() - anchor.right() - padding;
        let y_diff = cluster.rect().top() - anchor.top();
        cluster.offset(graph, -x_diff, -y_diff);
        anchor = cluster.rect();
    }
}
