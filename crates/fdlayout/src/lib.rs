//! fdlayout - Force-directed placement for node-link graphs.
//!
//! Nodes repel each other within a limited range, edges attract their
//! endpoints, and a cooling schedule lets the simulation settle. After a
//! batch run, disconnected components are packed into a single row so they
//! never overlap. The engine can also be stepped one tick at a time while a
//! host animates the graph and lets the user drag a node around.

pub mod cluster;
pub mod config;
pub mod random;

mod algorithm;
mod error;

pub use fdlayout_core::{DEFAULT_NODE_SIZE, EPSILON, GraphError, geometry, graph, record};

pub use algorithm::{Algorithm, DEFAULT_VIEWPORT_SIZE, ForceDirected};
pub use error::LayoutError;

use log::{debug, info, trace};

use config::ForceConfig;
use geometry::Size;
use graph::Graph;
use random::StdRandom;
use record::GraphRecord;

/// Builder for laying out graphs given as plain data records.
///
/// This wraps import, the batch simulation and export into one call.
///
/// # Examples
///
/// ```rust
/// use fdlayout::{LayoutBuilder, config::ForceConfig};
/// use fdlayout::record::{EdgeRecord, GraphRecord, NodeRecord};
///
/// let record = GraphRecord {
///     nodes: vec![NodeRecord::new("a"), NodeRecord::new("b"), NodeRecord::new("c")],
///     edges: vec![EdgeRecord::new("a", "b"), EdgeRecord::new("b", "c")],
///     properties: None,
/// };
///
/// let builder = LayoutBuilder::new(ForceConfig::default()).with_seed(7);
/// let (positioned, size) = builder.layout(&record).expect("Failed to lay out");
///
/// assert!(positioned.nodes.iter().all(|node| node.x.is_some() && node.y.is_some()));
/// assert!(size.width() > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutBuilder {
    config: ForceConfig,
    seed: Option<u64>,
    shift_x: f64,
    shift_y: f64,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given simulation settings.
    pub fn new(config: ForceConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Use a fixed seed so repeated layouts of the same graph are identical.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Offset applied to every node once the layout is computed.
    pub fn with_shift(mut self, shift_x: f64, shift_y: f64) -> Self {
        self.shift_x = shift_x;
        self.shift_y = shift_y;
        self
    }

    /// Build a graph from `record`, lay it out and export the result.
    ///
    /// Returns the positioned record together with the size of the
    /// layout's bounding box. Input positions are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Graph`] if an edge references an unknown node
    /// or a node id repeats, and [`LayoutError::InvalidConfig`] if the
    /// simulation settings are unusable.
    pub fn layout(&self, record: &GraphRecord) -> Result<(GraphRecord, Size), LayoutError> {
        info!(
            nodes_count = record.nodes.len(),
            edges_count = record.edges.len();
            "Importing graph",
        );
        let mut graph = Graph::from_record(record)?;
        debug!("Graph imported successfully");

        let size = self.layout_graph(&mut graph)?;
        info!(width = size.width(), height = size.height(); "Layout calculated");

        let positioned = graph.to_record();
        trace!(positioned:?; "Exported graph");
        Ok((positioned, size))
    }

    /// Lay out an already built graph in place.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] if the simulation settings are
    /// unusable.
    pub fn layout_graph(&self, graph: &mut Graph) -> Result<Size, LayoutError> {
        let random = match self.seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::new(),
        };
        let mut engine = ForceDirected::with_random(self.config, random)?;
        Ok(engine.run(graph, self.shift_x, self.shift_y))
    }
}
