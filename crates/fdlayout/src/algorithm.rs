//! Layout algorithms
//!
//! Every layout strategy implements [`Algorithm`], the surface an
//! interactive host drives: it sets the viewport, marks the node being
//! dragged, seeds positions with [`Algorithm::init`] and advances the
//! simulation with [`Algorithm::step`] on its own timer.

mod force_directed;

pub use force_directed::ForceDirected;

use fdlayout_core::{
    geometry::Size,
    graph::{Graph, NodeId},
};

/// Width and height of the viewport before a layout sizes it.
pub const DEFAULT_VIEWPORT_SIZE: f64 = 500.0;

/// Trait defining the interface shared by layout algorithms
pub trait Algorithm {
    /// Current viewport dimensions
    fn dimensions(&self) -> Size;

    /// Set the viewport the simulation keeps nodes within
    fn set_dimensions(&mut self, width: f64, height: f64);

    /// The node currently held by the user, if any
    fn focused_node(&self) -> Option<NodeId>;

    /// Mark a node as held by the user.
    ///
    /// A focused node receives no displacement from the simulation, so
    /// it can be dragged without the forces pulling it back.
    fn set_focused_node(&mut self, node: Option<NodeId>);

    /// Place every node at a fresh random position and reset internal state
    fn init(&mut self, graph: &mut Graph);

    /// Advance the simulation by one tick.
    ///
    /// Every node except the focused one is moved. The focused node keeps
    /// the position its caller gave it, so a dragged node stays under the
    /// pointer while the rest of the graph reacts to it.
    fn step(&mut self, graph: &mut Graph);
}
