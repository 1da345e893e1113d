//! fdlayout Core Types and Definitions
//!
//! This crate provides the foundational types shared by the fdlayout
//! engine and its callers. It includes:
//!
//! - **Geometry**: Vectors, sizes and rectangles ([`geometry`] module)
//! - **Graph**: Nodes, edges and adjacency queries ([`graph`] module)
//! - **Records**: The plain-data import/export shape ([`record`] module)

pub mod error;
pub mod geometry;
pub mod graph;
pub mod record;

pub use error::GraphError;

/// Width and height of a node when none is given.
pub const DEFAULT_NODE_SIZE: f64 = 100.0;

/// Smallest distance used as a divisor.
///
/// Distances are floored to this value before dividing, which also gives
/// coincident nodes a direction to separate in.
pub const EPSILON: f64 = 0.0001;
