//! Error types for fdlayout operations.
//!
//! This module provides the main error type [`LayoutError`] which wraps
//! the conditions that can stop a layout from being computed.

use thiserror::Error;

use fdlayout_core::GraphError;

/// The main error type for fdlayout operations.
///
/// Simulation steps never fail once a graph and an engine have been built;
/// errors only come from malformed input data or unusable configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
