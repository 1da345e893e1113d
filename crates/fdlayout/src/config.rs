//! Tunables for the force-directed simulation.
//!
//! [`ForceConfig`] implements [`serde::Deserialize`] so it can be loaded
//! from a configuration file; missing keys take the defaults below.
//!
//! | key                     | default |
//! |-------------------------|---------|
//! | `iterations`            | 1000    |
//! | `repulsion_rate`        | 0.5     |
//! | `repulsion_percentage`  | 0.4     |
//! | `attraction_rate`       | 0.15    |
//! | `attraction_percentage` | 0.15    |
//! | `cluster_padding`       | 15      |
//!
//! # Example
//!
//! ```
//! # use fdlayout::config::ForceConfig;
//! let config = ForceConfig::default().with_iterations(200);
//! assert_eq!(config.iterations(), 200);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

pub const DEFAULT_ITERATIONS: usize = 1000;
pub const REPULSION_RATE: f64 = 0.5;
pub const REPULSION_PERCENTAGE: f64 = 0.4;
pub const ATTRACTION_RATE: f64 = 0.15;
pub const ATTRACTION_PERCENTAGE: f64 = 0.15;
pub const CLUSTER_PADDING: f64 = 15.0;

/// Simulation parameters for [`ForceDirected`](crate::ForceDirected).
///
/// The percentages are fractions of the smaller viewport dimension and
/// give the range beyond which a force no longer acts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
    iterations: usize,
    repulsion_rate: f64,
    repulsion_percentage: f64,
    attraction_rate: f64,
    attraction_percentage: f64,
    cluster_padding: f64,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            repulsion_rate: REPULSION_RATE,
            repulsion_percentage: REPULSION_PERCENTAGE,
            attraction_rate: ATTRACTION_RATE,
            attraction_percentage: ATTRACTION_PERCENTAGE,
            cluster_padding: CLUSTER_PADDING,
        }
    }
}

impl ForceConfig {
    /// Set the maximum number of batch iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the scale applied to repulsive displacement
    pub fn with_repulsion_rate(mut self, rate: f64) -> Self {
        self.repulsion_rate = rate;
        self
    }

    /// Set the repulsion range as a fraction of the viewport
    pub fn with_repulsion_percentage(mut self, percentage: f64) -> Self {
        self.repulsion_percentage = percentage;
        self
    }

    /// Set the scale applied to attractive displacement
    pub fn with_attraction_rate(mut self, rate: f64) -> Self {
        self.attraction_rate = rate;
        self
    }

    /// Set the attraction range as a fraction of the viewport
    pub fn with_attraction_percentage(mut self, percentage: f64) -> Self {
        self.attraction_percentage = percentage;
        self
    }

    /// Set the gap left between packed clusters
    pub fn with_cluster_padding(mut self, padding: f64) -> Self {
        self.cluster_padding = padding;
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn repulsion_rate(&self) -> f64 {
        self.repulsion_rate
    }

    pub fn repulsion_percentage(&self) -> f64 {
        self.repulsion_percentage
    }

    pub fn attraction_rate(&self) -> f64 {
        self.attraction_rate
    }

    pub fn attraction_percentage(&self) -> f64 {
        self.attraction_percentage
    }

    pub fn cluster_padding(&self) -> f64 {
        self.cluster_padding
    }

    /// Checks that every value can drive a simulation.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] naming the first offending
    /// field: rates and padding must be finite and non-negative,
    /// percentages must be finite and positive.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let non_negative = [
            ("repulsion_rate", self.repulsion_rate),
            ("attraction_rate", self.attraction_rate),
            ("cluster_padding", self.cluster_padding),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        let positive = [
            ("repulsion_percentage", self.repulsion_percentage),
            ("attraction_percentage", self.attraction_percentage),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be a finite positive number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
