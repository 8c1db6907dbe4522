//! Numerical thresholds used by the engine.
//!
//! [`EngineConfig`] holds the two tolerances that decide when an input is
//! rejected. The free functions ([`normalize`](crate::normalize),
//! [`compute_angle`](crate::compute_angle), ...) use [`EngineConfig::default`];
//! a [`RotationEngine`](crate::RotationEngine) carries its own copy.
//!
//! ```
//! use rotvec_core::EngineConfig;
//!
//! let config = EngineConfig::default()
//!     .with_degenerate_epsilon(1e-9)
//!     .with_parallel_epsilon(1e-6);
//! assert!(config.validate().is_ok());
//! ```

use crate::constants::{DEGENERATE_EPSILON, PARALLEL_EPSILON};
use crate::{GeomError, GeomResult};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Vectors with a norm at or below this value are degenerate.
    pub degenerate_epsilon: f64,

    /// Pairs whose unit cross product has a magnitude at or below this value are parallel.
    pub parallel_epsilon: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            degenerate_epsilon: DEGENERATE_EPSILON,
            parallel_epsilon: PARALLEL_EPSILON,
        }
    }
}

impl EngineConfig {
    pub fn with_degenerate_epsilon(mut self, epsilon: f64) -> Self {
        self.degenerate_epsilon = epsilon;
        self
    }

    pub fn with_parallel_epsilon(mut self, epsilon: f64) -> Self {
        self.parallel_epsilon = epsilon;
        self
    }

    /// Checks that both thresholds are finite and non-negative.
    pub fn validate(&self) -> GeomResult<()> {
        check_threshold("degenerate_epsilon", self.degenerate_epsilon)?;
        check_threshold("parallel_epsilon", self.parallel_epsilon)
    }
}

fn check_threshold(name: &str, value: f64) -> GeomResult<()> {
    if !value.is_finite() {
        return Err(GeomError::invalid_config(&format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value < 0.0 {
        return Err(GeomError::invalid_config(&format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}
