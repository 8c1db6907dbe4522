//! Error types for batch vector and rotation calculations.
//!
//! This module provides a unified error type [`GeomError`] covering the ways a
//! batch operation can be rejected: a vector too short to have a direction, a
//! pair whose rotation axis is undefined, paired inputs that do not line up, and
//! an unusable engine configuration.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`DegenerateVector`](GeomError::DegenerateVector) | Norm at or below epsilon, or not finite | No |
//! | [`ParallelVectors`](GeomError::ParallelVectors) | Zero cross product, axis undefined | No |
//! | [`ShapeMismatch`](GeomError::ShapeMismatch) | Batch length or layout disagreement | No |
//! | [`InvalidConfig`](GeomError::InvalidConfig) | Negative or non-finite thresholds | No |
//!
//! # Atomic Failure
//!
//! Batch operations either produce a full output or fail. The degenerate and
//! parallel variants carry every offending index, so a caller can locate all bad
//! samples from a single failed call:
//!
//! ```
//! use rotvec_core::{normalize, GeomError, VectorBatch};
//!
//! let batch = VectorBatch::from_rows(&[[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
//! let err = normalize(&batch).unwrap_err();
//! assert_eq!(err.offending_indices(), Some(&[1, 2][..]));
//! ```

use thiserror::Error;

/// Unified error type for batch geometry calculations.
///
/// Use the constructor methods ([`degenerate_vector`](Self::degenerate_vector),
/// [`parallel_vectors`](Self::parallel_vectors), etc.) for consistent error creation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// One or more vectors have a norm at or below the degeneracy threshold.
    #[error("Degenerate vector in {operation}: norm <= {epsilon:e} at indices {indices:?}")]
    DegenerateVector {
        operation: String,
        indices: Vec<usize>,
        epsilon: f64,
    },

    /// One or more pairs are parallel or anti-parallel, so no rotation axis exists.
    #[error("Parallel vectors in {operation}: rotation axis undefined at indices {indices:?}")]
    ParallelVectors {
        operation: String,
        indices: Vec<usize>,
    },

    /// Paired batches disagree in length or layout.
    #[error("Shape mismatch in {operation}: {message}")]
    ShapeMismatch { operation: String, message: String },

    /// Engine thresholds are unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Convenience alias for `Result<T, GeomError>`.
pub type GeomResult<T> = Result<T, GeomError>;

impl GeomError {
    /// Creates a [`DegenerateVector`](Self::DegenerateVector) error.
    pub fn degenerate_vector(operation: &str, indices: Vec<usize>, epsilon: f64) -> Self {
        Self::DegenerateVector {
            operation: operation.to_string(),
            indices,
            epsilon,
        }
    }

    /// Creates a [`ParallelVectors`](Self::ParallelVectors) error.
    pub fn parallel_vectors(operation: &str, indices: Vec<usize>) -> Self {
        Self::ParallelVectors {
            operation: operation.to_string(),
            indices,
        }
    }

    /// Creates a [`ShapeMismatch`](Self::ShapeMismatch) error.
    pub fn shape_mismatch(operation: &str, message: &str) -> Self {
        Self::ShapeMismatch {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates an [`InvalidConfig`](Self::InvalidConfig) error.
    pub fn invalid_config(message: &str) -> Self {
        Self::InvalidConfig {
            message: message.to_string(),
        }
    }

    /// Returns the batch indices that caused the failure, if the error is per-element.
    pub fn offending_indices(&self) -> Option<&[usize]> {
        match self {
            Self::DegenerateVector { indices, .. } | Self::ParallelVectors { indices, .. } => {
                Some(indices)
            }
            _ => None,
        }
    }

    /// Returns `true` if retrying might succeed.
    ///
    /// Always `false`: every operation is a pure function of its inputs.
    pub fn is_recoverable(&self) -> bool {
        false
    }
}
