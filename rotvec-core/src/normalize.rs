//! Batch normalization with degenerate-vector detection.
//!
//! Every vector is checked before any division takes place. If one or more
//! vectors are degenerate (norm at or below
//! [`EngineConfig::degenerate_epsilon`], or not finite) the whole call fails
//! and the error lists every offending index; no partially normalized batch
//! is ever returned.
//!
//! ```
//! use rotvec_core::{normalize, VectorBatch};
//!
//! let batch = VectorBatch::from_rows(&[[3.0, 4.0, 0.0], [0.0, 0.0, -2.0]]);
//! let unit = normalize(&batch)?;
//! assert_eq!(unit.to_rows(), vec![[0.6, 0.8, 0.0], [0.0, 0.0, -1.0]]);
//! # Ok::<(), rotvec_core::GeomError>(())
//! ```

use tracing::{debug, trace};

use crate::{EngineConfig, GeomError, GeomResult, Vector3, VectorBatch};

/// Normalizes every vector in `batch` using the default thresholds.
///
/// The result has the same length and layout as the input.
pub fn normalize(batch: &VectorBatch) -> GeomResult<VectorBatch> {
    normalize_with(batch, &EngineConfig::default())
}

/// Normalizes every vector in `batch` using `config.degenerate_epsilon`.
pub fn normalize_with(batch: &VectorBatch, config: &EngineConfig) -> GeomResult<VectorBatch> {
    config.validate()?;
    trace!(len = batch.len(), "normalize");
    let unit = unit_vectors("normalize", batch.vectors(), config.degenerate_epsilon)?;
    Ok(batch.with_vectors(unit))
}

/// Normalizes a slice of vectors, failing atomically on any degenerate entry.
pub(crate) fn unit_vectors(
    operation: &str,
    vectors: &[Vector3],
    epsilon: f64,
) -> GeomResult<Vec<Vector3>> {
    let degenerate: Vec<usize> = vectors
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_degenerate(epsilon))
        .map(|(i, _)| i)
        .collect();

    if !degenerate.is_empty() {
        debug!(operation, indices = ?degenerate, epsilon, "rejecting degenerate vectors");
        return Err(GeomError::degenerate_vector(operation, degenerate, epsilon));
    }

    Ok(vectors.iter().map(|v| *v / v.magnitude()).collect())
}
