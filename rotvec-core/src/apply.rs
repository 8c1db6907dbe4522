//! Applying a batch of rotations to a batch of vectors.
//!
//! Rotations and vectors are paired by index. Either side may be a singleton,
//! in which case it is broadcast against every element of the other side:
//!
//! | vectors | rotations | output |
//! |---------|-----------|--------|
//! | N | N | N, `R[i] v[i]` |
//! | 1 | N | N, `R[i] v[0]` |
//! | N | 1 | N, `R[0] v[i]` |
//!
//! Any other combination is a [`GeomError::ShapeMismatch`]. The output always
//! carries the layout of the `vectors` argument.
//!
//! ```
//! use rotvec_core::{apply_rotation, AxisAngle, Layout, RotationBatch, Vector3, VectorBatch};
//! use std::f64::consts::PI;
//!
//! let half_turn = AxisAngle::new(Vector3::z_axis(), PI, 1e-12)?;
//! let vectors = VectorBatch::from_columns(&[1.0, 0.0], &[0.0, 2.0], &[0.0, 0.0])?;
//!
//! let rotated = apply_rotation(&vectors, &RotationBatch::single(half_turn))?;
//! assert_eq!(rotated.layout(), Layout::DimensionMajor);
//! assert!(rotated[1].max_difference(&Vector3::new(0.0, -2.0, 0.0)) < 1e-15);
//! # Ok::<(), rotvec_core::GeomError>(())
//! ```

use tracing::trace;

use crate::batch::{broadcast_index, broadcast_len};
use crate::{GeomResult, RotationBatch, VectorBatch};

/// Rotates `vectors` by `rotations`, pairing by index with singleton broadcasting.
///
/// Norms are preserved and the operation is linear in `vectors`.
pub fn apply_rotation(vectors: &VectorBatch, rotations: &RotationBatch) -> GeomResult<VectorBatch> {
    let n = broadcast_len("apply_rotation", vectors.len(), rotations.len())?;
    trace!(vectors = vectors.len(), rotations = rotations.len(), n, "apply_rotation");

    let quaternions = rotations.to_quaternions();
    let rotated = (0..n)
        .map(|i| {
            let q = &quaternions[broadcast_index(quaternions.len(), i)];
            q.rotate_vector(&vectors[broadcast_index(vectors.len(), i)])
        })
        .collect();

    Ok(vectors.with_vectors(rotated))
}
