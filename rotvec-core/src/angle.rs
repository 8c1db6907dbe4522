//! Per-pair angles from normalized cross and dot products.
//!
//! For unit vectors `u1`, `u2` the dot product is `cos(θ)` and the cross product
//! `u1 × u2` is a vector of length `sin(θ)`. Combining them through `atan2` is
//! accurate over the whole range, unlike `acos` of the dot product alone which
//! loses precision near 0 and π.
//!
//! # Unsigned vs Signed
//!
//! The cross product is a vector, so it has to be reduced to a scalar before it
//! can meet the dot product inside `atan2`. Two reductions are offered:
//!
//! | Function | Sine term | Range | Symmetry |
//! |----------|-----------|-------|----------|
//! | [`compute_angle`] | `|u1 × u2|` | `[0, π]` | `angle(a, b) == angle(b, a)` |
//! | [`compute_signed_angle`] | `(u1 × u2) · n̂` | `(-π, π]` | `angle(a, b, n) == -angle(b, a, n)` |
//!
//! The signed form needs a reference normal `n̂` that fixes which rotation sense
//! counts as positive. Both vectors are first projected onto the plane
//! perpendicular to `n̂`, so the result is the angle between the projections.
//! With `n̂` perpendicular to the pair this is `±compute_angle`; with a tilted
//! normal it can be larger or smaller. A vector parallel to `n̂` has no
//! projection and fails with [`GeomError::DegenerateVector`].
//!
//! ```
//! use rotvec_core::{compute_angle, compute_signed_angle, VectorBatch, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let a = VectorBatch::from_rows(&[[1.0, 0.0, 0.0]]);
//! let b = VectorBatch::from_rows(&[[0.0, 1.0, 0.0]]);
//!
//! let unsigned = compute_angle(&b, &a)?;
//! assert!((unsigned[0] - FRAC_PI_2).abs() < 1e-15);
//!
//! let up = VectorBatch::single(Vector3::z_axis());
//! let signed = compute_signed_angle(&b, &a, &up)?;
//! assert!((signed[0] + FRAC_PI_2).abs() < 1e-15);
//! # Ok::<(), rotvec_core::GeomError>(())
//! ```

use tracing::{debug, trace};

use crate::batch::{broadcast_index, check_paired};
use crate::constants::PI;
use crate::normalize::unit_vectors;
use crate::{AngleBatch, EngineConfig, GeomError, GeomResult, Vector3, VectorBatch};

/// Unsigned angle in `[0, π]` between each pair, using the default thresholds.
///
/// Both batches must have the same length and layout, and contain no degenerate
/// vectors.
pub fn compute_angle(batch1: &VectorBatch, batch2: &VectorBatch) -> GeomResult<AngleBatch> {
    compute_angle_with(batch1, batch2, &EngineConfig::default())
}

pub fn compute_angle_with(
    batch1: &VectorBatch,
    batch2: &VectorBatch,
    config: &EngineConfig,
) -> GeomResult<AngleBatch> {
    config.validate()?;
    trace!(len = batch1.len(), "compute_angle");
    let (u1, u2) = unit_pairs("compute_angle", batch1, batch2, config)?;

    let angles = u1
        .iter()
        .zip(&u2)
        .map(|(a, b)| unsigned_angle(a, b))
        .collect();
    Ok(AngleBatch::new(angles))
}

/// Signed angle in `(-π, π]` from each `batch1` vector to its `batch2` partner,
/// measured about `normals`, using the default thresholds.
///
/// `normals` holds one normal per pair, or a single normal shared by all pairs.
pub fn compute_signed_angle(
    batch1: &VectorBatch,
    batch2: &VectorBatch,
    normals: &VectorBatch,
) -> GeomResult<AngleBatch> {
    compute_signed_angle_with(batch1, batch2, normals, &EngineConfig::default())
}

pub fn compute_signed_angle_with(
    batch1: &VectorBatch,
    batch2: &VectorBatch,
    normals: &VectorBatch,
    config: &EngineConfig,
) -> GeomResult<AngleBatch> {
    const OPERATION: &str = "compute_signed_angle";
    config.validate()?;
    trace!(len = batch1.len(), normals = normals.len(), "compute_signed_angle");

    let n = batch1.len();
    if normals.len() != n && normals.len() != 1 {
        return Err(GeomError::shape_mismatch(
            OPERATION,
            &format!(
                "expected {} normals or a single shared normal, got {}",
                n,
                normals.len()
            ),
        ));
    }

    let (u1, u2) = unit_pairs(OPERATION, batch1, batch2, config)?;
    let unit_normals = unit_vectors(OPERATION, normals.vectors(), config.degenerate_epsilon)?;

    let epsilon = config.degenerate_epsilon;
    let mut angles = Vec::with_capacity(n);
    let mut unprojectable = Vec::new();
    for i in 0..n {
        let normal = &unit_normals[broadcast_index(unit_normals.len(), i)];
        let p1 = project_onto_plane(&u1[i], normal);
        let p2 = project_onto_plane(&u2[i], normal);
        if p1.is_degenerate(epsilon) || p2.is_degenerate(epsilon) {
            unprojectable.push(i);
        } else {
            angles.push(signed_angle(&p1, &p2, normal));
        }
    }

    if !unprojectable.is_empty() {
        debug!(indices = ?unprojectable, epsilon, "vectors parallel to reference normal");
        return Err(GeomError::degenerate_vector(OPERATION, unprojectable, epsilon));
    }
    Ok(AngleBatch::new(angles))
}

/// Component of `v` perpendicular to the unit vector `normal`.
#[inline]
fn project_onto_plane(v: &Vector3, normal: &Vector3) -> Vector3 {
    *v - *normal * v.dot(normal)
}

#[inline]
pub(crate) fn unsigned_angle(u1: &Vector3, u2: &Vector3) -> f64 {
    libm::atan2(u1.cross(u2).magnitude(), u1.dot(u2))
}

/// `atan2` is scale-invariant, so `p1` and `p2` need not be unit length.
#[inline]
fn signed_angle(p1: &Vector3, p2: &Vector3, normal: &Vector3) -> f64 {
    let angle = libm::atan2(p1.cross(p2).dot(normal), p1.dot(p2));
    // atan2(-0.0, negative) is -π; fold it onto the closed end of (-π, π]
    if angle == -PI {
        PI
    } else {
        angle
    }
}

/// Validates and normalizes two paired batches.
///
/// A degenerate vector on either side fails the call; the error lists the pair
/// indices where either member is degenerate.
pub(crate) fn unit_pairs(
    operation: &str,
    batch1: &VectorBatch,
    batch2: &VectorBatch,
    config: &EngineConfig,
) -> GeomResult<(Vec<Vector3>, Vec<Vector3>)> {
    check_paired(operation, batch1, batch2)?;

    let epsilon = config.degenerate_epsilon;
    let degenerate: Vec<usize> = batch1
        .iter()
        .zip(batch2.iter())
        .enumerate()
        .filter(|(_, (a, b))| a.is_degenerate(epsilon) || b.is_degenerate(epsilon))
        .map(|(i, _)| i)
        .collect();

    if !degenerate.is_empty() {
        debug!(operation, indices = ?degenerate, epsilon, "rejecting degenerate pairs");
        return Err(GeomError::degenerate_vector(operation, degenerate, epsilon));
    }

    Ok((
        unit_vectors(operation, batch1.vectors(), epsilon)?,
        unit_vectors(operation, batch2.vectors(), epsilon)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;
    use crate::Layout;

    fn rows(r: &[[f64; 3]]) -> VectorBatch {
        VectorBatch::from_rows(r)
    }

    #[test]
    fn test_angle_of_vector_with_itself_is_zero() {
        let batch = rows(&[[1.0, 2.0, 3.0], [-4.0, 0.5, 9.0], [0.0, 0.0, 1e-6]]);
        let angles = compute_angle(&batch, &batch).unwrap();
        assert_eq!(angles.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_known_angles() {
        let a = rows(&[[1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
        let b = rows(&[[0.0, 5.0, 0.0], [-2.0, 0.0, 0.0], [1.0, 1.0, 0.0]]);
        let angles = compute_angle(&a, &b).unwrap();

        assert!((angles[0] - HALF_PI).abs() < 1e-15);
        assert!((angles[1] - PI).abs() < 1e-15);
        assert!((angles[2] - PI / 4.0).abs() < 1e-15);
    }

    #[test]
    fn test_unsigned_angle_is_symmetric() {
        let a = rows(&[[1.0, 2.0, 3.0], [0.3, -1.0, 0.2]]);
        let b = rows(&[[-2.0, 0.1, 1.0], [5.0, 5.0, -5.0]]);
        let ab = compute_angle(&a, &b).unwrap();
        let ba = compute_angle(&b, &a).unwrap();
        for (x, y) in ab.iter().zip(ba.iter()) {
            assert_eq!(x, y);
            assert!((0.0..=PI).contains(x));
        }
    }

    #[test]
    fn test_angle_independent_of_magnitude() {
        let a = rows(&[[1.0, 1.0, 0.0]]);
        let b = rows(&[[0.0, 3.0, 0.0]]);
        let scaled = rows(&[[0.0, 300.0, 0.0]]);
        let x = compute_angle(&a, &b).unwrap();
        let y = compute_angle(&a, &scaled).unwrap();
        assert!((x[0] - y[0]).abs() < 1e-15);
    }

    #[test]
    fn test_signed_angle_is_antisymmetric() {
        let a = rows(&[[1.0, 0.0, 0.0], [0.5, 0.5, 0.0], [2.0, -1.0, 0.0]]);
        let b = rows(&[[0.0, 1.0, 0.0], [-1.0, 0.2, 0.0], [0.3, 0.3, 0.0]]);
        let up = VectorBatch::single(Vector3::z_axis());

        let ab = compute_signed_angle(&a, &b, &up).unwrap();
        let ba = compute_signed_angle(&b, &a, &up).unwrap();
        for (x, y) in ab.iter().zip(ba.iter()) {
            assert!((x + y).abs() < 1e-15, "{} vs {}", x, y);
        }
        assert!((ab[0] - HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_signed_angle_flips_with_normal() {
        let a = rows(&[[1.0, 0.0, 0.0]]);
        let b = rows(&[[0.0, 1.0, 0.0]]);
        let down = VectorBatch::single(-Vector3::z_axis());
        let angles = compute_signed_angle(&a, &b, &down).unwrap();
        assert!((angles[0] + HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_signed_angle_anti_parallel_is_pi() {
        let a = rows(&[[1.0, 0.0, 0.0]]);
        let b = rows(&[[-1.0, 0.0, 0.0]]);
        let up = VectorBatch::single(Vector3::z_axis());
        let ab = compute_signed_angle(&a, &b, &up).unwrap();
        let ba = compute_signed_angle(&b, &a, &up).unwrap();
        assert_eq!(ab[0], PI);
        assert_eq!(ba[0], PI);
    }

    #[test]
    fn test_signed_angle_per_pair_normals() {
        let a = rows(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        let b = rows(&[[0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let normals = rows(&[[0.0, 0.0, 1.0], [-1.0, 0.0, 0.0]]);
        let angles = compute_signed_angle(&a, &b, &normals).unwrap();
        assert!((angles[0] - HALF_PI).abs() < 1e-15);
        assert!((angles[1] + HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_signed_angle_measures_projection_onto_normal_plane() {
        let a = rows(&[[1.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
        let b = rows(&[[0.0, 1.0, 1.0], [-1.0, 1.0, 5.0]]);
        let up = VectorBatch::single(Vector3::z_axis());

        let unsigned = compute_angle(&a, &b).unwrap();
        let signed = compute_signed_angle(&a, &b, &up).unwrap();

        assert!((unsigned[0] - PI / 3.0).abs() < 1e-15);
        assert!((signed[0] - HALF_PI).abs() < 1e-15);

        // The projection opens wider than the 3D angle for this pair.
        assert!((signed[1] - 3.0 * PI / 4.0).abs() < 1e-15);
        assert!(signed[1] > unsigned[1]);
    }

    #[test]
    fn test_signed_angle_vector_along_normal_fails() {
        let a = rows(&[[1.0, 0.0, 0.0], [0.0, 0.0, 2.0]]);
        let b = rows(&[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
        let up = VectorBatch::single(Vector3::z_axis());
        let err = compute_signed_angle(&a, &b, &up).unwrap_err();
        assert!(matches!(err, GeomError::DegenerateVector { .. }));
        assert_eq!(err.offending_indices(), Some(&[1][..]));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let a = rows(&[[0.0, 0.0, 0.0]]);
        let b = rows(&[[1.0, 0.0, 0.0]]);
        let up = VectorBatch::single(Vector3::z_axis());
        let negative = EngineConfig::default().with_degenerate_epsilon(-1.0);
        let nan = EngineConfig::default().with_degenerate_epsilon(f64::NAN);

        for config in [negative, nan] {
            assert!(matches!(
                compute_angle_with(&a, &b, &config),
                Err(GeomError::InvalidConfig { .. })
            ));
            assert!(matches!(
                compute_signed_angle_with(&a, &b, &up, &config),
                Err(GeomError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn test_signed_angle_bad_normals() {
        let a = rows(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let normals = rows(&[[0.0, 0.0, 1.0], [0.0, 0.0, 1.0]]);
        let err = compute_signed_angle(&a, &a, &normals).unwrap_err();
        assert!(matches!(err, GeomError::ShapeMismatch { .. }));

        let zero = VectorBatch::single(Vector3::zeros());
        let err = compute_signed_angle(&a, &a, &zero).unwrap_err();
        assert!(matches!(err, GeomError::DegenerateVector { .. }));
    }

    #[test]
    fn test_length_mismatch() {
        let a = rows(&[[1.0, 0.0, 0.0]]);
        let b = rows(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        let err = compute_angle(&a, &b).unwrap_err();
        assert!(matches!(err, GeomError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_layout_mismatch() {
        let a = rows(&[[1.0, 0.0, 0.0]]);
        let b = a.to_layout(Layout::DimensionMajor);
        let err = compute_angle(&a, &b).unwrap_err();
        assert!(err.to_string().contains("layouts differ"));
    }

    #[test]
    fn test_degenerate_on_either_side() {
        let a = rows(&[[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
        let b = rows(&[[0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]);
        let err = compute_angle(&a, &b).unwrap_err();
        assert_eq!(err.offending_indices(), Some(&[1, 2][..]));
    }

    #[test]
    fn test_no_cross_pair_leakage() {
        let a = rows(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let b = rows(&[[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 1.0, 0.0]]);
        let batched = compute_angle(&a, &b).unwrap();
        assert_eq!(batched.len(), 3);

        for i in 0..3 {
            let single = compute_angle(
                &VectorBatch::single(a[i]),
                &VectorBatch::single(b[i]),
            )
            .unwrap();
            assert_eq!(single[0], batched[i]);
        }
    }
}
