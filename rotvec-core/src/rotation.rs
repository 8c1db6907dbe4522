//! Axis-angle rotations that carry one vector onto another.
//!
//! For a pair `(v1, v2)` with unit directions `u1`, `u2`, the rotation axis is
//! the normalized cross product `u1 × u2` and the angle is the unsigned angle
//! from [`compute_angle`](crate::compute_angle). Rotating `v1` by the result
//! points it along `v2`.
//!
//! ```
//! use rotvec_core::{apply_rotation, compute_rotation, VectorBatch, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let v1 = VectorBatch::from_rows(&[[1.0, 0.0, 0.0]]);
//! let v2 = VectorBatch::from_rows(&[[0.0, 1.0, 0.0]]);
//!
//! let rotations = compute_rotation(&v1, &v2)?;
//! assert!((rotations[0].angle() - FRAC_PI_2).abs() < 1e-15);
//! assert_eq!(rotations[0].axis(), Vector3::z_axis());
//!
//! let rotated = apply_rotation(&v1, &rotations)?;
//! assert!(rotated[0].max_difference(&Vector3::y_axis()) < 1e-15);
//! # Ok::<(), rotvec_core::GeomError>(())
//! ```
//!
//! # Parallel Pairs
//!
//! When `u1` and `u2` are parallel or anti-parallel the cross product vanishes
//! and no axis is defined. Rather than emitting a zero or arbitrary axis,
//! the whole batch fails with [`GeomError::ParallelVectors`].

use tracing::{debug, trace};

use crate::angle::{unit_pairs, unsigned_angle};
use crate::{
    EngineConfig, GeomError, GeomResult, Quaternion, RotationMatrix3, Vector3, VectorBatch,
};

/// A rotation by `angle` radians about a unit `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngle {
    axis: Vector3,
    angle: f64,
}

impl AxisAngle {
    /// Builds a rotation about `axis`, which is normalized here.
    ///
    /// Fails with [`GeomError::DegenerateVector`] if the axis norm is at or below `epsilon`.
    pub fn new(axis: Vector3, angle: f64, epsilon: f64) -> GeomResult<Self> {
        let axis = axis
            .try_normalize(epsilon)
            .ok_or_else(|| GeomError::degenerate_vector("AxisAngle::new", vec![0], epsilon))?;
        Ok(Self { axis, angle })
    }

    /// Builds a rotation from an axis already known to be unit length.
    pub(crate) fn from_unit_axis(axis: Vector3, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// The unit rotation axis.
    #[inline]
    pub fn axis(&self) -> Vector3 {
        self.axis
    }

    /// The rotation angle in radians.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The rotation vector `axis * angle`.
    pub fn rotation_vector(&self) -> Vector3 {
        self.axis * self.angle
    }

    /// The same rotation in reverse.
    pub fn inverse(&self) -> Self {
        Self::from_unit_axis(self.axis, -self.angle)
    }

    pub fn to_rotation_matrix(&self) -> RotationMatrix3 {
        RotationMatrix3::from_axis_angle(&self.axis, self.angle)
    }

    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_axis_angle(&self.axis, self.angle)
    }

    /// Rotates a single vector.
    pub fn rotate(&self, v: &Vector3) -> Vector3 {
        self.to_quaternion().rotate_vector(v)
    }
}

/// One axis-angle rotation per vector pair.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationBatch {
    rotations: Vec<AxisAngle>,
}

impl RotationBatch {
    pub fn new(rotations: Vec<AxisAngle>) -> Self {
        Self { rotations }
    }

    /// A batch holding one rotation, used for broadcasting.
    pub fn single(rotation: AxisAngle) -> Self {
        Self::new(vec![rotation])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[AxisAngle] {
        &self.rotations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AxisAngle> {
        self.rotations.iter()
    }

    pub fn angles(&self) -> Vec<f64> {
        self.rotations.iter().map(AxisAngle::angle).collect()
    }

    pub fn axes(&self) -> Vec<Vector3> {
        self.rotations.iter().map(AxisAngle::axis).collect()
    }

    /// Rotation vectors (`axis * angle`), one per rotation.
    pub fn rotation_vectors(&self) -> Vec<Vector3> {
        self.rotations
            .iter()
            .map(AxisAngle::rotation_vector)
            .collect()
    }

    /// Every rotation reversed.
    pub fn inverse(&self) -> Self {
        Self::new(self.rotations.iter().map(AxisAngle::inverse).collect())
    }

    pub fn to_matrices(&self) -> Vec<RotationMatrix3> {
        self.rotations
            .iter()
            .map(AxisAngle::to_rotation_matrix)
            .collect()
    }

    pub fn to_quaternions(&self) -> Vec<Quaternion> {
        self.rotations.iter().map(AxisAngle::to_quaternion).collect()
    }
}

impl std::ops::Index<usize> for RotationBatch {
    type Output = AxisAngle;

    fn index(&self, index: usize) -> &AxisAngle {
        &self.rotations[index]
    }
}

impl FromIterator<AxisAngle> for RotationBatch {
    fn from_iter<I: IntoIterator<Item = AxisAngle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Rotation carrying each `batch1` vector onto the direction of its `batch2`
/// partner, using the default thresholds.
pub fn compute_rotation(batch1: &VectorBatch, batch2: &VectorBatch) -> GeomResult<RotationBatch> {
    compute_rotation_with(batch1, batch2, &EngineConfig::default())
}

pub fn compute_rotation_with(
    batch1: &VectorBatch,
    batch2: &VectorBatch,
    config: &EngineConfig,
) -> GeomResult<RotationBatch> {
    const OPERATION: &str = "compute_rotation";
    config.validate()?;
    trace!(len = batch1.len(), "compute_rotation");

    let (u1, u2) = unit_pairs(OPERATION, batch1, batch2, config)?;

    let crosses: Vec<Vector3> = u1.iter().zip(&u2).map(|(a, b)| a.cross(b)).collect();

    let parallel: Vec<usize> = crosses
        .iter()
        .enumerate()
        .filter(|(_, c)| c.magnitude() <= config.parallel_epsilon)
        .map(|(i, _)| i)
        .collect();

    if !parallel.is_empty() {
        debug!(indices = ?parallel, epsilon = config.parallel_epsilon, "rejecting parallel pairs");
        return Err(GeomError::parallel_vectors(OPERATION, parallel));
    }

    let rotations = crosses
        .iter()
        .zip(u1.iter().zip(&u2))
        .map(|(c, (a, b))| AxisAngle::from_unit_axis(*c / c.magnitude(), unsigned_angle(a, b)))
        .collect();
    Ok(RotationBatch::new(rotations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HALF_PI, PI};

    #[test]
    fn test_x_to_y() {
        let v1 = VectorBatch::from_rows(&[[1.0, 0.0, 0.0]]);
        let v2 = VectorBatch::from_rows(&[[0.0, 1.0, 0.0]]);
        let rotations = compute_rotation(&v1, &v2).unwrap();

        assert_eq!(rotations.len(), 1);
        assert_eq!(rotations[0].axis(), Vector3::z_axis());
        assert!((rotations[0].angle() - HALF_PI).abs() < 1e-15);

        let rotated = rotations[0].rotate(&v1[0]);
        assert!(rotated.max_difference(&Vector3::y_axis()) < 1e-15);
    }

    #[test]
    fn test_axis_is_unit_and_perpendicular() {
        let v1 = VectorBatch::from_rows(&[[3.0, -1.0, 2.0], [0.1, 0.2, 0.3]]);
        let v2 = VectorBatch::from_rows(&[[-7.0, 4.0, 0.5], [9.0, -1.0, 0.0]]);
        let rotations = compute_rotation(&v1, &v2).unwrap();

        for (i, r) in rotations.iter().enumerate() {
            assert!((r.axis().magnitude() - 1.0).abs() < 1e-15);
            assert!(r.axis().dot(&v1[i]).abs() < 1e-14);
            assert!(r.axis().dot(&v2[i]).abs() < 1e-14);
            assert!(r.angle() > 0.0 && r.angle() < PI);
        }
    }

    #[test]
    fn test_rotation_maps_direction() {
        let v1 = VectorBatch::from_rows(&[[3.0, -1.0, 2.0], [0.0, 0.0, 5.0]]);
        let v2 = VectorBatch::from_rows(&[[-7.0, 4.0, 0.5], [1.0, 1.0, 0.0]]);
        let rotations = compute_rotation(&v1, &v2).unwrap();

        for i in 0..2 {
            let rotated = rotations[i].rotate(&v1[i]);
            let expected = v2[i] * (v1[i].magnitude() / v2[i].magnitude());
            assert!(rotated.max_difference(&expected) < 1e-14);
        }
    }

    #[test]
    fn test_identical_vectors_are_parallel() {
        let v = VectorBatch::from_rows(&[[1.0, 2.0, 3.0]]);
        let err = compute_rotation(&v, &v).unwrap_err();
        assert!(matches!(err, GeomError::ParallelVectors { .. }));
    }

    #[test]
    fn test_reports_parallel_and_anti_parallel_indices() {
        let v1 = VectorBatch::from_rows(&[[1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 2.0, 0.0]]);
        let v2 = VectorBatch::from_rows(&[[0.0, 1.0, 0.0], [-4.0, 0.0, 0.0], [0.0, 7.0, 0.0]]);
        let err = compute_rotation(&v1, &v2).unwrap_err();
        assert_eq!(err.offending_indices(), Some(&[1, 2][..]));
    }

    #[test]
    fn test_degenerate_checked_before_parallel() {
        let v1 = VectorBatch::from_rows(&[[0.0, 0.0, 0.0]]);
        let v2 = VectorBatch::from_rows(&[[1.0, 0.0, 0.0]]);
        let err = compute_rotation(&v1, &v2).unwrap_err();
        assert!(matches!(err, GeomError::DegenerateVector { .. }));
    }

    #[test]
    fn test_parallel_epsilon_from_config() {
        let v1 = VectorBatch::from_rows(&[[1.0, 0.0, 0.0]]);
        let v2 = VectorBatch::from_rows(&[[1.0, 1e-3, 0.0]]);
        assert!(compute_rotation(&v1, &v2).is_ok());

        let strict = EngineConfig::default().with_parallel_epsilon(1e-2);
        assert!(compute_rotation_with(&v1, &v2, &strict).is_err());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let v1 = VectorBatch::from_rows(&[[1.0, 0.0, 0.0]]);
        let v2 = VectorBatch::from_rows(&[[0.0, 1.0, 0.0]]);
        let config = EngineConfig::default().with_parallel_epsilon(f64::NAN);
        let err = compute_rotation_with(&v1, &v2, &config).unwrap_err();
        assert!(matches!(err, GeomError::InvalidConfig { .. }));
    }

    #[test]
    fn test_large_perpendicular_vectors() {
        let v1 = VectorBatch::from_rows(&[[1e200, 0.0, 0.0]]);
        let v2 = VectorBatch::from_rows(&[[0.0, 1e200, 0.0]]);

        let angles = crate::compute_angle(&v1, &v2).unwrap();
        assert!((angles[0] - HALF_PI).abs() < 1e-15);

        let rotations = compute_rotation(&v1, &v2).unwrap();
        assert_eq!(rotations[0].axis(), Vector3::z_axis());
        assert!((rotations[0].angle() - HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_axis_angle_new_normalizes() {
        let r = AxisAngle::new(Vector3::new(0.0, 0.0, 4.0), 1.0, 1e-12).unwrap();
        assert_eq!(r.axis(), Vector3::z_axis());
        assert_eq!(r.rotation_vector(), Vector3::new(0.0, 0.0, 1.0));

        assert!(AxisAngle::new(Vector3::zeros(), 1.0, 1e-12).is_err());
    }

    #[test]
    fn test_inverse_undoes_rotation() {
        let v1 = VectorBatch::from_rows(&[[1.0, 2.0, 0.5]]);
        let v2 = VectorBatch::from_rows(&[[-1.0, 0.0, 3.0]]);
        let rotations = compute_rotation(&v1, &v2).unwrap();

        let forward = rotations[0].rotate(&v1[0]);
        let back = rotations.inverse()[0].rotate(&forward);
        assert!(back.max_difference(&v1[0]) < 1e-14);
    }

    #[test]
    fn test_representations_agree() {
        let v1 = VectorBatch::from_rows(&[[1.0, 2.0, 0.5], [0.0, 1.0, 0.0]]);
        let v2 = VectorBatch::from_rows(&[[-1.0, 0.0, 3.0], [0.0, 0.0, 1.0]]);
        let rotations = compute_rotation(&v1, &v2).unwrap();

        let matrices = rotations.to_matrices();
        let quaternions = rotations.to_quaternions();
        assert_eq!(matrices.len(), 2);
        assert_eq!(quaternions.len(), 2);

        let probe = Vector3::new(0.3, -0.7, 1.9);
        for i in 0..2 {
            assert!(matrices[i].is_rotation_matrix(1e-14));
            let by_matrix = matrices[i] * probe;
            let by_quat = quaternions[i].rotate_vector(&probe);
            assert!(by_matrix.max_difference(&by_quat) < 1e-14);
        }

        let vectors = rotations.rotation_vectors();
        assert!((vectors[1].magnitude() - HALF_PI).abs() < 1e-15);
        assert!(vectors[1].max_difference(&(Vector3::x_axis() * HALF_PI)) < 1e-15);
    }
}
