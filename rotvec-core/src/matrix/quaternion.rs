//! Unit quaternions for applying and composing axis-angle rotations.
//!
//! A rotation by angle `a` about unit axis `k` is the quaternion
//! `q = (cos(a/2), sin(a/2) k)`. Rotating a vector uses the sandwich product
//! `q v q*`, evaluated here in the expanded form
//!
//! ```text
//! v' = v + 2w (u x v) + 2 u x (u x v)        u = (x, y, z)
//! ```
//!
//! which avoids building the full product.
//!
//! ```
//! use rotvec_core::{Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = Quaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
//! let v = q.rotate_vector(&Vector3::x_axis());
//! assert!((v - Vector3::y_axis()).magnitude() < 1e-15);
//! ```

use std::fmt;

use super::{RotationMatrix3, Vector3};

/// A quaternion `w + xi + yj + zk`, scalar part `w`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Builds the rotation by `angle` radians about the unit vector `axis`.
    ///
    /// `axis` must already be unit length.
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Self {
        let (s, c) = libm::sincos(0.5 * angle);
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub fn vector_part(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn norm(&self) -> f64 {
        libm::sqrt(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// The conjugate, which is the inverse rotation for a unit quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Hamilton product `self * other`: applies `other` first, then `self`.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(
            self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        )
    }

    /// Rotates `v` by this (unit) quaternion.
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        let u = self.vector_part();
        let t = u.cross(v) * 2.0;
        *v + t * self.w + u.cross(&t)
    }

    /// Returns `[x, y, z, w]`, the scalar-last ordering common in robotics and
    /// scientific Python tooling.
    pub fn to_scalar_last(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Converts this unit quaternion to the equivalent rotation matrix.
    pub fn to_rotation_matrix(&self) -> RotationMatrix3 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        RotationMatrix3::from_array([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - w * z),
                2.0 * (x * z + w * y),
            ],
            [
                2.0 * (x * y + w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - w * x),
            ],
            [
                2.0 * (x * z - w * y),
                2.0 * (y * z + w * x),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ])
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion(w={:.9}, x={:.9}, y={:.9}, z={:.9})",
            self.w, self.x, self.y, self.z
        )
    }
}
