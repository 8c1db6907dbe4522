//! 3x3 rotation matrices built from axis-angle rotations.
//!
//! A rotation matrix is a 3x3 orthogonal matrix with determinant +1. Applied to a
//! vector it rotates that vector while preserving its length. Every
//! [`AxisAngle`](crate::AxisAngle) converts to one of these through
//! [`from_axis_angle`](RotationMatrix3::from_axis_angle).
//!
//! # Rotation Convention
//!
//! Matrices here are **active**: they rotate the vector, not the frame. A
//! positive angle turns counterclockwise when looking from the tip of the axis
//! toward the origin, so a +90 degree rotation about Z takes `[1, 0, 0]` to
//! `[0, 1, 0]`:
//!
//! ```
//! use rotvec_core::{RotationMatrix3, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let m = RotationMatrix3::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
//! let v = m * Vector3::x_axis();
//! assert!((v - Vector3::y_axis()).magnitude() < 1e-15);
//! ```
//!
//! # Composing Rotations
//!
//! Rotation matrices compose by multiplication. To apply rotation A, then rotation B,
//! compute `B * A` (the rightmost matrix acts first on the vector).
//!
//! # Storage Layout
//!
//! Elements are stored in row-major order as `[[f64; 3]; 3]`. The element at row `i`,
//! column `j` is accessed as `matrix[(i, j)]` or `matrix.get(i, j)`:
//!
//! ```text
//! | r00 r01 r02 |   | x |   | r00*x + r01*y + r02*z |
//! | r10 r11 r12 | * | y | = | r10*x + r11*y + r12*z |
//! | r20 r21 r22 |   | z |   | r20*x + r21*y + r22*z |
//! ```
//!
//! # Inverting Rotations
//!
//! For a proper rotation matrix, the inverse equals the transpose.

use std::fmt;

use super::Vector3;

/// A 3x3 rotation matrix.
///
/// Represents proper rotation matrices (orthogonal with determinant +1). All
/// angles are in radians. The matrix uses row-major storage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    /// Creates the 3x3 identity matrix.
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a rotation matrix from a 3x3 array of elements.
    ///
    /// The array is interpreted as row-major: `elements[i][j]` is row `i`, column `j`.
    ///
    /// This does not validate that the matrix is a proper rotation. Use
    /// [`is_rotation_matrix`](Self::is_rotation_matrix) to check if needed.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Builds the active rotation by `angle` radians about the unit vector `axis`.
    ///
    /// Uses the Rodrigues formula
    ///
    /// ```text
    /// R = cos(a) I + sin(a) [k]x + (1 - cos(a)) k k^T
    /// ```
    ///
    /// where `[k]x` is the cross-product matrix of `axis`. `axis` must already be
    /// unit length; it is not renormalized here.
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Self {
        let (s, c) = libm::sincos(angle);
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        Self::from_array([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
        ])
    }

    /// Returns the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Returns a reference to the underlying 3x3 array.
    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Multiplies this matrix by another, returning the product.
    ///
    /// The result applies `other` first, then `self`. You can also use the `*`
    /// operator: `a * b` or `&a * &b`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Applies this matrix to a vector, computing `M * v`.
    pub fn apply_to_vector(&self, vector: &Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * vector.x + m[0][1] * vector.y + m[0][2] * vector.z,
            m[1][0] * vector.x + m[1][1] * vector.y + m[1][2] * vector.z,
            m[2][0] * vector.x + m[2][1] * vector.y + m[2][2] * vector.z,
        )
    }

    /// Computes the determinant of this matrix.
    ///
    /// +1 for a proper rotation, -1 for a reflection.
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose of this matrix, which is the inverse rotation.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Checks whether this matrix is a valid rotation matrix within a tolerance.
    ///
    /// A proper rotation matrix has determinant +1 and satisfies `M * M^T = I`.
    ///
    /// ```
    /// use rotvec_core::{RotationMatrix3, Vector3};
    ///
    /// let axis = Vector3::new(1.0, 1.0, 0.0).try_normalize(1e-12).unwrap();
    /// let m = RotationMatrix3::from_axis_angle(&axis, 0.7);
    /// assert!(m.is_rotation_matrix(1e-14));
    ///
    /// let scaled = RotationMatrix3::from_array([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(!scaled.is_rotation_matrix(1e-14));
    /// ```
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let det = self.determinant();
        if (det - 1.0).abs() > tolerance {
            return false;
        }

        let product = self.multiply(&self.transpose());
        product.max_difference(&Self::identity()) <= tolerance
    }

    /// Returns the maximum absolute difference between corresponding elements.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply_to_vector(&vec)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply_to_vector(&vec)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
