//! 3D vectors, rotation matrices and quaternions.
//!
//! - [`Vector3`]: 3D Cartesian vector
//! - [`RotationMatrix3`]: 3×3 orthogonal matrix, active convention
//! - [`Quaternion`]: unit quaternion for applying and composing rotations

mod quaternion;
mod rotation_matrix;
mod vector3;

pub use quaternion::Quaternion;
pub use rotation_matrix::RotationMatrix3;
pub use vector3::Vector3;
