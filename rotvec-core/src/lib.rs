//! Batch 3D vector geometry: normalization, angles and axis-angle rotations.
//!
//! `rotvec-core` works on batches of 3D vectors. Paired batches are combined
//! element by element, and each element's result depends only on the inputs at
//! the same index. Every operation is pure and fails atomically: a single bad
//! element rejects the whole call and the error names every offending index.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`batch`] | [`VectorBatch`], [`AngleBatch`] and the [`Layout`] tag |
//! | [`normalize`] | Unit-length normalization with degenerate detection |
//! | [`angle`] | Unsigned and signed angles between paired vectors |
//! | [`rotation`] | [`AxisAngle`], [`RotationBatch`], the rotation taking one vector onto another |
//! | [`apply`] | Rotating vectors, with singleton broadcasting |
//! | [`engine`] | [`RotationEngine`], the operations under one [`EngineConfig`] |
//! | [`matrix`] | [`Vector3`], [`RotationMatrix3`], [`Quaternion`] |
//! | [`scene`] | Arc and arrow geometry for plotting front ends |
//! | [`samples`] | Per-parameter medians of flattened sampler output |
//! | [`config`] | [`EngineConfig`] thresholds |
//! | [`errors`] | [`GeomError`] and [`GeomResult`] |
//!
//! # Pipeline
//!
//! ```
//! use rotvec_core::{apply_rotation, compute_angle, compute_rotation, VectorBatch};
//!
//! let v1 = VectorBatch::from_rows(&[[1.0, 0.0, 0.0]]);
//! let v2 = VectorBatch::from_rows(&[[0.0, 1.0, 0.0]]);
//!
//! let angles = compute_angle(&v1, &v2)?;
//! let rotations = compute_rotation(&v1, &v2)?;
//! let rotated = apply_rotation(&v1, &rotations)?;
//!
//! assert!((angles[0] - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! assert!(rotated[0].max_difference(&v2[0]) < 1e-15);
//! # Ok::<(), rotvec_core::GeomError>(())
//! ```
//!
//! # Design Notes
//!
//! - **One storage order**: batches always hold `Vec<Vector3>`. The [`Layout`]
//!   tag only records whether the caller supplied rows or columns, and results
//!   are handed back in the same shape.
//! - **Radians throughout**: [`AngleBatch::to_degrees`] converts for display.
//! - **Active rotations**: a rotation by `+θ` about `k` turns vectors
//!   counter-clockwise when viewed from the tip of `k`.

pub mod angle;
pub mod apply;
pub mod batch;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod matrix;
pub mod normalize;
pub mod rotation;
pub mod samples;
pub mod scene;

pub use angle::{compute_angle, compute_angle_with, compute_signed_angle, compute_signed_angle_with};
pub use apply::apply_rotation;
pub use batch::{AngleBatch, Layout, VectorBatch};
pub use config::EngineConfig;
pub use engine::RotationEngine;
pub use errors::{GeomError, GeomResult};
pub use matrix::{Quaternion, RotationMatrix3, Vector3};
pub use normalize::{normalize, normalize_with};
pub use rotation::{compute_rotation, compute_rotation_with, AxisAngle, RotationBatch};

pub mod test_helpers;
